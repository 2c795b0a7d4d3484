// SPDX-License-Identifier: MPL-2.0
//! Countries screen: a search box above the filtered country list.
//!
//! The component owns the query string and the display phase. It does not run
//! searches itself; edits are reported to the parent as events, and the
//! application update loop pushes results back in once the debounced filter
//! pass completes.

use crate::domain::Country;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{rule, scrollable, text, text_input, Column, Text};
use iced::{Element, Length};

/// What the area below the search box currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    /// Nothing searched yet.
    #[default]
    Idle,
    /// A filter pass is in flight.
    Loading,
    /// Results arrived; an empty list renders the "no results" state.
    Loaded(Vec<Country>),
    /// The filter pass failed with a user-visible message.
    Failed(String),
}

/// State for the countries screen.
#[derive(Debug, Clone, Default)]
pub struct State {
    query: String,
    phase: Phase,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// The search query as currently typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Marks a filter pass as started.
    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Replaces the display with fresh results.
    pub fn show_results(&mut self, countries: Vec<Country>) {
        self.phase = Phase::Loaded(countries);
    }

    /// Replaces the display with an error message.
    pub fn fail(&mut self, message: String) {
        self.phase = Phase::Failed(message);
    }
}

/// Messages emitted by the countries screen widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The user typed in the search box.
    QueryChanged(String),
    /// The user asked to clear the search box (Escape).
    ClearQuery,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The query changed; the parent should arm the debounce timer.
    QueryEdited,
}

/// Process a countries screen message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::QueryChanged(query) => {
            state.query = query;
            Event::QueryEdited
        }
        Message::ClearQuery => {
            if state.query.is_empty() {
                Event::None
            } else {
                state.query.clear();
                Event::QueryEdited
            }
        }
    }
}

/// Contextual data needed to render the countries screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the countries screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let search_box = text_input(&ctx.i18n.tr("search-placeholder"), ctx.state.query())
        .on_input(Message::QueryChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let body: Element<'a, Message> = match ctx.state.phase() {
        Phase::Idle => hint(ctx.i18n.tr("search-idle-hint")),
        Phase::Loading => hint(ctx.i18n.tr("search-loading")),
        Phase::Loaded(countries) if countries.is_empty() => {
            hint(ctx.i18n.tr("search-no-results"))
        }
        Phase::Loaded(countries) => country_list(countries),
        Phase::Failed(message) => Text::new(format!(
            "{}: {}",
            ctx.i18n.tr("search-error-prefix"),
            message
        ))
        .size(typography::BODY_LG)
        .style(styles::text_error)
        .into(),
    };

    Column::new()
        .push(search_box)
        .push(body)
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn hint<'a>(content: String) -> Element<'a, Message> {
    Text::new(content)
        .size(typography::BODY_LG)
        .style(styles::text_muted)
        .into()
}

fn country_list<'a>(countries: &'a [Country]) -> Element<'a, Message> {
    let mut list = Column::new().spacing(spacing::XXS);
    for country in countries {
        list = list.push(country_row(country));
        list = list.push(rule::horizontal(u32::from(sizing::ROW_DIVIDER)));
    }
    scrollable(list).height(Length::Fill).into()
}

fn country_row<'a>(country: &'a Country) -> Element<'a, Message> {
    let details = format!("{} • {}", country.code, country.phone_code);

    Column::new()
        .push(text(country.name.as_str()).size(typography::BODY_LG))
        .push(text(details).size(typography::CAPTION).style(styles::text_muted))
        .spacing(spacing::XXS)
        .padding([spacing::SM, 0.0])
        .width(Length::Fill)
        .into()
}

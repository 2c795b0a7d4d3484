// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the layers together at startup (constructor
//! injection: data repository into use case, use case into the update loop)
//! and owns the generation counters that implement the debounce-and-switch
//! search pipeline. Policy decisions (debounce window, locale resolution,
//! window sizing) stay close to the update loop so user-facing behavior is
//! easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::data::HardcodedCountryRepository;
use crate::domain::GetCountriesUseCase;
use crate::i18n::fluent::I18n;
use crate::ui::countries;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    countries: countries::State,
    use_case: Arc<GetCountriesUseCase>,
    /// Quiet period after the last keystroke before a filter pass runs.
    debounce: Duration,
    /// Invalidates debounce timers armed by earlier keystrokes.
    debounce_generation: u64,
    /// Invalidates results of superseded filter passes (switch-latest).
    search_generation: u64,
    /// Last query a pass actually ran for (distinct-until-changed).
    last_executed_query: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.countries.query())
            .field("debounce_generation", &self.debounce_generation)
            .field("search_generation", &self.search_generation)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let repository = Arc::new(HardcodedCountryRepository::new());
        Self {
            i18n: I18n::default(),
            countries: countries::State::new(),
            use_case: Arc::new(GetCountriesUseCase::new(repository)),
            debounce: Duration::from_millis(config::DEFAULT_DEBOUNCE_MS),
            debounce_generation: 0,
            search_generation: 0,
            last_executed_query: None,
        }
    }
}

impl App {
    /// Initializes application state and seeds the search pipeline with the
    /// initial empty query, so the full list appears after one debounce
    /// window.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let mut app = App {
            i18n,
            debounce: Duration::from_millis(config.debounce_ms()),
            ..Self::default()
        };

        let task = update::arm_debounce(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            countries: &mut self.countries,
            use_case: &self.use_case,
            debounce: self.debounce,
            debounce_generation: &mut self.debounce_generation,
            search_generation: &mut self.search_generation,
            last_executed_query: &mut self.last_executed_query,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();
        match message {
            Message::Countries(countries_message) => {
                update::handle_countries_message(&mut ctx, countries_message)
            }
            Message::DebounceElapsed(generation) => {
                update::handle_debounce_elapsed(&mut ctx, generation)
            }
            Message::SearchCompleted { generation, result } => {
                update::handle_search_completed(&mut ctx, generation, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            countries: &self.countries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::countries::Phase;

    fn query_changed(q: &str) -> Message {
        Message::Countries(countries::Message::QueryChanged(q.to_string()))
    }

    #[test]
    fn startup_seeds_pipeline_with_empty_query() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.debounce_generation, 1);
        assert_eq!(*app.countries.phase(), Phase::Idle);
        assert_eq!(app.last_executed_query, None);
    }

    #[test]
    fn keystroke_burst_collapses_to_one_pass() {
        let mut app = App::default();

        // "F", "Fr", "Fra" each re-arm the timer
        let _ = app.update(query_changed("F"));
        let _ = app.update(query_changed("Fr"));
        let _ = app.update(query_changed("Fra"));
        assert_eq!(app.debounce_generation, 3);

        // Timers for the first two keystrokes are stale
        let _ = app.update(Message::DebounceElapsed(1));
        let _ = app.update(Message::DebounceElapsed(2));
        assert_eq!(*app.countries.phase(), Phase::Idle);
        assert_eq!(app.search_generation, 0);

        // The surviving timer runs exactly one pass, for "Fra"
        let _ = app.update(Message::DebounceElapsed(3));
        assert_eq!(*app.countries.phase(), Phase::Loading);
        assert_eq!(app.search_generation, 1);
        assert_eq!(app.last_executed_query.as_deref(), Some("Fra"));
    }

    #[test]
    fn completed_pass_displays_results() {
        let mut app = App::default();
        let _ = app.update(query_changed("united"));
        let _ = app.update(Message::DebounceElapsed(1));

        let results = app.use_case.search("united").unwrap();
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            result: Ok(results),
        });

        match app.countries.phase() {
            Phase::Loaded(list) => {
                let names: Vec<&str> = list.iter().map(|c| c.name.as_str()).collect();
                assert_eq!(names, vec!["United States", "United Kingdom"]);
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[test]
    fn stale_search_result_is_discarded() {
        let mut app = App::default();

        // Pass 1 for "A" starts, then the user types "B" and pass 2 starts.
        let _ = app.update(query_changed("A"));
        let _ = app.update(Message::DebounceElapsed(1));
        let _ = app.update(query_changed("B"));
        let _ = app.update(Message::DebounceElapsed(2));
        assert_eq!(app.search_generation, 2);

        // The slow pass for "A" completes late and must be ignored.
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            result: Ok(vec![]),
        });
        assert_eq!(*app.countries.phase(), Phase::Loading);

        // The pass for "B" lands.
        let results = app.use_case.search("B").unwrap();
        let _ = app.update(Message::SearchCompleted {
            generation: 2,
            result: Ok(results.clone()),
        });
        assert_eq!(*app.countries.phase(), Phase::Loaded(results));
    }

    #[test]
    fn settled_query_equal_to_last_executed_does_not_rerun() {
        let mut app = App::default();
        let _ = app.update(query_changed("Fra"));
        let _ = app.update(Message::DebounceElapsed(1));
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            result: Ok(vec![]),
        });

        // Same text settles again (e.g. type a char, delete it).
        let _ = app.update(query_changed("Fran"));
        let _ = app.update(query_changed("Fra"));
        let _ = app.update(Message::DebounceElapsed(3));

        assert_eq!(app.search_generation, 1, "no second pass may start");
        assert!(matches!(app.countries.phase(), Phase::Loaded(_)));
    }

    #[test]
    fn failed_pass_shows_error_message() {
        let mut app = App::default();
        let _ = app.update(query_changed("x"));
        let _ = app.update(Message::DebounceElapsed(1));
        let _ = app.update(Message::SearchCompleted {
            generation: 1,
            result: Err(Error::Data("broken source".into())),
        });
        assert_eq!(
            *app.countries.phase(),
            Phase::Failed("Data Error: broken source".to_string())
        );
    }

    #[test]
    fn escape_clears_query_and_rearms_timer() {
        let mut app = App::default();
        let _ = app.update(query_changed("Jap"));
        assert_eq!(app.debounce_generation, 1);

        let _ = app.update(Message::Countries(countries::Message::ClearQuery));
        assert_eq!(app.countries.query(), "");
        assert_eq!(app.debounce_generation, 2);

        // Clearing an already-empty box must not re-arm anything.
        let _ = app.update(Message::Countries(countries::Message::ClearQuery));
        assert_eq!(app.debounce_generation, 2);
    }
}

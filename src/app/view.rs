// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::countries;
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub countries: &'a countries::State,
}

/// Renders the application view. There is a single screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen = countries::view(countries::ViewContext {
        i18n: ctx.i18n,
        state: ctx.countries,
    })
    .map(Message::Countries);

    Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

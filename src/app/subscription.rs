// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::countries;
use iced::keyboard::{self, key};
use iced::Subscription;

/// Keyboard shortcuts: Escape clears the search box.
pub fn create_keyboard_subscription() -> Subscription<Message> {
    keyboard::listen().filter_map(|event| match event {
        keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        } => Some(Message::Countries(countries::Message::ClearQuery)),
        _ => None,
    })
}

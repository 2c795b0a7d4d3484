// SPDX-License-Identifier: MPL-2.0
//! Centralized styles shared by the UI components.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Secondary text (hints, row details).
pub fn text_muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}

/// Error text, always in the error color regardless of theme.
pub fn text_error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! UI layer: widgets, styles, and the countries screen.

pub mod countries;
pub mod design_tokens;
pub mod styles;

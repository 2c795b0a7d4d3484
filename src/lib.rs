// SPDX-License-Identifier: MPL-2.0
//! `country_dial` is a small searchable country directory built with the
//! Iced GUI framework.
//!
//! It shows a fixed list of countries with their dialing prefixes, filtered
//! live by a debounced search box, and demonstrates a layered
//! data/domain/presentation/UI architecture with Fluent internationalization
//! and TOML-based user preferences.

pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;

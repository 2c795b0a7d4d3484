// SPDX-License-Identifier: MPL-2.0
//! The country value type.

use crate::error::{Error, Result};

/// An immutable country record.
///
/// Instances are created once at startup from the data layer's constant list
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code (e.g. `FR`).
    pub code: String,
    /// Human-readable display name (e.g. `France`).
    pub name: String,
    /// International dialing prefix including the `+` (e.g. `+33`).
    pub phone_code: String,
}

impl Country {
    /// Builds a country, rejecting records with blank fields.
    pub fn new(code: &str, name: &str, phone_code: &str) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(Error::Data("country code must not be empty".into()));
        }
        if name.trim().is_empty() {
            return Err(Error::Data("country name must not be empty".into()));
        }
        if phone_code.trim().is_empty() {
            return Err(Error::Data("country phone code must not be empty".into()));
        }

        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            phone_code: phone_code.to_string(),
        })
    }
}

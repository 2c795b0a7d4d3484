// SPDX-License-Identifier: MPL-2.0
//! Name filtering for the country list.
//!
//! This is a pure domain type without I/O. The debounce that decides *when*
//! a filter pass runs lives in the application update loop; this type only
//! answers *which* countries match.

use super::Country;

/// Case-insensitive substring filter over country display names.
///
/// A blank query (empty or whitespace-only) matches every country, so the
/// unfiltered list renders when the search box is cleared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NameFilter {
    raw: String,
    lowered: String,
}

impl NameFilter {
    /// Creates a filter for the given query, as typed by the user.
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            raw: query.to_string(),
            lowered: query.to_lowercase(),
        }
    }

    /// The query string as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.raw
    }

    /// Returns `true` if the query is empty or whitespace-only.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Returns `true` if this filter narrows the list (not blank).
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.is_blank()
    }

    /// Returns `true` if the country's display name contains the query,
    /// ignoring case. Blank queries match everything.
    #[must_use]
    pub fn matches(&self, country: &Country) -> bool {
        if self.is_blank() {
            return true;
        }
        country.name.to_lowercase().contains(&self.lowered)
    }

    /// Applies the filter, preserving the original list order.
    #[must_use]
    pub fn apply(&self, countries: &[Country]) -> Vec<Country> {
        countries
            .iter()
            .filter(|country| self.matches(country))
            .cloned()
            .collect()
    }
}

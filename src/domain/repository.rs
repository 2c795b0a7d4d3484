// SPDX-License-Identifier: MPL-2.0
//! Repository seam and the single use case built on top of it.

use super::{Country, NameFilter};
use crate::error::Result;
use std::sync::Arc;

/// Source of the country list.
///
/// The data layer provides the concrete implementation; the presentation
/// layer only ever sees this trait, so the source could be swapped without
/// touching the UI.
pub trait CountryRepository: Send + Sync {
    /// Returns the full country list in its canonical order.
    fn countries(&self) -> Result<Vec<Country>>;
}

/// Fetches countries, optionally narrowed by a name query.
///
/// Wired into the application root at startup (constructor injection) and
/// shared with background filter tasks via `Arc`.
pub struct GetCountriesUseCase {
    repository: Arc<dyn CountryRepository>,
}

impl GetCountriesUseCase {
    pub fn new(repository: Arc<dyn CountryRepository>) -> Self {
        Self { repository }
    }

    /// The full list, unfiltered.
    pub fn all(&self) -> Result<Vec<Country>> {
        self.repository.countries()
    }

    /// Countries whose display name contains `query` case-insensitively.
    /// A blank query behaves like [`Self::all`].
    pub fn search(&self, query: &str) -> Result<Vec<Country>> {
        let filter = NameFilter::new(query);
        Ok(filter.apply(&self.repository.countries()?))
    }
}

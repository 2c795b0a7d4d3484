// SPDX-License-Identifier: MPL-2.0
//! Pure domain layer: the country value type, the search filter, and the
//! repository seam consumed by the presentation layer.
//!
//! Nothing in this module performs I/O or touches the UI toolkit.

pub mod country;
pub mod repository;
pub mod search;

pub use country::Country;
pub use repository::{CountryRepository, GetCountriesUseCase};
pub use search::NameFilter;

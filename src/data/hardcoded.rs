// SPDX-License-Identifier: MPL-2.0
//! The built-in country list.

use crate::domain::{Country, CountryRepository};
use crate::error::Result;

/// The canonical ten-entry list, in display order.
const COUNTRIES: [(&str, &str, &str); 10] = [
    ("IN", "India", "+91"),
    ("US", "United States", "+1"),
    ("CA", "Canada", "+1"),
    ("GB", "United Kingdom", "+44"),
    ("AU", "Australia", "+61"),
    ("DE", "Germany", "+49"),
    ("FR", "France", "+33"),
    ("JP", "Japan", "+81"),
    ("CN", "China", "+86"),
    ("BR", "Brazil", "+55"),
];

/// Repository backed by the constant list above. Never blocks and only fails
/// if the table itself is malformed.
#[derive(Debug, Default, Clone, Copy)]
pub struct HardcodedCountryRepository;

impl HardcodedCountryRepository {
    pub fn new() -> Self {
        Self
    }
}

impl CountryRepository for HardcodedCountryRepository {
    fn countries(&self) -> Result<Vec<Country>> {
        COUNTRIES
            .iter()
            .map(|(code, name, phone_code)| Country::new(code, name, phone_code))
            .collect()
    }
}

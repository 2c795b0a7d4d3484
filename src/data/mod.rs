// SPDX-License-Identifier: MPL-2.0
//! Data layer: concrete country sources behind the domain repository trait.

pub mod hardcoded;

pub use hardcoded::HardcodedCountryRepository;

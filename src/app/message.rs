// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::Country;
use crate::error::Error;
use crate::ui::countries;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Countries(countries::Message),
    /// A debounce timer fired. Carries the generation it was armed for so
    /// timers from earlier keystrokes can be discarded.
    DebounceElapsed(u64),
    /// A filter pass finished. Carries the generation it was started for so
    /// results from superseded passes can be discarded (switch-latest).
    SearchCompleted {
        generation: u64,
        result: Result<Vec<Country>, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}

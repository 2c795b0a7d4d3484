// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The debounce-and-switch pipeline lives here. Every keystroke bumps the
//! debounce generation and arms a fresh timer; only the timer matching the
//! current generation runs a filter pass. Every pass bumps the search
//! generation; only results matching the current generation are displayed,
//! so a superseded query can never overwrite a newer one.

use super::Message;
use crate::domain::{Country, GetCountriesUseCase};
use crate::error::Error;
use crate::ui::countries;
use iced::Task;
use std::sync::Arc;
use std::time::Duration;

/// Mutable slices of `App` needed by the message handlers.
pub struct UpdateContext<'a> {
    pub countries: &'a mut countries::State,
    pub use_case: &'a Arc<GetCountriesUseCase>,
    pub debounce: Duration,
    pub debounce_generation: &'a mut u64,
    pub search_generation: &'a mut u64,
    pub last_executed_query: &'a mut Option<String>,
}

/// Routes a countries screen message and arms the debounce timer when the
/// query changed.
pub fn handle_countries_message(
    ctx: &mut UpdateContext<'_>,
    message: countries::Message,
) -> Task<Message> {
    match countries::update(ctx.countries, message) {
        countries::Event::None => Task::none(),
        countries::Event::QueryEdited => arm_debounce(ctx),
    }
}

/// Starts a new debounce window, invalidating any timer still in flight.
pub fn arm_debounce(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.debounce_generation += 1;
    let generation = *ctx.debounce_generation;
    let delay = ctx.debounce;

    Task::perform(async move { tokio::time::sleep(delay).await }, move |()| {
        Message::DebounceElapsed(generation)
    })
}

/// A debounce timer fired: run a filter pass if the timer is still current
/// and the settled query differs from the last one executed.
pub fn handle_debounce_elapsed(ctx: &mut UpdateContext<'_>, generation: u64) -> Task<Message> {
    if generation != *ctx.debounce_generation {
        // A newer keystroke re-armed the timer; this one is stale.
        return Task::none();
    }

    let query = ctx.countries.query().to_string();
    if ctx.last_executed_query.as_deref() == Some(query.as_str()) {
        // distinct-until-changed: same settled query, keep what's displayed
        return Task::none();
    }

    *ctx.search_generation += 1;
    let generation = *ctx.search_generation;
    *ctx.last_executed_query = Some(query.clone());
    ctx.countries.begin_loading();

    let use_case = Arc::clone(ctx.use_case);
    Task::perform(async move { use_case.search(&query) }, move |result| {
        Message::SearchCompleted { generation, result }
    })
}

/// A filter pass finished: display it unless a newer pass superseded it.
pub fn handle_search_completed(
    ctx: &mut UpdateContext<'_>,
    generation: u64,
    result: Result<Vec<Country>, Error>,
) -> Task<Message> {
    if generation != *ctx.search_generation {
        return Task::none();
    }

    match result {
        Ok(list) => ctx.countries.show_results(list),
        Err(err) => ctx.countries.fail(err.to_string()),
    }

    Task::none()
}

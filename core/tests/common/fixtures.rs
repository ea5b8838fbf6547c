// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use agenda_core::{AgendaState, Event, EventColor, EventDraft, EventId, EventStore};
use chrono::NaiveDate;

/// Shorthand for a date that is known to be valid.
#[must_use]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Creates a state holding the built-in seed events, with `2026-01-06` as today.
#[must_use]
pub fn seeded_state() -> AgendaState {
    AgendaState::new(EventStore::seeded(), ymd(2026, 1, 6))
}

/// Creates an event with both flags cleared.
///
/// # Example
///
/// ```ignore
/// let event = test_event(1, "Standup", "2026-01-06");
/// ```
#[must_use]
pub fn test_event(id: u32, title: &str, date: &str) -> Event {
    Event {
        id: EventId(id),
        title: title.to_string(),
        time: "09:00".to_string(),
        date: date.to_string(),
        description: String::new(),
        color: EventColor::Primary,
        is_favorite: false,
        notification: false,
    }
}

/// Creates an event draft with the given title on the given date.
#[must_use]
pub fn test_event_draft(title: &str, date: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        time: "16:00".to_string(),
        date: date.to_string(),
        description: format!("{title} description"),
        color: EventColor::Secondary,
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Schedule browsing workflow tests.
//!
//! These tests replay what a user does in a session: switching tabs, stepping through
//! days, searching, toggling flags, and adding events.

use agenda_core::{AgendaAction, DateStep, EventColor, EventDraft, EventId, Tab};

use crate::common::{assert_visible_ids, seeded_state, test_event_draft, ymd};

#[test]
fn browse_week_and_come_back_to_today() {
    // Arrange
    let mut state = seeded_state();

    // Act - walk a week forward
    let mut seen = Vec::new();
    for _ in 0..7 {
        state = state.reduce(AgendaAction::StepDate(DateStep::Forward));
        seen.push(state.visible().len());
    }

    // Assert
    assert_eq!(state.view.selected_date, ymd(2026, 1, 13));
    assert_eq!(seen, [1, 0, 0, 0, 0, 0, 0]);

    let state = state.reduce(AgendaAction::JumpToToday);
    assert_eq!(state.view.selected_date, ymd(2026, 1, 6));
    assert_visible_ids(&state, &[1, 2, 3]);
}

#[test]
fn favorite_from_schedule_shows_up_in_favorites() {
    // Arrange
    let state = seeded_state().reduce(AgendaAction::StepDate(DateStep::Forward));
    assert_visible_ids(&state, &[4]);

    // Act
    let state = state
        .reduce(AgendaAction::ToggleFavorite(EventId(4)))
        .reduce(AgendaAction::SelectTab(Tab::Favorites));

    // Assert
    assert_visible_ids(&state, &[1, 3, 4]);
    assert_eq!(state.view.selected_date, ymd(2026, 1, 7));
}

#[test]
fn muting_everything_empties_notifications() {
    // Arrange
    let mut state = seeded_state().reduce(AgendaAction::SelectTab(Tab::Notifications));
    let ids: Vec<_> = state.visible().iter().map(|e| e.id).collect();

    // Act
    for id in ids {
        state = state.reduce(AgendaAction::ToggleNotification(id));
    }

    // Assert
    assert!(state.visible().is_empty());
    assert_eq!(state.empty_message(), "no events with notifications");
}

#[test]
fn search_survives_tab_switches() {
    // Arrange
    let state = seeded_state()
        .reduce(AgendaAction::SelectTab(Tab::Search))
        .reduce(AgendaAction::UpdateSearchQuery("обед".to_string()));
    assert_visible_ids(&state, &[3]);

    // Act
    let state = state
        .reduce(AgendaAction::SelectTab(Tab::Schedule))
        .reduce(AgendaAction::SelectTab(Tab::Search));

    // Assert
    assert_eq!(state.view.search_query, "обед");
    assert_visible_ids(&state, &[3]);

    let state = state.reduce(AgendaAction::UpdateSearchQuery("nothing".to_string()));
    assert_eq!(state.empty_message(), "no events found");
}

#[test]
fn create_event_on_selected_day() {
    // Arrange
    let state = seeded_state()
        .reduce(AgendaAction::StepDate(DateStep::Forward))
        .reduce(AgendaAction::StepDate(DateStep::Forward));
    assert!(state.visible().is_empty());

    // Act
    let state = state.reduce(AgendaAction::CreateEvent(EventDraft {
        title: "Планирование".to_string(),
        time: "11:00".to_string(),
        color: EventColor::Accent,
        ..Default::default()
    }));

    // Assert
    assert_visible_ids(&state, &[5]);
    let event = state.events.get(EventId(5)).unwrap();
    assert_eq!(event.date, "2026-01-08");
    assert_eq!(event.color, EventColor::Accent);
}

#[test]
fn create_event_with_explicit_date_lands_elsewhere() {
    // Arrange
    let state = seeded_state();

    // Act
    let state = state.reduce(AgendaAction::CreateEvent(test_event_draft(
        "Отчёт",
        "2026-02-01",
    )));

    // Assert
    assert_visible_ids(&state, &[1, 2, 3]);
    let state = state.reduce(AgendaAction::SelectDate(ymd(2026, 2, 1)));
    assert_visible_ids(&state, &[5]);
}

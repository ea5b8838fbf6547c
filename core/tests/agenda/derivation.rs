// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Visible-event derivation integration tests.

use agenda_core::{AgendaAction, AgendaState, DateStep, EventStore, Tab};

use crate::common::{assert_visible_ids, seeded_state, test_event, ymd};

#[test]
fn favorites_tab_shows_favorites_in_order() {
    let state = seeded_state().reduce(AgendaAction::SelectTab(Tab::Favorites));
    assert_visible_ids(&state, &[1, 3]);
    assert!(state.visible().iter().all(|e| e.is_favorite));
}

#[test]
fn notifications_tab_shows_notified_events_in_order() {
    let state = seeded_state().reduce(AgendaAction::SelectTab(Tab::Notifications));
    assert_visible_ids(&state, &[1, 2, 4]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let events = EventStore::new(vec![
        test_event(1, "Встреча с командой", "2026-01-06"),
        test_event(2, "Презентация проекта", "2026-01-06"),
    ]);
    let state = AgendaState::new(events, ymd(2026, 1, 6))
        .reduce(AgendaAction::SelectTab(Tab::Search))
        .reduce(AgendaAction::UpdateSearchQuery("встреча".to_string()));
    assert_visible_ids(&state, &[1]);

    let state = state.reduce(AgendaAction::UpdateSearchQuery("ПРОЕКТ".to_string()));
    assert_visible_ids(&state, &[2]);
}

#[test]
fn empty_search_query_matches_everything() {
    let state = seeded_state().reduce(AgendaAction::SelectTab(Tab::Search));
    assert_visible_ids(&state, &[1, 2, 3, 4]);
}

#[test]
fn schedule_tab_matches_selected_date() {
    let state = seeded_state();
    assert_eq!(state.view.selected_date, ymd(2026, 1, 6));
    assert_visible_ids(&state, &[1, 2, 3]);

    let state = state.reduce(AgendaAction::StepDate(DateStep::Forward));
    assert_visible_ids(&state, &[4]);

    let state = state.reduce(AgendaAction::StepDate(DateStep::Forward));
    assert_visible_ids(&state, &[]);
    assert_eq!(state.empty_message(), "no events on this date");
}

#[test]
fn toggles_are_reflected_in_the_derivation() {
    let state = seeded_state()
        .reduce(AgendaAction::SelectTab(Tab::Favorites))
        .reduce(AgendaAction::ToggleFavorite(agenda_core::EventId(4)));
    assert_visible_ids(&state, &[1, 3, 4]);

    let state = state.reduce(AgendaAction::ToggleFavorite(agenda_core::EventId(1)));
    assert_visible_ids(&state, &[3, 4]);
}

#[test]
fn empty_message_follows_active_tab() {
    let state = AgendaState::new(EventStore::default(), ymd(2026, 1, 6));
    let cases = [
        (Tab::Favorites, "no favorite events"),
        (Tab::Notifications, "no events with notifications"),
        (Tab::Search, "no events found"),
        (Tab::Schedule, "no events on this date"),
    ];
    for (tab, message) in cases {
        let state = state.clone().reduce(AgendaAction::SelectTab(tab));
        assert!(state.visible().is_empty());
        assert_eq!(state.empty_message(), message);
    }
}

#[test]
fn view_actions_leave_events_untouched() {
    let before = seeded_state();
    let after = before
        .clone()
        .reduce(AgendaAction::SelectTab(Tab::Search))
        .reduce(AgendaAction::UpdateSearchQuery("x".to_string()))
        .reduce(AgendaAction::StepDate(DateStep::Backward))
        .reduce(AgendaAction::SelectDate(ymd(2030, 5, 1)))
        .reduce(AgendaAction::JumpToToday);
    assert_eq!(after.events, before.events);
    assert_eq!(after.today, before.today);
}

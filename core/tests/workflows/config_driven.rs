// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the initial state of a session,
//! including the pinned date, the default tab, and the replacement event list.

use agenda_core::{AgendaAction, AgendaState, Config, DateStep, EventStore, Tab};

use crate::common::{assert_visible_ids, ymd};

fn parse(src: &str) -> Config {
    let mut config: Config = toml::from_str(src).unwrap();
    config.normalize().unwrap();
    config
}

#[test]
fn empty_config_starts_on_real_today_with_seeds() {
    // Arrange
    let config = parse("");

    // Act
    let state = AgendaState::from_config(&config, ymd(2026, 10, 16));

    // Assert
    assert_eq!(state.events, EventStore::seeded());
    assert_eq!(state.today, ymd(2026, 10, 16));
    assert!(state.visible().is_empty());
    assert_eq!(state.empty_message(), "no events on this date");
}

#[test]
fn pinned_today_shows_seed_schedule() {
    // Arrange
    let config = parse(r#"today = "2026-01-06""#);

    // Act
    let state = AgendaState::from_config(&config, ymd(2026, 10, 16));

    // Assert
    assert_visible_ids(&state, &[1, 2, 3]);
    let state = state
        .reduce(AgendaAction::StepDate(DateStep::Forward))
        .reduce(AgendaAction::JumpToToday);
    assert_eq!(state.view.selected_date, ymd(2026, 1, 6));
}

#[test]
fn default_tab_is_applied() {
    // Arrange
    let config = parse(
        r#"
today = "2026-01-06"
default_tab = "notifications"
"#,
    );

    // Act
    let state = AgendaState::from_config(&config, ymd(2026, 10, 16));

    // Assert
    assert_eq!(state.view.active_tab, Tab::Notifications);
    assert_visible_ids(&state, &[1, 2, 4]);
}

#[test]
fn configured_events_replace_seeds() {
    // Arrange
    let config = parse(
        r#"
today = "2026-03-02"

[[events]]
id = 7
title = "Standup"
time = "09:00"
date = "2026-03-02"
notification = true

[[events]]
id = 2
title = "Review"
time = "15:00"
date = "2026-03-03"
is_favorite = true
"#,
    );

    // Act
    let state = AgendaState::from_config(&config, ymd(2026, 10, 16));

    // Assert
    assert_eq!(state.events.len(), 2);
    assert_visible_ids(&state, &[7]);

    let state = state.reduce(AgendaAction::CreateEvent(Default::default()));
    assert_visible_ids(&state, &[7, 8]);
}

#[test]
fn duplicate_ids_are_rejected() {
    // Arrange
    let mut config: Config = toml::from_str(
        r#"
[[events]]
id = 3
title = "A"
time = "09:00"
date = "2026-01-06"

[[events]]
id = 3
title = "B"
time = "09:30"
date = "2026-01-06"
"#,
    )
    .unwrap();

    // Act
    let result = config.normalize();

    // Assert
    assert!(result.is_err());
}

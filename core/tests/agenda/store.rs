// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event store integration tests.
//!
//! Tests the toggle operations and event creation.

use agenda_core::{EventColor, EventDraft, EventId, EventStore};

use crate::common::{assert_only_event_changed, test_event, test_event_draft};

#[test]
fn toggle_favorite_flips_only_the_target() {
    let before = EventStore::seeded();
    for event in before.iter() {
        let after = before.clone().toggle_favorite(event.id);
        assert_only_event_changed(&before, &after, event.id);

        let toggled = after.get(event.id).unwrap();
        assert_eq!(toggled.is_favorite, !event.is_favorite);
        assert_eq!(toggled.notification, event.notification);
        assert_eq!(toggled.title, event.title);
    }
}

#[test]
fn toggle_notification_flips_only_the_target() {
    let before = EventStore::seeded();
    for event in before.iter() {
        let after = before.clone().toggle_notification(event.id);
        assert_only_event_changed(&before, &after, event.id);

        let toggled = after.get(event.id).unwrap();
        assert_eq!(toggled.notification, !event.notification);
        assert_eq!(toggled.is_favorite, event.is_favorite);
    }
}

#[test]
fn toggling_twice_restores_the_store() {
    let store = EventStore::seeded();
    for event in store.iter() {
        let twice = store
            .clone()
            .toggle_favorite(event.id)
            .toggle_favorite(event.id);
        assert_eq!(twice, store);

        let twice = store
            .clone()
            .toggle_notification(event.id)
            .toggle_notification(event.id);
        assert_eq!(twice, store);
    }
}

#[test]
fn toggling_a_missing_id_is_a_no_op() {
    let store = EventStore::seeded();
    assert_eq!(store.clone().toggle_favorite(EventId(99)), store);
    assert_eq!(store.clone().toggle_notification(EventId(0)), store);
    assert_eq!(
        EventStore::default().toggle_favorite(EventId(1)),
        EventStore::default()
    );
}

#[test]
fn create_event_appends_with_fresh_id() {
    let store = EventStore::seeded();
    let (after, id) = store
        .clone()
        .create_event(test_event_draft("Ретроспектива", "2026-01-08"));

    assert_eq!(id, EventId(5));
    assert_eq!(after.len(), store.len() + 1);
    for (b, a) in store.iter().zip(after.iter()) {
        assert_eq!(b, a);
    }

    let created = after.iter().last().unwrap();
    assert_eq!(created.id, id);
    assert_eq!(created.title, "Ретроспектива");
    assert_eq!(created.time, "16:00");
    assert_eq!(created.date, "2026-01-08");
    assert_eq!(created.color, EventColor::Secondary);
    assert!(!created.is_favorite);
    assert!(!created.notification);
}

#[test]
fn create_event_ids_stay_unique_with_gaps() {
    let store = EventStore::new(vec![
        test_event(3, "a", "2026-01-06"),
        test_event(1, "b", "2026-01-06"),
    ]);
    let (store, first) = store.create_event(EventDraft::default());
    let (store, second) = store.create_event(EventDraft::default());

    assert_eq!(first, EventId(4));
    assert_eq!(second, EventId(5));
    assert_eq!(store.get(second).unwrap().title, "New event");
}

#[test]
fn create_event_after_largest_id_reuses_smallest_free_id() {
    let store = EventStore::new(vec![
        test_event(u32::MAX, "last", "2026-01-06"),
        test_event(1, "first", "2026-01-06"),
    ]);
    let (store, id) = store.create_event(EventDraft::default());
    assert_eq!(id, EventId(2));

    let (store, next) = store.create_event(EventDraft::default());
    assert_eq!(next, EventId(3));

    let ids: Vec<_> = store.iter().map(|e| e.id.0).collect();
    assert_eq!(ids, [u32::MAX, 1, 2, 3]);

    let toggled = store.toggle_favorite(id);
    assert!(toggled.get(id).unwrap().is_favorite);
    assert!(!toggled.get(EventId(u32::MAX)).unwrap().is_favorite);
}

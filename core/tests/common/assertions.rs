// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use agenda_core::{AgendaState, EventId, EventStore};

/// Asserts that the visible events are exactly the given ids, in order.
pub fn assert_visible_ids(state: &AgendaState, expected: &[u32]) {
    let actual: Vec<u32> = state.visible().iter().map(|e| e.id.0).collect();
    assert_eq!(actual, expected, "visible ids under {:?}", state.view);
}

/// Asserts that `after` equals `before` except for the event with the given id, which must
/// differ, and that the order of ids is unchanged.
pub fn assert_only_event_changed(before: &EventStore, after: &EventStore, id: EventId) {
    assert_eq!(before.len(), after.len(), "collection length changed");
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id, "collection order changed");
        if b.id == id {
            assert_ne!(b, a, "event {id} did not change");
        } else {
            assert_eq!(b, a, "event {} changed unexpectedly", b.id);
        }
    }
}

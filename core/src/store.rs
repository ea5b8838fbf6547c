// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use crate::event::{Event, EventColor, EventDraft, EventId};

/// In-memory ordered collection of events.
///
/// Mutations consume the store and return the next one, leaving every record except the
/// targeted one untouched and preserving the collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Creates a store holding the given events, in order.
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Creates a store holding the built-in seed events.
    pub fn seeded() -> Self {
        Self::new(seed_events())
    }

    /// Flips the favorite flag of the event with the given id.
    ///
    /// An unknown id leaves the store unchanged.
    pub fn toggle_favorite(self, id: EventId) -> Self {
        self.update(id, |e| e.is_favorite = !e.is_favorite)
    }

    /// Flips the notification flag of the event with the given id.
    ///
    /// An unknown id leaves the store unchanged.
    pub fn toggle_notification(self, id: EventId) -> Self {
        self.update(id, |e| e.notification = !e.notification)
    }

    /// Appends a new event built from the draft, returning the store and the allocated id.
    pub fn create_event(mut self, draft: EventDraft) -> (Self, EventId) {
        let id = self.next_id();
        tracing::debug!(%id, title = draft.title.as_str(), "creating event");
        self.events.push(draft.into_event(id));
        (self, id)
    }

    /// Looks up an event by id.
    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn update(mut self, id: EventId, f: impl FnOnce(&mut Event)) -> Self {
        match self.events.iter_mut().find(|e| e.id == id) {
            Some(event) => f(event),
            None => tracing::debug!(%id, "no event with this id, ignored"),
        }
        self
    }

    /// One past the largest id, or the smallest unused id once the largest is `u32::MAX`.
    fn next_id(&self) -> EventId {
        let max = self.events.iter().map(|e| e.id.0).max().unwrap_or(0);
        if let Some(id) = max.checked_add(1) {
            return EventId(id);
        }

        let used: HashSet<u32> = self.events.iter().map(|e| e.id.0).collect();
        let id = (1..=u32::MAX).find(|id| !used.contains(id)).unwrap_or(0);
        tracing::warn!(id, "largest event id reached, reusing the smallest free id");
        EventId(id)
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// The events every session starts with when the configuration provides none.
pub fn seed_events() -> Vec<Event> {
    #[allow(clippy::too_many_arguments)]
    fn event(
        id: u32,
        title: &str,
        time: &str,
        date: &str,
        description: &str,
        color: EventColor,
        is_favorite: bool,
        notification: bool,
    ) -> Event {
        Event {
            id: EventId(id),
            title: title.to_string(),
            time: time.to_string(),
            date: date.to_string(),
            description: description.to_string(),
            color,
            is_favorite,
            notification,
        }
    }

    use EventColor::*;
    #[rustfmt::skip]
    let events = vec![
        event(1, "Встреча с командой", "10:00", "2026-01-06", "Обсуждение новых проектов", Primary, true, true),
        event(2, "Презентация проекта", "14:30", "2026-01-06", "Демонстрация результатов", Secondary, false, true),
        event(3, "Обед с партнёрами", "12:00", "2026-01-06", "Деловой обед в центре", Accent, true, false),
        event(4, "Тренировка", "18:00", "2026-01-07", "Спортзал", Primary, false, true),
    ];
    events
}

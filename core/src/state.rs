// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::config::Config;
use crate::datetime::{DateStep, date_key, step_date};
use crate::event::{Event, EventDraft, EventId};
use crate::store::EventStore;
use crate::view::{Tab, ViewState};

/// Everything a presentation layer needs: the events, the view over them, and the day the
/// session regards as today.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgendaState {
    pub events: EventStore,
    pub view: ViewState,
    pub today: NaiveDate,
}

/// A single user interaction, applied by [`AgendaState::reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaAction {
    ToggleFavorite(EventId),
    ToggleNotification(EventId),
    SelectTab(Tab),
    StepDate(DateStep),
    SelectDate(NaiveDate),
    JumpToToday,
    UpdateSearchQuery(String),
    CreateEvent(EventDraft),
}

impl AgendaState {
    /// Creates a state on the schedule tab, with `today` selected.
    pub fn new(events: EventStore, today: NaiveDate) -> Self {
        Self {
            events,
            view: ViewState::new(today),
            today,
        }
    }

    /// Creates the initial state of a session from the configuration.
    ///
    /// `today` is used unless the configuration pins a date.
    pub fn from_config(config: &Config, today: NaiveDate) -> Self {
        let today = config.today.unwrap_or(today);
        let events = match &config.events {
            Some(events) => EventStore::new(events.clone()),
            None => EventStore::seeded(),
        };

        let mut state = Self::new(events, today);
        state.view.active_tab = config.default_tab;
        state
    }

    /// Applies an action, producing the next state.
    pub fn reduce(mut self, action: AgendaAction) -> Self {
        tracing::trace!(?action, "reducing");
        match action {
            AgendaAction::ToggleFavorite(id) => self.events = self.events.toggle_favorite(id),
            AgendaAction::ToggleNotification(id) => {
                self.events = self.events.toggle_notification(id)
            }
            AgendaAction::SelectTab(tab) => self.view.active_tab = tab,
            AgendaAction::StepDate(step) => {
                self.view.selected_date = step_date(self.view.selected_date, step)
            }
            AgendaAction::SelectDate(date) => self.view.selected_date = date,
            AgendaAction::JumpToToday => self.view.selected_date = self.today,
            AgendaAction::UpdateSearchQuery(query) => self.view.search_query = query,
            AgendaAction::CreateEvent(mut draft) => {
                if draft.date.is_empty() {
                    draft.date = date_key(self.view.selected_date);
                }
                (self.events, _) = self.events.create_event(draft);
            }
        }
        self
    }

    /// The events visible under the current view, in collection order.
    pub fn visible(&self) -> Vec<&Event> {
        self.view.filter(&self.events)
    }

    /// The message to show when [`AgendaState::visible`] is empty.
    pub fn empty_message(&self) -> &'static str {
        self.view.empty_message()
    }
}

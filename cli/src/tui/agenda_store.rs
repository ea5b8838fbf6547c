// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::{AgendaAction, AgendaState, Event, EventDraft, EventId, date_key};

use crate::tui::dispatcher::{Action, Dispatcher};

/// State of a TUI session: the core state plus what only the terminal needs.
#[derive(Debug, Default)]
pub struct AgendaStore {
    pub state: AgendaState,

    /// Position of the selected card in the visible list.
    pub selected: usize,

    /// The event being drafted, while the creation form is open.
    pub draft: Option<EventDraft>,
}

impl AgendaStore {
    pub fn new(state: AgendaState) -> Self {
        Self {
            state,
            selected: 0,
            draft: None,
        }
    }

    /// The events visible under the current view.
    pub fn visible(&self) -> Vec<&Event> {
        self.state.visible()
    }

    /// The id of the selected card, if the visible list is not empty.
    pub fn selected_id(&self) -> Option<EventId> {
        self.visible().get(self.selected).map(|e| e.id)
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::Agenda(action) => {
                    if matches!(
                        action,
                        AgendaAction::SelectTab(_)
                            | AgendaAction::StepDate(_)
                            | AgendaAction::SelectDate(_)
                            | AgendaAction::JumpToToday
                            | AgendaAction::UpdateSearchQuery(_)
                    ) {
                        that.selected = 0;
                    }
                    that.reduce(action.clone());
                }
                Action::Select(index) => that.selected = *index,
                Action::OpenCreator => {
                    that.draft = Some(EventDraft {
                        date: date_key(that.state.view.selected_date),
                        ..Default::default()
                    })
                }
                Action::CloseCreator => that.draft = None,
                Action::UpdateDraftTitle(v) => that.update_draft(|d| d.title = v.clone()),
                Action::UpdateDraftTime(v) => that.update_draft(|d| d.time = v.clone()),
                Action::UpdateDraftDate(v) => that.update_draft(|d| d.date = v.clone()),
                Action::UpdateDraftDescription(v) => {
                    that.update_draft(|d| d.description = v.clone())
                }
                Action::UpdateDraftColor(v) => that.update_draft(|d| d.color = *v),
                Action::SubmitChanges => {
                    if let Some(draft) = that.draft.take() {
                        that.reduce(AgendaAction::CreateEvent(draft));
                    }
                }
            }
            that.clamp_selection();
        }));
        dispatcher.register(callback);
    }

    fn reduce(&mut self, action: AgendaAction) {
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    fn update_draft(&mut self, f: impl FnOnce(&mut EventDraft)) {
        match &mut self.draft {
            Some(draft) => f(draft),
            None => tracing::debug!("no event is being drafted, ignored"),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

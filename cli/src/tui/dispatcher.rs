// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use agenda_core::{AgendaAction, EventColor};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

/// Broadcasts actions to every registered store.
pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    /// An interaction handled by the core reducer.
    Agenda(AgendaAction),

    /// Moves the card selection to the given position of the visible list.
    Select(usize),

    OpenCreator,
    CloseCreator,
    UpdateDraftTitle(String),
    UpdateDraftTime(String),
    UpdateDraftDate(String),
    UpdateDraftDescription(String),
    UpdateDraftColor(EventColor),
    SubmitChanges,
}

impl From<AgendaAction> for Action {
    fn from(action: AgendaAction) -> Self {
        Action::Agenda(action)
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of Agenda: the event model, the in-memory event store, and the pure derivation of
//! the visible events from the view state.

mod config;
mod datetime;
mod event;
mod state;
mod store;
mod view;

pub use crate::config::{APP_NAME, Config};
pub use crate::datetime::{DateStep, date_key, parse_date_key, step_date};
pub use crate::event::{Event, EventColor, EventDraft, EventId};
pub use crate::state::{AgendaAction, AgendaState};
pub use crate::store::{EventStore, seed_events};
pub use crate::view::{Tab, ViewState};

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc};

use agenda_core::AgendaState;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::home::Home;

/// Runs an interactive session over the state, returning the state it ends with.
pub fn run_tui(state: AgendaState) -> Result<AgendaState, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(AgendaStore::new(state)));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        AgendaStore::register_to(store.clone(), &mut dispatcher);
        let mut home = Home::new();
        home.activate(&mut dispatcher, &store);

        loop {
            if let Err(e) = draw(&home, &store, &mut terminal) {
                break Err(e);
            }

            match read_event(&mut home, &mut dispatcher, &store, &terminal) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {} // next frame
            }
        }
    }; // release dispatcher and home here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    tracing::debug!(events = owned_store.state.events.len(), "session finished");
    Ok(owned_store.state)
}

fn draw(
    home: &Home,
    store: &RefCell<AgendaStore>,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|frame| {
        let area = frame.area();
        home.render(store, area, frame.buffer_mut());
        if let Some(pos) = home.get_cursor_position(store, area) {
            frame.set_cursor_position(pos);
        }
    })?;
    Ok(())
}

fn read_event(
    home: &mut Home,
    dispatcher: &mut Dispatcher,
    store: &RefCell<AgendaStore>,
    terminal: &DefaultTerminal,
) -> Result<Option<Message>, Box<dyn Error>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            let size = terminal.size()?;
            let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
            Ok(home.on_key(dispatcher, store, area, key))
        }
        _ => Ok(None),
    }
}

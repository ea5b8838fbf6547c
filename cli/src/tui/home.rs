// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{AgendaAction, EventId, Tab};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_page::SinglePage;
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_creator::EventCreator;
use crate::tui::event_list::EventList;
use crate::tui::header::Header;
use crate::tui::tab_bar::TabBar;

/// The single page of the application, with the creation form drawn over it when open.
pub struct Home {
    page: SinglePage<AgendaStore, HomeBody>,
    creator: Option<EventCreator>,
}

impl Home {
    pub fn new() -> Self {
        let page = SinglePage::new("Agenda", HomeBody::new()).with_instructions(vec![
            ("Favorite", "<f>"),
            ("Notify", "<n>"),
            ("New", "<a>"),
            ("Today", "<t>"),
            ("Quit", "<Esc>"),
        ]);
        Self {
            page,
            creator: None,
        }
    }

    fn open_creator(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        tracing::debug!("opening event creator");
        dispatcher.dispatch(Action::OpenCreator);
        let mut creator = EventCreator::new();
        creator.activate(dispatcher, store);
        self.creator = Some(creator);
    }

    fn close_creator(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        if let Some(mut creator) = self.creator.take() {
            creator.deactivate(dispatcher, store);
        }
        dispatcher.dispatch(Action::CloseCreator);
    }

    fn toggle(
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        action: fn(EventId) -> AgendaAction,
    ) -> Option<Message> {
        let id = store.borrow().selected_id();
        match id {
            Some(id) => dispatcher.dispatch(action(id).into()),
            None => tracing::debug!("no event selected, toggle ignored"),
        }
        Some(Message::Handled)
    }
}

impl Component<AgendaStore> for Home {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        self.page.render(store, area, buf);
        if let Some(creator) = &self.creator {
            creator.render(store, area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        match &self.creator {
            Some(creator) => creator.get_cursor_position(store, area),
            None => self.page.get_cursor_position(store, area),
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if let Some(creator) = &mut self.creator {
            if let Some(Message::Exit) = creator.on_key(dispatcher, store, area, event) {
                self.close_creator(dispatcher, store);
            }
            return Some(Message::Handled);
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('f') if ctrl => {
                return Self::toggle(dispatcher, store, AgendaAction::ToggleFavorite);
            }
            KeyCode::Char('n') if ctrl => {
                return Self::toggle(dispatcher, store, AgendaAction::ToggleNotification);
            }
            KeyCode::Char('c') if ctrl => return Some(Message::Exit),
            _ => {}
        }

        if let Some(msg) = self.page.on_key(dispatcher, store, area, event) {
            self.page.inner_mut().header.sync(dispatcher, store);
            return Some(msg);
        }

        let searching = store.borrow().state.view.active_tab == Tab::Search;
        match event.code {
            KeyCode::Char(_) if searching => None,
            KeyCode::Char('q') => Some(Message::Exit),
            KeyCode::Char('f') => Self::toggle(dispatcher, store, AgendaAction::ToggleFavorite),
            KeyCode::Char('n') => Self::toggle(dispatcher, store, AgendaAction::ToggleNotification),
            KeyCode::Char('t') => {
                dispatcher.dispatch(AgendaAction::JumpToToday.into());
                Some(Message::Handled)
            }
            KeyCode::Char('a') => {
                self.open_creator(dispatcher, store);
                Some(Message::Handled)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.page.inner_mut().header.sync(dispatcher, store);
    }
}

/// Header, cards and tab bar, stacked.
struct HomeBody {
    header: Header,
    list: EventList,
    tab_bar: TabBar,
}

impl HomeBody {
    fn new() -> Self {
        Self {
            header: Header::new(),
            list: EventList,
            tab_bar: TabBar,
        }
    }

    fn layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(TabBar::HEIGHT),
        ])
        .areas(area)
    }
}

impl Component<AgendaStore> for HomeBody {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let [header, list, tab_bar] = Self::layout(area);
        self.header.render(store, header, buf);
        self.list.render(store, list, buf);
        self.tab_bar.render(store, tab_bar, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        let [header, _, _] = Self::layout(area);
        self.header.get_cursor_position(store, header)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let [header, list, tab_bar] = Self::layout(area);
        self.tab_bar
            .on_key(dispatcher, store, tab_bar, event)
            .or_else(|| self.list.on_key(dispatcher, store, list, event))
            .or_else(|| self.header.on_key(dispatcher, store, header, event))
    }
}

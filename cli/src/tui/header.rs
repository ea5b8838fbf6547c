// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{AgendaAction, DateStep, Tab};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::icon::Icon;
use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, FormItem, Input};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::format_date;

/// Top of the home page: the date stepper on the schedule tab, the search box on the search
/// tab, and the tab title otherwise.
pub struct Header {
    search: Input<AgendaStore, SearchQueryAccess>,
}

impl Header {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self {
            search: Input::new("Search"),
        }
    }

    fn block(tab: Tab) -> Block<'static> {
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .padding(Padding::horizontal(1));
        match tab {
            Tab::Search => block.title(format!(" {} Search ", Icon::Search)),
            _ => block,
        }
    }

    fn render_date_stepper(store: &AgendaStore, area: Rect, buf: &mut Buffer) {
        let date = store.state.view.selected_date;
        let mut spans = vec![
            Icon::ChevronLeft.glyph().blue().bold(),
            format!("  {} {}  ", Icon::Calendar, format_date(date)).bold(),
            Icon::ChevronRight.glyph().blue().bold(),
        ];
        if date == store.state.today {
            spans.push(" today".dim());
        }
        Paragraph::new(Line::from(spans).centered()).render(area, buf);
    }

    /// Keeps the search box focused exactly while the search tab is active.
    pub fn sync(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        let searching = store.borrow().state.view.active_tab == Tab::Search;
        match (searching, self.search.is_active()) {
            (true, false) => self.search.activate(dispatcher, store),
            (false, true) => self.search.deactivate(dispatcher, store),
            _ => {}
        }
    }
}

impl Component<AgendaStore> for Header {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let tab = store.borrow().state.view.active_tab;
        let block = Self::block(tab);
        let inner = block.inner(area);
        block.render(area, buf);

        match tab {
            Tab::Schedule => Self::render_date_stepper(&store.borrow(), inner, buf),
            Tab::Search => self.search.render(store, inner, buf),
            tab => Paragraph::new(format!("{} {}", Icon::of_tab(tab), tab.label()))
                .bold()
                .centered()
                .render(inner, buf),
        }
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::block(Tab::Search).inner(area);
        self.search
            .cursor_offset(store)
            .map(|dx| (inner.x + dx, inner.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let tab = store.borrow().state.view.active_tab;
        match tab {
            Tab::Search => self.search.on_key(dispatcher, store, area, event),
            Tab::Schedule if event.modifiers == KeyModifiers::NONE => {
                let action = match event.code {
                    KeyCode::Left => AgendaAction::StepDate(DateStep::Backward),
                    KeyCode::Right => AgendaAction::StepDate(DateStep::Forward),
                    KeyCode::Char('t') => AgendaAction::JumpToToday,
                    _ => return None,
                };
                dispatcher.dispatch(action.into());
                Some(Message::Handled)
            }
            _ => None,
        }
    }
}

struct SearchQueryAccess;

impl Access<AgendaStore, String> for SearchQueryAccess {
    fn get(store: &RefCell<AgendaStore>) -> String {
        store.borrow().state.view.search_query.clone()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(AgendaAction::UpdateSearchQuery(value).into());
        true
    }
}

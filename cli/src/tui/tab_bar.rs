// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{AgendaAction, Tab};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::Tabs;

use crate::icon::Icon;
use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// The bottom bar switching between tabs.
pub struct TabBar;

impl TabBar {
    pub const HEIGHT: u16 = 1;
}

impl Component<AgendaStore> for TabBar {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let active = store.borrow().state.view.active_tab;
        let titles = Tab::ALL
            .iter()
            .map(|tab| format!("{} {}", Icon::of_tab(*tab), tab.label()));
        Tabs::new(titles)
            .select(active.index())
            .highlight_style(Style::new().blue().bold().reversed())
            .divider("│")
            .render(area, buf);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let active = store.borrow().state.view.active_tab;
        let tab = match event.code {
            KeyCode::Tab => active.next(),
            KeyCode::BackTab => active.prev(),
            KeyCode::F(n @ 1..=4) => Tab::ALL[usize::from(n - 1)],
            _ => return None,
        };
        if tab != active {
            dispatcher.dispatch(AgendaAction::SelectTab(tab).into());
        }
        Some(Message::Handled)
    }
}

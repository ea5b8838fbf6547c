// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::{Event, EventColor};
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};

use crate::icon::{Icon, color_name};
use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};

/// The visible events as cards, or the empty message of the tab.
pub struct EventList;

impl EventList {
    fn card(event: &Event) -> ListItem<'_> {
        let color = card_color(event.color);
        let star = match event.is_favorite {
            true => Icon::Star.glyph().yellow(),
            false => Span::raw(" "),
        };
        let bell = match event.notification {
            true => Icon::Bell.glyph().green(),
            false => Icon::BellOff.glyph().dark_gray(),
        };

        let head = Line::from(vec![
            "▌".fg(color),
            format!("{} ", event.time).bold(),
            event.title.as_str().bold().fg(color),
            "  ".into(),
            star,
            " ".into(),
            bell,
        ]);
        let detail = Line::from(vec![
            "▌".fg(color),
            format!("{} ", event.date).dark_gray(),
            event.description.as_str().italic(),
        ]);
        ListItem::new(vec![head, detail, Line::default()])
    }
}

impl Component<AgendaStore> for EventList {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let events = store.visible();
        if events.is_empty() {
            let [area] = Layout::vertical([Constraint::Length(1)])
                .flex(Flex::Center)
                .areas(area);
            Paragraph::new(store.state.empty_message())
                .italic()
                .dark_gray()
                .centered()
                .render(area, buf);
            return;
        }

        let list = List::new(events.into_iter().map(Self::card))
            .highlight_symbol("› ")
            .highlight_style(Modifier::REVERSED);
        let mut state = ListState::default().with_selected(Some(store.selected));
        StatefulWidget::render(list, area, buf, &mut state);
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (selected, len) = {
            let store = store.borrow();
            (store.selected, store.visible().len())
        };
        let index = match event.code {
            KeyCode::Up => selected.saturating_sub(1),
            KeyCode::Down => (selected + 1).min(len.saturating_sub(1)),
            KeyCode::Home => 0,
            KeyCode::End => len.saturating_sub(1),
            _ => return None,
        };
        if index != selected {
            dispatcher.dispatch(Action::Select(index));
        }
        Some(Message::Handled)
    }
}

fn card_color(color: EventColor) -> Color {
    color_name(color).parse().unwrap_or_default()
}

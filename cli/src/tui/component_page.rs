// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Clear};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// A bordered page with a centered title and a line of key hints at the bottom.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    instructions: Vec<(&'static str, &'static str)>,
    inner: C,
    _phantom: std::marker::PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, inner: C) -> Self {
        Self {
            title: title.to_string(),
            instructions: vec![("Exit", "<Esc>")],
            inner,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Replaces the key hints, given as (description, key) pairs.
    pub fn with_instructions(mut self, instructions: Vec<(&'static str, &'static str)>) -> Self {
        self.instructions = instructions;
        self
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    fn block(&self) -> Block<'_> {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn instructions(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.instructions.len() * 2);
        for &(desc, key) in &self.instructions {
            spans.push(format!(" {desc} ").into());
            spans.push(key.blue().bold());
        }
        spans.push(" ".into());
        Line::from(spans)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let title = Line::from(format!(" {} ", self.title).bold());
        let block = self
            .block()
            .title(title.centered())
            .title_bottom(self.instructions().centered())
            .white();

        let inner_area = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        self.inner.render(store, inner_area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner_area = self.block().inner(area);
        self.inner.get_cursor_position(store, inner_area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let inner_area = self.block().inner(area);
        if let Some(msg) = self.inner.on_key(dispatcher, store, inner_area, event) {
            return Some(msg);
        }

        match event.code {
            KeyCode::Esc => Some(Message::Exit),
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}

/// A centered rectangle of at most the given size, for pages drawn over other pages.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{
    byte_offset_of_grapheme, byte_range_of_grapheme_at, grapheme_count, unicode_width_of_graphemes,
};

/// A vertical list of fields, one of them focused. `Enter` submits the form.
pub struct Form<S> {
    items: Vec<Box<dyn FormItem<S>>>,
    item_index: usize,
}

impl<S> Form<S> {
    pub fn new(items: Vec<Box<dyn FormItem<S>>>) -> Self {
        Self {
            items,
            item_index: 0,
        }
    }

    fn layout(&self) -> Layout {
        Layout::vertical(self.items.iter().map(|_| Constraint::Max(3))).margin(1)
    }

    fn navigate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>, index: usize) {
        if let Some(a) = self.items.get_mut(self.item_index) {
            a.deactivate(dispatcher, store);
        }

        self.item_index = index;

        if let Some(a) = self.items.get_mut(self.item_index) {
            a.activate(dispatcher, store);
        }
    }
}

impl<S> Component<S> for Form<S> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let areas = self.layout().split(area);
        let last = self.items.len().saturating_sub(1);
        // draw bottom-up so the titles are not overwritten by the item below
        for (i, (item, area)) in self.items.iter().zip(areas.iter()).enumerate().rev() {
            render_item_frame(i == last, item.as_ref(), *area, buf);
            item.render(store, item_inner(*area), buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let areas = self.layout().split(area);
        let item = self.items.get(self.item_index)?;
        let area = areas.get(self.item_index)?;
        item.get_cursor_position(store, *area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let areas = self.layout().split(area);
        if let Some(item) = self.items.get_mut(self.item_index)
            && let Some(area) = areas.get(self.item_index)
            && let Some(msg) = item.on_key(dispatcher, store, *area, event)
        {
            return Some(msg);
        }

        let len = self.items.len();
        match event.code {
            KeyCode::Up | KeyCode::BackTab if len > 0 => {
                self.navigate(dispatcher, store, (self.item_index + len - 1) % len);
                Some(Message::CursorUpdated)
            }
            KeyCode::Down | KeyCode::Tab if len > 0 => {
                self.navigate(dispatcher, store, (self.item_index + 1) % len);
                Some(Message::CursorUpdated)
            }
            KeyCode::Enter => {
                dispatcher.dispatch(Action::SubmitChanges);
                Some(Message::Exit)
            }
            _ => None,
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.activate(dispatcher, store);
        }
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        if let Some(item) = self.items.get_mut(self.item_index) {
            item.deactivate(dispatcher, store);
        }
    }
}

pub trait FormItem<S>: Component<S> {
    fn item_title(&self) -> &str;
    fn is_active(&self) -> bool;
}

/// Reads a value from the store, and writes it back through the dispatcher.
pub trait Access<S, T: ToOwned> {
    fn get(store: &RefCell<S>) -> T;
    fn set(dispatcher: &mut Dispatcher, value: T) -> bool;
}

/// A single line text input.
#[derive(Debug)]
pub struct Input<S, A: Access<S, String>> {
    title: String,
    active: bool,
    character_index: usize,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, A: Access<S, String>> Input<S, A> {
    pub fn new(title: impl ToString) -> Self {
        Self {
            title: title.to_string(),
            active: false,
            character_index: 0,
            _phantom_a: std::marker::PhantomData,
            _phantom_s: std::marker::PhantomData,
        }
    }

    /// Cursor position relative to the top-left corner of the text.
    pub fn cursor_offset(&self, store: &RefCell<S>) -> Option<u16> {
        if !self.active {
            return None;
        }
        let v = A::get(store);
        Some(unicode_width_of_graphemes(v.as_str(), self.character_index) as u16)
    }
}

impl<S, A: Access<S, String>> Component<S> for Input<S, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let v = A::get(store);
        Paragraph::new(v.as_str()).render(area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        let inner = item_inner(area);
        self.cursor_offset(store).map(|dx| (inner.x + dx, inner.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        use KeyCode::*;
        if !self.active || !matches!(event.code, Left | Right | Backspace | Char(_)) {
            return None;
        }
        if event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None; // leave shortcuts to the enclosing components
        }

        match event.code {
            Left if self.character_index > 0 => self.character_index -= 1,
            Right if self.character_index < grapheme_count(&A::get(store)) => {
                self.character_index += 1
            }
            Backspace if self.character_index > 0 => {
                let mut v = A::get(store);
                if let Some(range) = byte_range_of_grapheme_at(&v, self.character_index - 1) {
                    v.replace_range(range, "");
                    if A::set(dispatcher, v) {
                        self.character_index -= 1;
                    }
                }
            }
            Char(c) => {
                let mut v = A::get(store);
                let byte_index = byte_offset_of_grapheme(&v, self.character_index);
                v.insert(byte_index, c);
                // a combining mark merges into the grapheme before the cursor
                let cursor = grapheme_count(&v[..byte_index + c.len_utf8()]);
                if A::set(dispatcher, v) {
                    self.character_index = cursor;
                }
            }
            _ => {}
        };

        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.active = true;
        self.character_index = grapheme_count(&A::get(store));
    }

    fn deactivate(&mut self, _dispatcher: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
        self.character_index = 0;
    }
}

impl<S, A: Access<S, String>> FormItem<S> for Input<S, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// A choice among a fixed set of values, changed with `Left` and `Right`.
#[derive(Debug)]
pub struct RadioGroup<S, T: Eq + Clone, A: Access<S, T>> {
    title: String,
    values: Vec<T>,
    options: Vec<String>,
    active: bool,
    _phantom_s: std::marker::PhantomData<S>,
    _phantom_a: std::marker::PhantomData<A>,
}

impl<S, T: Eq + Clone, A: Access<S, T>> RadioGroup<S, T, A> {
    pub fn new(title: impl ToString, values: Vec<T>, options: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            values,
            options,
            active: false,
            _phantom_s: std::marker::PhantomData,
            _phantom_a: std::marker::PhantomData,
        }
    }

    fn selected(&self, store: &RefCell<S>) -> usize {
        let v = A::get(store);
        self.values.iter().position(|s| s == &v).unwrap_or(0)
    }

    fn split(&self, area: Rect) -> Rc<[Rect]> {
        // marker "[x]" and a space around each label
        let constraints = self
            .options
            .iter()
            .map(|s| Constraint::Length(5 + s.width() as u16));
        Layout::horizontal(constraints).split(area)
    }
}

impl<S, T: Eq + Clone, A: Access<S, T>> Component<S> for RadioGroup<S, T, A> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let selected = self.selected(store);
        let areas = self.split(area);
        for (i, (label, area)) in self.options.iter().zip(areas.iter()).enumerate() {
            let marker = if selected == i { 'x' } else { ' ' };
            Paragraph::new(format!("[{marker}] {label}")).render(*area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        if !self.active {
            return None;
        }
        self.split(item_inner(area))
            .get(self.selected(store))
            .map(|area| (area.x + 1, area.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.active || self.values.is_empty() {
            return None;
        }

        let len = self.values.len();
        let index = match event.code {
            KeyCode::Left => (self.selected(store) + len - 1) % len,
            KeyCode::Right => (self.selected(store) + 1) % len,
            _ => return None,
        };
        A::set(dispatcher, self.values[index].clone());
        Some(Message::CursorUpdated)
    }

    fn activate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = true;
    }

    fn deactivate(&mut self, _: &mut Dispatcher, _store: &RefCell<S>) {
        self.active = false;
    }
}

impl<S, T: Eq + Clone, A: Access<S, T>> FormItem<S> for RadioGroup<S, T, A> {
    fn item_title(&self) -> &str {
        &self.title
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

const S_STEP_ACTIVE: &str = "◆";
const S_STEP_INACTIVE: &str = "◇";
const S_SIDER_CONNECTOR: &str = "│";
const S_SIDER_BOTTOM: &str = "└";

fn render_item_frame<S>(is_last: bool, item: &dyn FormItem<S>, area: Rect, buf: &mut Buffer) {
    let (color, step) = match item.is_active() {
        true => (Color::Blue, S_STEP_ACTIVE),
        false => (Color::Gray, S_STEP_INACTIVE),
    };

    let area_title = Rect::new(area.x + 2, area.y, area.width.saturating_sub(2), 1);
    Clear.render(area_title, buf);
    Paragraph::new(item.item_title())
        .bold()
        .fg(color)
        .render(area_title, buf);

    let bottom = area.height.saturating_sub(1);
    for y in 0..area.height {
        let symbol = match y {
            0 => step,
            y if y == bottom && is_last => S_SIDER_BOTTOM,
            _ => S_SIDER_CONNECTOR,
        };
        if let Some(c) = buf.cell_mut((area.x, area.y + y)) {
            c.set_symbol(symbol);
            c.set_fg(color);
        }
    }
}

fn item_inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use agenda_core::EventColor;
use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;

use crate::icon::Icon;
use crate::tui::agenda_store::AgendaStore;
use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, Input, RadioGroup};
use crate::tui::component_page::{SinglePage, popup_area};
use crate::tui::dispatcher::{Action, Dispatcher};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 19;

/// The form drafting a new event, drawn over the home page.
pub struct EventCreator(SinglePage<AgendaStore, Form<AgendaStore>>);

impl EventCreator {
    pub fn new() -> Self {
        let form = Form::new(vec![
            Box::new(new_title()),
            Box::new(new_time()),
            Box::new(new_date()),
            Box::new(new_color()),
            Box::new(new_description()),
        ]);
        let title = format!("{} New Event", Icon::Plus);
        let page = SinglePage::new(title, form).with_instructions(vec![
            ("Next", "<Tab>"),
            ("Create", "<Enter>"),
            ("Cancel", "<Esc>"),
        ]);
        Self(page)
    }

    fn area(area: Rect) -> Rect {
        popup_area(area, WIDTH, HEIGHT)
    }
}

impl Component<AgendaStore> for EventCreator {
    fn render(&self, store: &RefCell<AgendaStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, Self::area(area), buf);
    }

    fn get_cursor_position(&self, store: &RefCell<AgendaStore>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, Self::area(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<AgendaStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.0.on_key(dispatcher, store, Self::area(area), event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<AgendaStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<AgendaStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<AgendaStore, String> for $acc {
            fn get(store: &RefCell<AgendaStore>) -> String {
                store
                    .borrow()
                    .draft
                    .as_ref()
                    .map(|d| d.$field.clone())
                    .unwrap_or_default()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

new_input!(new_title, "Title", TitleAccess, title, UpdateDraftTitle);
new_input!(new_time, "Time (HH:MM)", TimeAccess, time, UpdateDraftTime);
new_input!(new_date, "Date (YYYY-MM-DD)", DateAccess, date, UpdateDraftDate);
new_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateDraftDescription
);

fn new_color() -> RadioGroup<AgendaStore, EventColor, ColorAccess> {
    let values = EventColor::ALL.to_vec();
    let options = values.iter().map(ToString::to_string).collect();
    RadioGroup::new("Color", values, options)
}

struct ColorAccess;

impl Access<AgendaStore, EventColor> for ColorAccess {
    fn get(store: &RefCell<AgendaStore>) -> EventColor {
        store
            .borrow()
            .draft
            .as_ref()
            .map(|d| d.color)
            .unwrap_or_default()
    }

    fn set(dispatcher: &mut Dispatcher, value: EventColor) -> bool {
        dispatcher.dispatch(Action::UpdateDraftColor(value));
        true
    }
}

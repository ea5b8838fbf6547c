// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use agenda_core::Event;
use colored::Color;

use crate::icon::{Icon, color_of};
use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [&'a Event]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [&'a Event],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => write!(f, "{}", Table::new(&self.formatter.columns, self.events)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Time,
    Date,
    Flags,
    Title,
}

impl EventColumn {
    pub fn defaults() -> Vec<EventColumn> {
        vec![Self::Id, Self::Time, Self::Date, Self::Flags, Self::Title]
    }
}

impl TableColumn<&Event> for EventColumn {
    fn format<'a>(&self, event: &'a &Event) -> Cow<'a, str> {
        match self {
            EventColumn::Id => format!("#{}", event.id).into(),
            EventColumn::Time => event.time.as_str().into(),
            EventColumn::Date => event.date.as_str().into(),
            EventColumn::Flags => {
                let star = if event.is_favorite { Icon::Star.glyph() } else { " " };
                format!("{star}{}", Icon::of_notification(event.notification)).into()
            }
            EventColumn::Title => event.title.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, event: &&Event) -> Option<Color> {
        match self {
            EventColumn::Title => Some(color_of(event.color)),
            _ => None,
        }
    }
}

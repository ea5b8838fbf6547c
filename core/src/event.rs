// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Unique identifier of an event within a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A single scheduled item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// The identifier, used as the only lookup key for mutation.
    pub id: EventId,

    /// The display name of the event.
    pub title: String,

    /// Time of day in 24-hour `HH:MM` form, not validated.
    pub time: String,

    /// Calendar date in `YYYY-MM-DD` form, matched by exact string equality.
    pub date: String,

    /// Free text.
    #[serde(default)]
    pub description: String,

    /// The color category, used for display grouping only.
    #[serde(default)]
    pub color: EventColor,

    /// Whether the user marked the event as favorite.
    #[serde(default)]
    pub is_favorite: bool,

    /// Whether push notification is enabled for the event.
    #[serde(default)]
    pub notification: bool,
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    /// The title of the event, `"New event"` is used when empty.
    pub title: String,

    /// The time of the event.
    pub time: String,

    /// The date of the event, the selected date is used when empty.
    pub date: String,

    /// The description of the event.
    pub description: String,

    /// The color category of the event.
    pub color: EventColor,
}

impl EventDraft {
    pub(crate) const DEFAULT_TITLE: &str = "New event";

    pub(crate) fn into_event(self, id: EventId) -> Event {
        Event {
            id,
            title: match self.title.is_empty() {
                true => Self::DEFAULT_TITLE.to_string(),
                false => self.title,
            },
            time: self.time,
            date: self.date,
            description: self.description,
            color: self.color,
            is_favorite: false,
            notification: false,
        }
    }
}

/// The color category of an event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum EventColor {
    /// The main accent of the schedule.
    #[default]
    Primary,

    /// The secondary accent.
    Secondary,

    /// The highlight accent.
    Accent,
}

const COLOR_PRIMARY: &str = "primary";
const COLOR_SECONDARY: &str = "secondary";
const COLOR_ACCENT: &str = "accent";

impl EventColor {
    /// All color categories, in display order.
    pub const ALL: [EventColor; 3] = [
        EventColor::Primary,
        EventColor::Secondary,
        EventColor::Accent,
    ];
}

impl AsRef<str> for EventColor {
    fn as_ref(&self) -> &str {
        match self {
            EventColor::Primary => COLOR_PRIMARY,
            EventColor::Secondary => COLOR_SECONDARY,
            EventColor::Accent => COLOR_ACCENT,
        }
    }
}

impl Display for EventColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for EventColor {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            COLOR_PRIMARY => Ok(EventColor::Primary),
            COLOR_SECONDARY => Ok(EventColor::Secondary),
            COLOR_ACCENT => Ok(EventColor::Accent),
            _ => Err(()),
        }
    }
}

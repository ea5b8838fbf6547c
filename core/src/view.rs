// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::datetime::date_key;
use crate::event::Event;

/// One of the mutually exclusive view modes, each selecting a filter predicate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Tab {
    /// Events on the selected date.
    #[default]
    Schedule,

    /// Events with notification enabled.
    Notifications,

    /// Events whose title matches the search query.
    Search,

    /// Events marked as favorite.
    Favorites,
}

const TAB_SCHEDULE: &str = "schedule";
const TAB_NOTIFICATIONS: &str = "notifications";
const TAB_SEARCH: &str = "search";
const TAB_FAVORITES: &str = "favorites";

impl Tab {
    /// All tabs, in the order they appear in the tab bar.
    pub const ALL: [Tab; 4] = [Tab::Schedule, Tab::Notifications, Tab::Search, Tab::Favorites];

    /// Human readable label of the tab.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Schedule => "Schedule",
            Tab::Notifications => "Notifications",
            Tab::Search => "Search",
            Tab::Favorites => "Favorites",
        }
    }

    /// The message shown when nothing matches the tab's predicate.
    pub fn empty_message(self) -> &'static str {
        match self {
            Tab::Favorites => "no favorite events",
            Tab::Notifications => "no events with notifications",
            Tab::Search => "no events found",
            Tab::Schedule => "no events on this date",
        }
    }

    /// The tab after this one in the tab bar, wrapping around.
    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab before this one in the tab bar, wrapping around.
    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position of the tab in [`Tab::ALL`].
    pub fn index(self) -> usize {
        match self {
            Tab::Schedule => 0,
            Tab::Notifications => 1,
            Tab::Search => 2,
            Tab::Favorites => 3,
        }
    }
}

impl AsRef<str> for Tab {
    fn as_ref(&self) -> &str {
        match self {
            Tab::Schedule => TAB_SCHEDULE,
            Tab::Notifications => TAB_NOTIFICATIONS,
            Tab::Search => TAB_SEARCH,
            Tab::Favorites => TAB_FAVORITES,
        }
    }
}

impl Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Tab {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            TAB_SCHEDULE => Ok(Tab::Schedule),
            TAB_NOTIFICATIONS => Ok(Tab::Notifications),
            TAB_SEARCH => Ok(Tab::Search),
            TAB_FAVORITES => Ok(Tab::Favorites),
            _ => Err(()),
        }
    }
}

/// Transient UI state that selects which events are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// The active tab.
    pub active_tab: Tab,

    /// The date shown on the schedule tab.
    pub selected_date: NaiveDate,

    /// The query of the search tab, matched case-insensitively against titles.
    pub search_query: String,
}

impl ViewState {
    /// Creates a view on the schedule tab, at the given date.
    pub fn new(selected_date: NaiveDate) -> Self {
        Self {
            active_tab: Tab::default(),
            selected_date,
            search_query: String::new(),
        }
    }

    /// Returns the events passing the active tab's predicate, in their original order.
    pub fn filter<'a, I>(&self, events: I) -> Vec<&'a Event>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let query = self.search_query.to_lowercase();
        let key = date_key(self.selected_date);
        events
            .into_iter()
            .filter(|e| match self.active_tab {
                Tab::Favorites => e.is_favorite,
                Tab::Notifications => e.notification,
                Tab::Search => e.title.to_lowercase().contains(&query),
                Tab::Schedule => e.date == key,
            })
            .collect()
    }

    /// The message to show when [`ViewState::filter`] yields nothing.
    pub fn empty_message(&self) -> &'static str {
        self.active_tab.empty_message()
    }
}

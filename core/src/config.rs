// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;
use std::error::Error;

use chrono::NaiveDate;

use crate::event::Event;
use crate::view::Tab;

/// The name of the Agenda application.
pub const APP_NAME: &str = "agenda";

/// Configuration for the Agenda application.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Date treated as today, instead of the local calendar date.
    #[serde(default)]
    pub today: Option<NaiveDate>,

    /// The tab shown when a session starts.
    #[serde(default)]
    pub default_tab: Tab,

    /// Events to seed the session with, replacing the built-in ones.
    #[serde(default)]
    pub events: Option<Vec<Event>>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(events) = &self.events {
            let mut seen = HashSet::with_capacity(events.len());
            for event in events {
                if !seen.insert(event.id) {
                    return Err(format!("Duplicate event id in configuration: {}", event.id).into());
                }
            }
        }
        Ok(())
    }
}

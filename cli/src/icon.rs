// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use agenda_core::{EventColor, Tab};

/// Glyphs used across the terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Calendar,
    Bell,
    BellOff,
    Search,
    Star,
    Plus,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    /// All glyphs are a single terminal cell wide.
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::Calendar => "▦",
            Icon::Bell => "◉",
            Icon::BellOff => "○",
            Icon::Search => "⌕",
            Icon::Star => "★",
            Icon::Plus => "+",
            Icon::ChevronLeft => "‹",
            Icon::ChevronRight => "›",
        }
    }

    /// The icon shown next to the label of a tab.
    pub const fn of_tab(tab: Tab) -> Icon {
        match tab {
            Tab::Schedule => Icon::Calendar,
            Tab::Notifications => Icon::Bell,
            Tab::Search => Icon::Search,
            Tab::Favorites => Icon::Star,
        }
    }

    /// The bell reflecting whether notification is enabled.
    pub const fn of_notification(enabled: bool) -> Icon {
        match enabled {
            true => Icon::Bell,
            false => Icon::BellOff,
        }
    }
}

impl Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Name of the terminal color of an event color category, shared by the table and the TUI.
pub const fn color_name(color: EventColor) -> &'static str {
    match color {
        EventColor::Primary => "blue",
        EventColor::Secondary => "magenta",
        EventColor::Accent => "yellow",
    }
}

/// Terminal color of an event color category.
pub fn color_of(color: EventColor) -> colored::Color {
    color_name(color).parse().unwrap_or(colored::Color::White)
}

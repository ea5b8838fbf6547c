// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::parse_date_key;
use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn arg() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn from(matches: &ArgMatches) -> Self {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Parses a `YYYY-MM-DD` date, for use as a clap value parser.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_date_key(s.trim()).map_err(ToString::to_string)
}

/// Formats a date for the date stepper, e.g. `Tue, Jan 6 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d %Y").to_string()
}

/// Number of grapheme clusters in `s`.
pub fn grapheme_count(s: &str) -> usize {
    s.graphemes(true).count()
}

/// Byte offset where the grapheme cluster at `g_idx` starts, or `s.len()` past the end.
pub fn byte_offset_of_grapheme(s: &str, g_idx: usize) -> usize {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map_or(s.len(), |(start, _)| start)
}

/// Display width of the first `n` grapheme clusters of `s`.
pub fn unicode_width_of_graphemes(s: &str, n: usize) -> usize {
    s[..byte_offset_of_grapheme(s, n)].width()
}

/// Return the byte range of the grapheme cluster at index `g_idx` in `s`.
/// If out of bounds, returns None.
pub fn byte_range_of_grapheme_at(s: &str, g_idx: usize) -> Option<std::ops::Range<usize>> {
    s.grapheme_indices(true)
        .nth(g_idx)
        .map(|(start, g)| start..start + g.len())
}

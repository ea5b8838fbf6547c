// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Direction of a single-day step of the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStep {
    /// One calendar day earlier.
    Backward,

    /// One calendar day later.
    Forward,
}

/// Returns the date exactly one calendar day before or after `date`.
///
/// Month and year boundaries are crossed as usual. At the limits of the representable
/// calendar the date is returned unchanged.
pub fn step_date(date: NaiveDate, step: DateStep) -> NaiveDate {
    let one = Days::new(1);
    let stepped = match step {
        DateStep::Backward => date.checked_sub_days(one),
        DateStep::Forward => date.checked_add_days(one),
    };
    stepped.unwrap_or_else(|| {
        tracing::warn!(%date, ?step, "date out of range, keeping current date");
        date
    })
}

/// The canonical `YYYY-MM-DD` key used to match events against a date.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` key back into a date.
pub fn parse_date_key(s: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(s, DATE_KEY_FORMAT).map_err(|_| "Invalid date. Expected YYYY-MM-DD")
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Date stepper integration tests.

use agenda_core::{DateStep, date_key, step_date};

use crate::common::ymd;

#[test]
fn forward_crosses_month_boundary() {
    assert_eq!(step_date(ymd(2026, 1, 31), DateStep::Forward), ymd(2026, 2, 1));
}

#[test]
fn backward_crosses_year_boundary() {
    assert_eq!(step_date(ymd(2026, 1, 1), DateStep::Backward), ymd(2025, 12, 31));
}

#[test]
fn forward_crosses_year_boundary() {
    assert_eq!(step_date(ymd(2025, 12, 31), DateStep::Forward), ymd(2026, 1, 1));
}

#[test]
fn forward_then_backward_is_identity() {
    let mut date = ymd(2024, 2, 27);
    for _ in 0..400 {
        let next = step_date(date, DateStep::Forward);
        assert_eq!(step_date(next, DateStep::Backward), date);
        date = next;
    }
}

#[test]
fn stepped_date_key_matches_event_format() {
    let next = step_date(ymd(2026, 1, 6), DateStep::Forward);
    assert_eq!(date_key(next), "2026-01-07");
}

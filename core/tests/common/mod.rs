// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_only_event_changed, assert_visible_ids};
#[allow(unused_imports)]
pub use fixtures::{seeded_state, test_event, test_event_draft, ymd};

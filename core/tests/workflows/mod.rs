// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the agenda-core crate.
//!
//! These tests validate multi-step sessions that drive the state through sequences of
//! actions, and sessions started from a configuration file.

mod config_driven;
mod schedule_browsing;

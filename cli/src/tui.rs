// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod agenda_store;
mod app;
mod component;
mod component_form;
mod component_page;
mod dispatcher;
mod event_creator;
mod event_list;
mod header;
mod home;
mod tab_bar;

pub use app::run_tui;

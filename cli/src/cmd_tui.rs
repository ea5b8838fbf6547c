// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The interactive page, the default when no subcommand is given.

use std::error::Error;

use agenda_core::AgendaState;
use clap::{ArgMatches, Command};

use crate::tui;

#[derive(Debug, Clone, Copy, Default)]
pub struct CmdTui;

impl CmdTui {
    pub const NAME: &str = "tui";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ui")
            .about("Browse the schedule interactively")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, state: AgendaState) -> Result<(), Box<dyn Error>> {
        tracing::info!(tab = %state.view.active_tab, "starting interactive session");
        let state = tokio::task::spawn_blocking(move || tui::run_tui(state).map_err(|e| e.to_string()))
            .await??;
        tracing::info!(events = state.events.len(), "interactive session ended");
        Ok(())
    }
}

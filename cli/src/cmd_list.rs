// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use agenda_core::{AgendaAction, AgendaState, Tab};
use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::event_formatter::{EventColumn, EventFormatter};
use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone)]
pub struct CmdList {
    pub tab: Option<Tab>,
    pub date: Option<NaiveDate>,
    pub query: Option<String>,
    pub output_format: OutputFormat,
}

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the events visible under a tab")
            .arg(arg!(-t --tab <TAB> "The tab to list").value_parser(value_parser!(Tab)))
            .arg(
                arg!(-d --date <DATE> "The date of the schedule tab, in YYYY-MM-DD format")
                    .value_parser(parse_date),
            )
            .arg(arg!(-q --query <QUERY> "The query of the search tab"))
            .arg(OutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            tab: matches.get_one("tab").copied(),
            date: matches.get_one("date").copied(),
            query: matches.get_one::<String>("query").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, state: AgendaState) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let state = self.apply(state);

        let events = state.visible();
        if events.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", state.empty_message().italic());
            return Ok(());
        }

        let formatter =
            EventFormatter::new(EventColumn::defaults()).with_output_format(self.output_format);
        print!("{}", formatter.format(&events));
        Ok(())
    }

    /// Applies the flags to the initial state of the session.
    ///
    /// A query without a tab implies the search tab.
    pub fn apply(&self, mut state: AgendaState) -> AgendaState {
        let tab = match (self.tab, &self.query) {
            (Some(tab), _) => Some(tab),
            (None, Some(_)) => Some(Tab::Search),
            (None, None) => None,
        };
        if let Some(tab) = tab {
            state = state.reduce(AgendaAction::SelectTab(tab));
        }
        if let Some(date) = self.date {
            state = state.reduce(AgendaAction::SelectDate(date));
        }
        if let Some(query) = &self.query {
            state = state.reduce(AgendaAction::UpdateSearchQuery(query.clone()));
        }
        state
    }
}

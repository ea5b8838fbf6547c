// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use agenda_core::{APP_NAME, AgendaState};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::CmdList;
use crate::cmd_tui::CmdTui;
use crate::config::parse_config;

/// Run the Agenda command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Logs go to stderr so they never mix with listings; `RUST_LOG` selects the level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("A schedule viewer with favorites, notifications and search.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to tui
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $AGENDA_CONFIG, then to \
$XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, %LOCALAPPDATA%/agenda/config.toml on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdTui::command())
            .subcommand(CmdList::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdTui::NAME, matches)) => Tui(CmdTui::from(matches)),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Tui(CmdTui),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Browse the schedule interactively
    Tui(CmdTui),

    /// Print the events visible under a view
    List(CmdList),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Tui(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            List(a) => Self::run_with(config, |x| async move { a.run(x) }.boxed()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: FnOnce(AgendaState) -> BoxFuture<'static, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration");
        let config = parse_config(config).await?;
        let today = chrono::Local::now().date_naive();
        let state = AgendaState::from_config(&config, today);
        tracing::debug!(
            events = state.events.len(),
            today = %state.today,
            tab = %state.view.active_tab,
            "session state ready"
        );

        f(state).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_generate_completion::Shell;
    use crate::util::OutputFormat;
    use agenda_core::Tab;

    #[test]
    fn test_parse_config() {
        let cli = Cli::try_parse_from(vec!["test", "-c", "/tmp/config.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config.toml")));
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_default_tui() {
        let cli = Cli::try_parse_from(vec!["test"]).unwrap();
        assert!(cli.config.is_none());
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_tui() {
        let cli = Cli::try_parse_from(vec!["test", "tui"]).unwrap();
        assert!(matches!(cli.command, Commands::Tui(_)));
    }

    #[test]
    fn test_parse_list() {
        let args = vec!["test", "list", "--tab", "favorites", "--output-format", "json"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::List(cmd) => {
                assert_eq!(cmd.tab, Some(Tab::Favorites));
                assert_eq!(cmd.output_format, OutputFormat::Json);
            }
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_ls() {
        let cli = Cli::try_parse_from(vec!["test", "ls", "-q", "обед"]).unwrap();
        match cli.command {
            Commands::List(cmd) => assert_eq!(cmd.query.as_deref(), Some("обед")),
            _ => panic!("Expected List command"),
        }
    }

    #[test]
    fn test_parse_config_after_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(vec!["test", "list", "-c", "a.toml"]).is_err());
    }

    #[test]
    fn test_parse_generate_completions() {
        let args = vec!["test", "generate-completion", "zsh"];
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::GenerateCompletion(cmd) => {
                assert_eq!(cmd.shell, Shell::Zsh);
            }
            _ => panic!("Expected GenerateCompletion command"),
        }
    }

    #[test]
    fn test_parse_unknown_subcommand() {
        assert!(Cli::try_parse_from(vec!["test", "dashboard"]).is_err());
    }
}

//! CLI entry point for taskflow.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

use taskflow_app::Session;
use taskflow_core::{Category, Priority};
use time::macros::date;

use config::keybindings::{KeyBindingsConfig, load_config, validate_keybindings_config};
use tui::Theme;

mod config;
mod tui;

/// Session-scoped task list with a terminal UI.
#[derive(Parser, Debug)]
#[command(
    name = "taskflow",
    version,
    about = "taskflow: create, complete, filter, and delete tasks in an in-memory session"
)]
struct Cli {
    /// Initial color theme (switchable at runtime with `t`).
    #[arg(long, value_enum, default_value_t = ThemeArg::Dark)]
    theme: ThemeArg,

    /// Pre-populate the session with a few example tasks.
    #[arg(long)]
    demo: bool,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch the interactive terminal UI (the default).
    Tui,

    /// Write the default configuration file.
    InitConfig {
        /// Destination path; defaults to the platform config directory.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file without asking.
        #[arg(long)]
        force: bool,
    },
}

/// Color theme selection on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ThemeArg {
    /// Dark background palette.
    Dark,
    /// Light background palette.
    Light,
}

impl ThemeArg {
    const fn into_theme(self) -> Theme {
        match self {
            Self::Dark => Theme::dark(),
            Self::Light => Theme::light(),
        }
    }
}

fn main() -> Result<()> {
    let Cli { theme, demo, cmd } = Cli::parse();
    install_tracing();

    match cmd.unwrap_or(Command::Tui) {
        Command::Tui => {
            let keybindings = match load_config(None)? {
                Some(config) => {
                    validate_keybindings_config(&config.tui.keybindings)?;
                    config.tui.keybindings
                }
                None => KeyBindingsConfig::default(),
            };
            let mut session = Session::new();
            if demo {
                seed_demo_tasks(&mut session);
            }
            tui::run(session, theme.into_theme(), &keybindings)
        }
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
    }
}

/// Populate a session with the example tasks the project ships for demos.
///
/// Added oldest-first so the newest-first list shows the landing-page task on
/// top.
fn seed_demo_tasks(session: &mut Session) {
    let seeds = [
        (
            "Review pull requests",
            Priority::High,
            Category::Work,
            date!(2025 - 06 - 05),
            true,
        ),
        (
            "Buy groceries",
            Priority::Medium,
            Category::Personal,
            date!(2025 - 06 - 06),
            false,
        ),
        (
            "Design new landing page",
            Priority::High,
            Category::Work,
            date!(2025 - 06 - 07),
            false,
        ),
    ];

    for (text, priority, category, due, completed) in seeds {
        if let Ok(id) = session.add_task(text, priority, category, Some(due))
            && completed
        {
            session.toggle_task(id);
        }
    }
}

fn install_tracing() {
    let filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
}

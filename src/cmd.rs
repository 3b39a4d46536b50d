//! Command implementations for the CLI interface.

use std::path::{Path, PathBuf};

use clap::{CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;
use crate::replay::{load_script, run_script};
use crate::screen::TaskScreen;
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive to-do screen (default).
    Ui,

    /// Apply a JSON script of screen events and print the resulting state.
    Replay {
        /// Path to the script, or "-" for stdin.
        script: PathBuf,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(screen: TaskScreen) {
    if let Err(e) = run_tui(screen) {
        tracing::error!(error = %e, "terminal failure");
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

fn replay(screen: TaskScreen, script: &Path) -> Result<String> {
    let actions = load_script(script)?;
    let snapshot = run_script(screen, &actions);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Replay a script headlessly and print the final state as JSON.
pub fn cmd_replay(screen: TaskScreen, script: &Path) {
    match replay(screen, script) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, script = %script.display(), "replay failed");
            eprintln!("Replay error: {e}");
            std::process::exit(1);
        }
    }
}

/// Print shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

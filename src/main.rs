//! # todo - an in-memory to-do list for the terminal
//!
//! A single screen: a heading, an add field with its Add button, and a
//! scrollable list of tasks that can be toggled done, renamed inline and
//! deleted. Nothing is saved; every launch starts with an empty list.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the screen
//! todo
//!
//! # Without inline editing, ids never reused
//! todo --variant basic --id-strategy monotonic
//!
//! # Drive the screen from a script and print the result
//! echo '[{"action":"add","title":"Buy milk"}]' | todo replay -
//! ```

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod list;
pub mod logging;
pub mod replay;
pub mod screen;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod row;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use screen::TaskScreen;

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Ui);

    let logging = match (&command, cli.log_file.as_ref()) {
        (_, Some(path)) => logging::init_file(path),
        (Commands::Replay { .. }, None) => logging::init_stderr(),
        _ => Ok(()),
    };
    if let Err(e) = logging {
        eprintln!("Failed to set up logging: {e}");
        std::process::exit(1);
    }

    let screen = TaskScreen::new(cli.variant, cli.id_strategy);

    match command {
        Commands::Ui => cmd_ui(screen),
        Commands::Replay { script } => cmd_replay(screen, &script),
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::fields::{IdStrategy, Variant};

/// In-memory to-do list for the terminal.
/// Tasks live only as long as the screen is open.
#[derive(Parser)]
#[command(name = "todo", version, about = "In-memory to-do list screen")]
pub struct Cli {
    /// Screen flavour: with inline editing or without.
    #[arg(long, value_enum, global = true, default_value_t = Variant::Editable)]
    pub variant: Variant,

    /// How new task ids are assigned.
    #[arg(long, value_enum, global = true, default_value_t = IdStrategy::Length)]
    pub id_strategy: IdStrategy,

    /// Write logs to this file. Filter with the TODO_LOG environment variable.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "todo", "--variant", "basic", "--id-strategy", "monotonic", "replay", "-",
        ])
        .unwrap();
        assert_eq!(cli.variant, Variant::Basic);
        assert_eq!(cli.id_strategy, IdStrategy::Monotonic);
        assert!(matches!(cli.command, Some(Commands::Replay { .. })));
    }

    #[test]
    fn test_defaults_to_editable_screen() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert_eq!(cli.variant, Variant::Editable);
        assert_eq!(cli.id_strategy, IdStrategy::Length);
        assert!(cli.command.is_none());
        assert!(Cli::try_parse_from(["todo", "--variant", "fancy"]).is_err());
    }
}

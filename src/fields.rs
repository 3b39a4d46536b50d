//! Enumerations shared by the CLI and the screen.
//!
//! These select how the screen behaves (with or without inline editing) and
//! how new task ids are assigned.

use clap::ValueEnum;

/// Which flavour of the screen to run.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum Variant {
    /// Rows carry an edit/save action for inline renaming.
    #[default]
    Editable,
    /// Toggle and delete only.
    Basic,
}

impl Variant {
    pub fn allows_editing(self) -> bool {
        self == Variant::Editable
    }
}

/// How a freshly added task gets its id.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum IdStrategy {
    /// `current length + 1`. Ids can repeat after a deletion.
    #[default]
    Length,
    /// `tasks ever added + 1`. Ids are never reused.
    Monotonic,
}

/// Human label for a task status.
pub fn format_status(done: bool) -> &'static str {
    if done {
        "Done"
    } else {
        "Due"
    }
}

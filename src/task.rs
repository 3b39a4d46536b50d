//! Task data structure.
//!
//! A `Task` is a single to-do entry. Tasks live only in memory for the
//! lifetime of the screen.

use serde::{Deserialize, Serialize};

/// One to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    /// `false` = due, `true` = done.
    pub status: bool,
}

impl Task {
    /// Create a new task in the due state.
    pub fn new(id: u64, title: &str) -> Self {
        Task {
            id,
            title: title.to_string(),
            status: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.status
    }
}

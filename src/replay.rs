//! Headless replay of screen events.
//!
//! A replay script is a JSON array of actions, each tagged by `"action"`:
//!
//! ```json
//! [
//!   {"action": "add", "title": "Buy milk"},
//!   {"action": "type", "text": "Walk dog"},
//!   {"action": "submit"},
//!   {"action": "toggle", "id": 1},
//!   {"action": "start_edit", "id": 2},
//!   {"action": "edit_text", "text": "Walk the dog"},
//!   {"action": "save_edit", "id": 2}
//! ]
//! ```
//!
//! Actions are applied in order to a fresh `TaskScreen` exactly as the
//! terminal front end would apply key presses.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::screen::{Snapshot, TaskScreen};

/// One user event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Replace the add field's text.
    Type { text: String },
    /// Press the add control.
    Submit,
    /// Shorthand for `type` followed by `submit`.
    Add { title: String },
    Toggle { id: u64 },
    Delete { id: u64 },
    /// Press a row's edit control. `title` defaults to the task's current title.
    StartEdit {
        id: u64,
        #[serde(default)]
        title: Option<String>,
    },
    /// Replace the edit field's text.
    EditText { text: String },
    SaveEdit { id: u64 },
}

/// Parse a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<Action>> {
    Ok(serde_json::from_str(text)?)
}

/// Read a script from a file, or from stdin when the path is `-`.
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let mut buf = String::new();
    if path == Path::new("-") {
        std::io::stdin().read_to_string(&mut buf)?;
    } else {
        buf = std::fs::read_to_string(path)?;
    }
    parse_script(&buf)
}

/// Apply a single action to the screen.
pub fn apply(screen: &mut TaskScreen, action: &Action) {
    debug!(?action, "replaying");
    match action {
        Action::Type { text } => screen.set_draft(text),
        Action::Submit => {
            screen.add();
        }
        Action::Add { title } => {
            screen.set_draft(title);
            screen.add();
        }
        Action::Toggle { id } => screen.toggle_status(*id),
        Action::Delete { id } => screen.delete(*id),
        Action::StartEdit { id, title } => {
            let current = match title {
                Some(t) => Some(t.clone()),
                None => screen.tasks().get(*id).map(|t| t.title.clone()),
            };
            if let Some(current) = current {
                screen.start_edit(*id, &current);
            }
        }
        Action::EditText { text } => screen.set_edit_text(text),
        Action::SaveEdit { id } => screen.save_edit(*id),
    }
}

/// Apply every action in order and return the final state.
pub fn run_script(mut screen: TaskScreen, actions: &[Action]) -> Snapshot {
    for action in actions {
        apply(&mut screen, action);
    }
    info!(actions = actions.len(), tasks = screen.tasks().len(), "replay finished");
    screen.snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{IdStrategy, Variant};
    use crate::task::Task;

    fn fresh() -> TaskScreen {
        TaskScreen::new(Variant::Editable, IdStrategy::Length)
    }

    #[test]
    fn test_parse_all_actions() {
        let script = r#"[
            {"action": "type", "text": "a"},
            {"action": "submit"},
            {"action": "add", "title": "b"},
            {"action": "toggle", "id": 1},
            {"action": "delete", "id": 2},
            {"action": "start_edit", "id": 1},
            {"action": "start_edit", "id": 1, "title": "x"},
            {"action": "edit_text", "text": "y"},
            {"action": "save_edit", "id": 1}
        ]"#;
        let actions = parse_script(script).unwrap();
        assert_eq!(actions.len(), 9);
        assert_eq!(actions[1], Action::Submit);
        assert_eq!(actions[5], Action::StartEdit { id: 1, title: None });
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(parse_script(r#"[{"action": "rename", "id": 1}]"#).is_err());
        assert!(parse_script("not json").is_err());
    }

    #[test]
    fn test_documented_scenario() {
        let actions = parse_script(
            r#"[
                {"action": "add", "title": "Buy milk"},
                {"action": "add", "title": "Walk dog"},
                {"action": "toggle", "id": 1},
                {"action": "delete", "id": 1},
                {"action": "start_edit", "id": 2},
                {"action": "edit_text", "text": "Walk the dog"},
                {"action": "save_edit", "id": 2}
            ]"#,
        )
        .unwrap();
        let snap = run_script(fresh(), &actions);
        assert_eq!(
            snap.tasks,
            vec![Task { id: 2, title: "Walk the dog".to_string(), status: false }]
        );
        assert_eq!(snap.draft, "");
        assert!(snap.editing.is_none());
    }

    #[test]
    fn test_blank_submit_keeps_draft() {
        let actions = vec![Action::Type { text: "  ".to_string() }, Action::Submit];
        let snap = run_script(fresh(), &actions);
        assert!(snap.tasks.is_empty());
        assert_eq!(snap.draft, "  ");
    }

    #[test]
    fn test_start_edit_on_missing_task_is_ignored() {
        let actions = vec![Action::StartEdit { id: 3, title: None }];
        let snap = run_script(fresh(), &actions);
        assert!(snap.editing.is_none());
    }

    #[test]
    fn test_snapshot_json_shape() {
        let actions = vec![
            Action::Add { title: "Buy milk".to_string() },
            Action::StartEdit { id: 1, title: None },
        ];
        let snap = run_script(fresh(), &actions);
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["tasks"][0]["id"], 1);
        assert_eq!(json["tasks"][0]["status"], false);
        assert_eq!(json["editing"]["title"], "Buy milk");
    }
}

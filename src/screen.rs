//! Screen controller for the to-do list.
//!
//! `TaskScreen` owns the task collection together with the two text buffers
//! the screen exposes: the draft title in the add field and the scratch
//! title of the row being edited. Every user event maps to one method here;
//! the terminal front end and the replay command both drive it the same way
//! and redraw (or snapshot) after each call.

use serde::Serialize;
use tracing::debug;

use crate::fields::{IdStrategy, Variant};
use crate::list::TaskList;
use crate::task::Task;
use crate::tui::input::InputField;

/// The row currently being renamed and its in-progress title.
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    pub task_id: u64,
    pub title: InputField,
}

/// State and event handlers of the task list screen.
#[derive(Debug, Clone)]
pub struct TaskScreen {
    variant: Variant,
    tasks: TaskList,
    draft: InputField,
    editing: Option<EditState>,
}

impl TaskScreen {
    /// A freshly mounted screen: no tasks, empty draft, nothing being edited.
    pub fn new(variant: Variant, id_strategy: IdStrategy) -> Self {
        TaskScreen {
            variant,
            tasks: TaskList::new(id_strategy),
            draft: InputField::new(),
            editing: None,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn draft(&self) -> &InputField {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut InputField {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    /// Scratch buffer of the pending edit, if any.
    pub fn edit_field_mut(&mut self) -> Option<&mut InputField> {
        self.editing.as_mut().map(|e| &mut e.title)
    }

    /// Whether this task is the one shown as an editable field.
    pub fn is_editing(&self, id: u64) -> bool {
        self.editing.as_ref().is_some_and(|e| e.task_id == id)
    }

    /// The add control is only enabled for a non-blank draft.
    pub fn can_add(&self) -> bool {
        !self.draft.is_blank()
    }

    /// Text-change event of the add field.
    pub fn set_draft(&mut self, text: &str) {
        self.draft.set(text);
    }

    /// Press of the add control: add the draft as a task and clear the field.
    pub fn add(&mut self) -> Option<u64> {
        let id = self.tasks.add(&self.draft.value)?;
        self.draft.clear();
        Some(id)
    }

    /// Toggle of a row's switch.
    pub fn toggle_status(&mut self, id: u64) {
        self.tasks.toggle_status(id);
    }

    /// Press of a row's delete control.
    pub fn delete(&mut self, id: u64) {
        self.tasks.delete(id);
    }

    /// Press of a row's edit control.
    ///
    /// Replaces any pending edit without saving it. Ignored by the basic
    /// variant.
    pub fn start_edit(&mut self, id: u64, current_title: &str) {
        if !self.variant.allows_editing() {
            return;
        }
        if let Some(prev) = &self.editing {
            if prev.task_id != id {
                debug!(discarded = prev.task_id, id, "pending edit replaced");
            }
        }
        self.editing = Some(EditState {
            task_id: id,
            title: InputField::with_value(current_title),
        });
    }

    /// Text-change event of the edit field. Ignored when nothing is being edited.
    pub fn set_edit_text(&mut self, text: &str) {
        if let Some(field) = self.edit_field_mut() {
            field.set(text);
        }
    }

    /// Press of a row's save control.
    ///
    /// The scratch title is written as-is: unlike `add`, blank titles are
    /// accepted here. Ignored by the basic variant.
    pub fn save_edit(&mut self, id: u64) {
        if !self.variant.allows_editing() {
            return;
        }
        let title = self
            .editing
            .take()
            .map(|e| e.title.value)
            .unwrap_or_default();
        self.tasks.rename(id, &title);
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.tasks().to_vec(),
            draft: self.draft.value.clone(),
            editing: self.editing.as_ref().map(|e| EditingSnapshot {
                id: e.task_id,
                title: e.title.value.clone(),
            }),
        }
    }
}

/// Point-in-time copy of the screen state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub draft: String,
    pub editing: Option<EditingSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditingSnapshot {
    pub id: u64,
    pub title: String,
}

//! Enumerations for TUI state management.

/// Which overlay, if any, is shown over the task list.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppState {
    TaskList,
    Help,
}

/// Where key presses are routed.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Focus {
    /// The add field.
    Input,
    /// Row selection and row actions.
    List,
    /// The edit field of the row being renamed.
    Edit,
}

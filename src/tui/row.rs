//! Per-task row rendering.
//!
//! A row is derived entirely from one task and the screen's edit state; it
//! keeps nothing of its own.

use ratatui::{
    layout::Constraint,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row},
};

use crate::fields::{format_status, Variant};
use crate::screen::EditState;
use crate::task::Task;
use crate::tui::colors::{GREEN, ORANGE, SWITCH_OFF, SWITCH_ON, TOMATO};

pub const EDIT_LABEL: &str = "edit";
pub const SAVE_LABEL: &str = "save";
pub const DELETE_LABEL: &str = "delete";

/// Column widths for the task table.
pub fn row_widths(variant: Variant) -> Vec<Constraint> {
    let mut widths = vec![
        Constraint::Length(5),  // ID
        Constraint::Min(20),    // Title
        Constraint::Length(10), // Switch
    ];
    if variant.allows_editing() {
        widths.push(Constraint::Length(6));
    }
    widths.push(Constraint::Length(8));
    widths
}

/// Header row matching `row_widths`.
pub fn header_row(variant: Variant) -> Row<'static> {
    let mut cells = vec!["ID", "Title", "Status"];
    if variant.allows_editing() {
        cells.push("");
    }
    cells.push("");
    Row::new(
        cells
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().add_modifier(Modifier::BOLD))),
    )
    .height(1)
}

/// Render one task.
///
/// When `editing` refers to this task the title cell shows the scratch text
/// and the action reads "save"; otherwise the static title is shown, struck
/// through when done.
pub fn task_row<'a>(task: &'a Task, editing: Option<&'a EditState>, variant: Variant) -> Row<'a> {
    let edit = editing.filter(|e| e.task_id == task.id);

    let title_cell = match edit {
        Some(e) => Cell::from(Line::from(vec![
            Span::styled(
                e.title.value.as_str(),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ])),
        None => {
            let style = if task.is_done() {
                Style::default().fg(GREEN).add_modifier(Modifier::CROSSED_OUT | Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
            };
            Cell::from(Span::styled(task.title.as_str(), style))
        }
    };

    let switch = if task.status { "[x]" } else { "[ ]" };
    let switch_cell = Cell::from(format!("{} {}", switch, format_status(task.status)))
        .style(Style::default().fg(if task.status { SWITCH_ON } else { SWITCH_OFF }));

    let mut cells = vec![Cell::from(task.id.to_string()), title_cell, switch_cell];

    if variant.allows_editing() {
        cells.push(match edit {
            Some(_) => Cell::from(SAVE_LABEL).style(Style::default().fg(GREEN)),
            None => Cell::from(EDIT_LABEL).style(Style::default().fg(ORANGE)),
        });
    }
    cells.push(Cell::from(DELETE_LABEL).style(Style::default().fg(TOMATO)));

    Row::new(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths_follow_variant() {
        assert_eq!(row_widths(Variant::Editable).len(), 5);
        assert_eq!(row_widths(Variant::Basic).len(), 4);
    }
}

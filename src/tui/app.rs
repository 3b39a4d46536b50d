//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which routes key presses to the
//! `TaskScreen` controller and renders the screen: heading, add field with
//! its Add button, the scrollable task table, and a status bar.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Table, TableState, Wrap},
    Frame, Terminal,
};

use crate::screen::TaskScreen;
use crate::tui::{
    colors::{DISABLED, GREEN, PLACEHOLDER},
    enums::{AppState, Focus},
    row::{header_row, row_widths, task_row},
    utils::{centered_rect, display_width, scroll_for_cursor},
};

const HEADING: &str = "Todolist App";
const PLACEHOLDER_TEXT: &str = "Enter task title";
const HIGHLIGHT_SYMBOL: &str = ">> ";
/// Width of the id column plus column spacing, before the title starts.
const TITLE_COLUMN_OFFSET: u16 = 6;

/// Terminal front end for a `TaskScreen`.
pub struct App {
    state: AppState,
    focus: Focus,
    screen: TaskScreen,
    table_state: TableState,
    status_message: String,
}

impl App {
    pub fn new(screen: TaskScreen) -> Self {
        App {
            state: AppState::TaskList,
            focus: Focus::Input,
            screen,
            table_state: TableState::default(),
            status_message: String::new(),
        }
    }

    pub fn screen(&self) -> &TaskScreen {
        &self.screen
    }

    /// Set a status message to display in the status bar.
    fn set_status_message(&mut self, msg: String) {
        self.status_message = msg;
    }

    /// Clear the current status message.
    fn clear_status_message(&mut self) {
        self.status_message.clear();
    }

    /// Id and title of the highlighted row.
    fn selected_task(&self) -> Option<(u64, String)> {
        let idx = self.table_state.selected()?;
        self.screen
            .tasks()
            .tasks()
            .get(idx)
            .map(|t| (t.id, t.title.clone()))
    }

    /// Keep the selection inside the list after it grows or shrinks.
    fn clamp_selection(&mut self) {
        let len = self.screen.tasks().len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(idx) if idx >= len => self.table_state.select(Some(len - 1)),
            None if self.focus != Focus::Input => self.table_state.select(Some(0)),
            _ => {}
        }
    }

    fn focus_list(&mut self) {
        self.focus = Focus::List;
        if self.table_state.selected().is_none() && !self.screen.tasks().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    /// Press of the Add button.
    fn add_task(&mut self) {
        if !self.screen.can_add() {
            return;
        }
        if let Some(id) = self.screen.add() {
            let idx = self.screen.tasks().len() - 1;
            self.table_state.select(Some(idx));
            self.set_status_message(format!("Added task #{}", id));
        }
    }

    /// The edit/save action of the highlighted row.
    fn edit_or_save_selected(&mut self) {
        if !self.screen.variant().allows_editing() {
            self.set_status_message("Editing is disabled in this variant".to_string());
            return;
        }
        if let Some((id, title)) = self.selected_task() {
            if self.screen.is_editing(id) {
                self.screen.save_edit(id);
                self.focus = Focus::List;
                self.set_status_message(format!("Saved task #{}", id));
            } else {
                self.screen.start_edit(id, &title);
                self.focus = Focus::Edit;
                self.set_status_message(format!("Editing task #{} - Enter to save", id));
            }
        }
    }

    /// Handle keyboard input in the add field.
    ///
    /// Returns true if the application should quit.
    fn handle_input_focus(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc => return true,
            KeyCode::Enter => self.add_task(),
            KeyCode::Tab | KeyCode::Down => self.focus_list(),
            _ => {
                let draft = self.screen.draft_mut();
                match key {
                    KeyCode::Backspace => draft.handle_backspace(),
                    KeyCode::Delete => draft.handle_delete(),
                    KeyCode::Left => draft.move_cursor_left(),
                    KeyCode::Right => draft.move_cursor_right(),
                    KeyCode::Home => draft.move_cursor_home(),
                    KeyCode::End => draft.move_cursor_end(),
                    KeyCode::Char(c) => draft.handle_char(c),
                    _ => {}
                }
            }
        }
        false
    }

    /// Handle keyboard input when a row is selected.
    ///
    /// Returns true if the application should quit.
    fn handle_list_focus(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected > 0 {
                        self.table_state.select(Some(selected - 1));
                    }
                } else if !self.screen.tasks().is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(selected) = self.table_state.selected() {
                    if selected + 1 < self.screen.tasks().len() {
                        self.table_state.select(Some(selected + 1));
                    }
                } else if !self.screen.tasks().is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('t') => {
                if let Some((id, _)) = self.selected_task() {
                    self.screen.toggle_status(id);
                }
            }
            KeyCode::Char('e') => self.edit_or_save_selected(),
            KeyCode::Enter => {
                if let Some((id, _)) = self.selected_task() {
                    if self.screen.is_editing(id) {
                        self.focus = Focus::Edit;
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some((id, _)) = self.selected_task() {
                    self.screen.delete(id);
                    self.clamp_selection();
                    self.set_status_message(format!("Deleted task #{}", id));
                }
            }
            KeyCode::Char('a') | KeyCode::Tab | KeyCode::BackTab => {
                self.focus = Focus::Input;
            }
            KeyCode::Char('h') | KeyCode::F(1) => {
                self.state = AppState::Help;
            }
            _ => {}
        }
        false
    }

    /// Handle keyboard input in the edit field of the row being renamed.
    fn handle_edit_focus(&mut self, key: KeyCode) -> bool {
        let Some(editing_id) = self.screen.editing().map(|e| e.task_id) else {
            self.focus = Focus::List;
            return false;
        };
        match key {
            KeyCode::Enter => {
                self.screen.save_edit(editing_id);
                self.focus = Focus::List;
                self.set_status_message(format!("Saved task #{}", editing_id));
            }
            KeyCode::Esc | KeyCode::Tab => {
                self.focus = Focus::List;
            }
            _ => {
                if let Some(field) = self.screen.edit_field_mut() {
                    match key {
                        KeyCode::Backspace => field.handle_backspace(),
                        KeyCode::Delete => field.handle_delete(),
                        KeyCode::Left => field.move_cursor_left(),
                        KeyCode::Right => field.move_cursor_right(),
                        KeyCode::Home => field.move_cursor_home(),
                        KeyCode::End => field.move_cursor_end(),
                        KeyCode::Char(c) => field.handle_char(c),
                        _ => {}
                    }
                }
            }
        }
        false
    }

    fn handle_help_input(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('h') | KeyCode::F(1)) {
            self.state = AppState::TaskList;
        }
        false
    }

    /// Dispatch a single key press.
    ///
    /// Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if key == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        self.clear_status_message();

        let should_quit = match (self.state, self.focus) {
            (AppState::Help, _) => self.handle_help_input(key),
            (AppState::TaskList, Focus::Input) => self.handle_input_focus(key),
            (AppState::TaskList, Focus::List) => self.handle_list_focus(key),
            (AppState::TaskList, Focus::Edit) => self.handle_edit_focus(key),
        };
        self.clamp_selection();
        should_quit
    }

    /// Poll for and handle keyboard events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(self.handle_key(key.code, key.modifiers));
                }
            }
        }
        Ok(false)
    }

    fn render_heading(&self, f: &mut Frame, area: Rect) {
        let heading = Paragraph::new(Line::from(Span::styled(
            HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(heading, area);
    }

    /// Render the add field and its Add button.
    fn render_input_row(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(9)])
            .split(area);

        let draft = self.screen.draft();
        let focused = self.focus == Focus::Input && self.state == AppState::TaskList;
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let text = if draft.value.is_empty() {
            Span::styled(PLACEHOLDER_TEXT, Style::default().fg(PLACEHOLDER))
        } else {
            Span::raw(draft.value.as_str())
        };
        let inner_width = chunks[0].width.saturating_sub(2);
        let cursor_col = display_width(draft.before_cursor());
        let scroll = scroll_for_cursor(cursor_col, inner_width);
        let field = Paragraph::new(Line::from(text))
            .scroll((0, scroll))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("New task"),
            );
        f.render_widget(field, chunks[0]);

        let button_bg = if self.screen.can_add() { GREEN } else { DISABLED };
        let button = Paragraph::new("Add")
            .style(
                Style::default()
                    .bg(button_bg)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(button, chunks[1]);

        if focused {
            f.set_cursor_position((chunks[0].x + 1 + cursor_col - scroll, chunks[0].y + 1));
        }
    }

    /// Render the scrollable task table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let variant = self.screen.variant();
        let tasks = self.screen.tasks();
        let title = format!(
            "Tasks ({}/{} done) - Press 'h' for help",
            tasks.done_count(),
            tasks.len()
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        if tasks.is_empty() {
            let empty = Paragraph::new("No tasks yet. Type a title and press Enter.")
                .style(Style::default().fg(PLACEHOLDER))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(empty, area);
            return;
        }

        let editing = self.screen.editing();
        let rows: Vec<_> = tasks
            .iter()
            .map(|task| task_row(task, editing, variant))
            .collect();

        let highlight = if self.focus == Focus::Input {
            Style::default()
        } else {
            Style::default().bg(Color::Gray).fg(Color::Black)
        };
        let table = Table::new(rows, row_widths(variant))
            .header(header_row(variant))
            .block(block)
            .row_highlight_style(highlight)
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        f.render_stateful_widget(table, area, &mut self.table_state);

        if self.focus == Focus::Edit && self.state == AppState::TaskList {
            self.place_edit_cursor(f, area);
        }
    }

    /// Put the terminal cursor inside the edit field, if its row is visible.
    fn place_edit_cursor(&self, f: &mut Frame, area: Rect) {
        let Some(edit) = self.screen.editing() else {
            return;
        };
        let Some(idx) = self
            .screen
            .tasks()
            .iter()
            .position(|t| t.id == edit.task_id)
        else {
            return;
        };
        let offset = self.table_state.offset();
        // Border and header sit above the first row.
        let visible_rows = area.height.saturating_sub(3) as usize;
        if idx < offset || idx - offset >= visible_rows {
            return;
        }
        let x = area.x
            + 1
            + HIGHLIGHT_SYMBOL.len() as u16
            + TITLE_COLUMN_OFFSET
            + display_width(edit.title.before_cursor());
        // Long titles are clipped by the cell; keep the cursor inside the border.
        let x = x.min(area.right().saturating_sub(2));
        let y = area.y + 2 + (idx - offset) as u16;
        f.set_cursor_position((x, y));
    }

    /// Render the help overlay with keyboard shortcuts.
    fn render_help(&self, f: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut help_text = vec![
            Line::from(Span::styled("Add Field:", bold)),
            Line::from("  Type         Enter a task title"),
            Line::from("  Enter        Add task (ignored while the title is blank)"),
            Line::from("  Tab/Down    Move to the task list"),
            Line::from(""),
            Line::from(Span::styled("Task List:", bold)),
            Line::from("  Up/Down k/j  Select task"),
            Line::from("  Space/t      Toggle done/due"),
        ];
        if self.screen.variant().allows_editing() {
            help_text.push(Line::from("  e            Edit title / save edit"));
            help_text.push(Line::from("  Enter        Return to a pending edit"));
        }
        help_text.extend([
            Line::from("  d/Delete     Delete task"),
            Line::from("  a/Tab        Back to the add field"),
            Line::from("  h/F1         Show this help"),
            Line::from("  q/Esc        Quit"),
            Line::from(""),
            Line::from("  Ctrl+C       Quit from anywhere"),
        ]);

        let area = centered_rect(60, 70, area);
        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Help - Press Esc to return"),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    /// Render the status bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match (self.state, self.focus) {
                (AppState::Help, _) => "Help".to_string(),
                (_, Focus::Input) => "Type a title, Enter to add | Tab for list | Esc to quit".to_string(),
                (_, Focus::List) => format!(
                    "Tasks: {} | Space toggle | d delete | Press 'h' for help",
                    self.screen.tasks().len()
                ),
                (_, Focus::Edit) => "Editing - Enter to save, Esc to leave pending".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(Color::Blue).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Heading
                Constraint::Length(3), // Add field
                Constraint::Min(0),    // Task table
                Constraint::Length(1), // Status bar
            ])
            .split(f.area());
        let full = f.area();

        self.render_heading(f, chunks[0]);
        self.render_input_row(f, chunks[1]);
        self.render_task_list(f, chunks[2]);
        if self.state == AppState::Help {
            self.render_help(f, full);
        }
        self.render_status_bar(f, chunks[3]);
    }

    /// Main event loop: redraw, then handle one event, until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

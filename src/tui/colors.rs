//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Done rows, the save action, and the enabled Add button
pub const GREEN: Color = Color::Rgb(76, 175, 80);
/// Edit action
pub const ORANGE: Color = Color::Rgb(255, 165, 0);
/// Delete action
pub const TOMATO: Color = Color::Rgb(255, 99, 71);
/// Disabled Add button
pub const DISABLED: Color = Color::Rgb(176, 190, 197);
/// Switch track when on
pub const SWITCH_ON: Color = Color::Rgb(129, 176, 255);
/// Switch track when off
pub const SWITCH_OFF: Color = Color::Rgb(118, 117, 119);
/// Placeholder text
pub const PLACEHOLDER: Color = Color::Rgb(170, 170, 170);

//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Colors are
//! dropped when `NO_COLOR` is set or `--no-color` is passed.

use owo_colors::OwoColorize;
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn paint<T: Display>(text: T, styled: impl FnOnce(&T) -> String) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            styled(&text)
        }
    }

    /// Style for section headers (e.g., "Voices", "Input types")
    pub fn header<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.bold()))
    }

    /// Style for labels/keys (e.g., "host", "locale")
    pub fn label<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for primary values (e.g., voice names, phoneme strings)
    pub fn value<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.cyan()))
    }

    /// Style for secondary/supplementary info (e.g., gender, transcription method)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.dimmed()))
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.green()))
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.red().bold()))
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.yellow()))
    }

    /// Style for locale codes and option keys
    pub fn code<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.yellow()))
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        Self::paint(text, |t| format!("{}", t.dimmed().italic()))
    }
}

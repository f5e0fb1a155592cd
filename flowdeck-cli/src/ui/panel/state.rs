//! State types for the panel.
//!
//! This module contains all state-related structs and enums used by the
//! panel. These types are independent of rendering and can be tested in
//! isolation.

use flowdeck::client::{ProcessorStatus, StatisticsMap};
use std::time::Duration;

/// Events the panel loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    /// User confirmed quit.
    Quit,
    /// User requested a processor start.
    StartRequested,
    /// User requested a processor stop.
    StopRequested,
    /// User requested a manual status/statistics refresh.
    RefreshRequested,
    /// User submitted the parameter editor buffer; carries the raw text.
    ParametersSubmitted(String),
}

/// View data the panel renders from.
///
/// Panes keep their last successful content when a fetch fails; failures
/// surface through the notification log instead.
#[derive(Debug, Default)]
pub struct PanelState {
    /// Last status snapshot.
    pub status: Option<ProcessorStatus>,
    /// Last statistics mapping.
    pub statistics: Option<StatisticsMap>,
    /// Processor help text, fetched once on load.
    pub help: Option<String>,
    /// Pretty-printed parameters from the last status snapshot.
    pub parameters_text: String,
    /// Active parameter editor; `Some` while in edit mode.
    pub editor: Option<ParameterEditor>,
}

impl PanelState {
    /// Whether the parameter editor is active.
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }
}

/// Raw-text editor for the parameters pane.
///
/// Deliberately minimal: the buffer is sent to the server as-is, so the
/// editor never parses or validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterEditor {
    /// Edit buffer.
    pub buffer: String,
    /// Cursor position as a byte offset, always on a char boundary.
    pub cursor: usize,
}

impl ParameterEditor {
    /// Create an editor seeded with the given text, cursor at the end.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.to_string(),
            cursor: initial.len(),
        }
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a line break at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert('\n');
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some((index, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.buffer.remove(index);
            self.cursor = index;
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some((index, _)) = self.buffer[..self.cursor].char_indices().next_back() {
            self.cursor = index;
        }
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move the cursor one line up, clamping to the line length.
    pub fn move_up(&mut self) {
        let (line, column) = self.line_col();
        if line == 0 {
            return;
        }
        self.cursor = self.offset_for(line - 1, column);
    }

    /// Move the cursor one line down, clamping to the line length.
    pub fn move_down(&mut self) {
        let (line, column) = self.line_col();
        if line + 1 >= self.buffer.split('\n').count() {
            return;
        }
        self.cursor = self.offset_for(line + 1, column);
    }

    /// Current cursor position as (line, column) in characters.
    pub fn line_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let column = before
            .rsplit_once('\n')
            .map(|(_, tail)| tail.chars().count())
            .unwrap_or_else(|| before.chars().count());
        (line, column)
    }

    /// Byte offset of the given line/column, clamped to the line length.
    fn offset_for(&self, line: usize, column: usize) -> usize {
        let mut offset = 0;
        for (index, text) in self.buffer.split('\n').enumerate() {
            if index == line {
                let clamped: usize = text
                    .chars()
                    .take(column)
                    .map(|c| c.len_utf8())
                    .sum();
                return offset + clamped;
            }
            offset += text.len() + 1; // account for the '\n'
        }
        self.buffer.len()
    }
}

/// Timeout for quit confirmation (auto-cancels after this duration).
pub const QUIT_CONFIRM_TIMEOUT: Duration = Duration::from_secs(5);

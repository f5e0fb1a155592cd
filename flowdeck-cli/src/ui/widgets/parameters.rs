//! Parameters pane widget.
//!
//! Shows the pretty-printed parameters from the last status snapshot, or
//! the raw edit buffer while the editor is active.

use crate::ui::panel::state::ParameterEditor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget displaying the parameters text or the active editor buffer.
pub struct ParametersWidget<'a> {
    text: &'a str,
    editor: Option<&'a ParameterEditor>,
}

impl<'a> ParametersWidget<'a> {
    pub fn new(text: &'a str, editor: Option<&'a ParameterEditor>) -> Self {
        Self { text, editor }
    }
}

impl Widget for ParametersWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (content, color) = match self.editor {
            Some(editor) => (editor.buffer.as_str(), Color::White),
            None if self.text.is_empty() => ("Waiting for first status...", Color::DarkGray),
            None => (self.text, Color::Gray),
        };

        let lines: Vec<Line> = content
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(color))))
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

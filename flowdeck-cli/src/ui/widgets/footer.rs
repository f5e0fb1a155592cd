//! Key-hint footer widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::time::Duration;

/// What the footer should display.
pub enum FooterMode {
    /// Normal key hints.
    Normal,
    /// Parameter editor hints.
    Editing,
    /// Quit confirmation prompt with remaining time.
    ConfirmQuit(Duration),
}

/// Widget displaying key bindings or the quit confirmation prompt.
pub struct FooterWidget {
    mode: FooterMode,
}

impl FooterWidget {
    pub fn new(mode: FooterMode) -> Self {
        Self { mode }
    }
}

impl Widget for FooterWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.mode {
            FooterMode::Normal => Line::from(vec![
                key_hint("s", "start"),
                key_hint("x", "stop"),
                key_hint("e", "edit parameters"),
                key_hint("r", "refresh"),
                key_hint("q", "quit"),
            ]),
            FooterMode::Editing => Line::from(Span::styled(
                " editing parameters - Ctrl+S send, Esc cancel ",
                Style::default().fg(Color::Yellow),
            )),
            FooterMode::ConfirmQuit(remaining) => Line::from(Span::styled(
                format!(" Quit? [y]/[n] ({}s) ", remaining.as_secs()),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )),
        };

        Paragraph::new(line).render(area, buf);
    }
}

fn key_hint(key: &str, action: &str) -> Span<'static> {
    Span::styled(
        format!(" [{}] {} ", key, action),
        Style::default().fg(Color::DarkGray),
    )
}

//! Processor help text widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Widget displaying the processor's help text.
pub struct HelpWidget<'a> {
    help: Option<&'a str>,
}

impl<'a> HelpWidget<'a> {
    pub fn new(help: Option<&'a str>) -> Self {
        Self { help }
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = match self.help {
            Some(help) => Paragraph::new(help.trim().to_string())
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: false }),
            None => Paragraph::new(Line::from(Span::styled(
                "Loading help...",
                Style::default().fg(Color::DarkGray),
            ))),
        };

        paragraph.render(area, buf);
    }
}

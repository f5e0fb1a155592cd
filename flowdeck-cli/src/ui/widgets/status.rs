//! Processor status widget.

use flowdeck::client::ProcessorStatus;
use flowdeck::format;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget displaying the processor name and run state.
pub struct StatusWidget<'a> {
    status: Option<&'a ProcessorStatus>,
}

impl<'a> StatusWidget<'a> {
    pub fn new(status: Option<&'a ProcessorStatus>) -> Self {
        Self { status }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.status {
            Some(status) => {
                let state_color = if status.is_running {
                    Color::Green
                } else {
                    Color::Red
                };
                vec![
                    Line::from(vec![
                        Span::styled("Processor: ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            status.processor_name.clone(),
                            Style::default().fg(Color::White),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("State:     ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            format::run_state_label(status.is_running),
                            Style::default().fg(state_color),
                        ),
                    ]),
                ]
            }
            None => vec![Line::from(Span::styled(
                "Waiting for first status...",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        Paragraph::new(lines).render(area, buf);
    }
}

//! Statistics list widget.

use flowdeck::client::StatisticsMap;
use flowdeck::format;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget displaying the statistics mapping as `name = value` lines.
pub struct StatisticsWidget<'a> {
    statistics: Option<&'a StatisticsMap>,
}

impl<'a> StatisticsWidget<'a> {
    pub fn new(statistics: Option<&'a StatisticsMap>) -> Self {
        Self { statistics }
    }
}

impl Widget for StatisticsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.statistics {
            Some(statistics) if statistics.is_empty() => {
                vec![Line::from(Span::styled(
                    "No statistics reported.",
                    Style::default().fg(Color::DarkGray),
                ))]
            }
            Some(statistics) => format::statistics_lines(statistics)
                .into_iter()
                .map(|line| match line.split_once(" = ") {
                    Some((name, value)) => Line::from(vec![
                        Span::styled(format!("{} = ", name), Style::default().fg(Color::DarkGray)),
                        Span::styled(value.to_string(), Style::default().fg(Color::Cyan)),
                    ]),
                    None => Line::from(line),
                })
                .collect(),
            None => vec![Line::from(Span::styled(
                "Waiting for first statistics...",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        Paragraph::new(lines).render(area, buf);
    }
}

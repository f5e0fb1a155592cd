//! Panel rendering.
//!
//! Top-level layout orchestration:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Header (1 line)                                          │
//! ├───────────────────────────┬──────────────────────────────┤
//! │ Status (4 lines)          │ Statistics                   │
//! ├───────────────────────────┤                              │
//! │ Parameters                ├──────────────────────────────┤
//! │ (editor when active)      │ Help                         │
//! ├───────────────────────────┴──────────────────────────────┤
//! │ Notifications (5 lines)                                  │
//! ├──────────────────────────────────────────────────────────┤
//! │ Footer: key hints / edit hints / quit confirmation       │
//! └──────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use flowdeck::notify::Notification;

use super::state::PanelState;
use super::PanelConfig;
use crate::ui::widgets::{
    FooterMode, FooterWidget, HelpWidget, NotificationsWidget, ParametersWidget, StatisticsWidget,
    StatusWidget,
};

/// Render the panel UI to the frame.
pub fn render_ui(
    frame: &mut Frame,
    state: &PanelState,
    config: &PanelConfig,
    notifications: &[Notification],
    uptime: Duration,
    confirmation_remaining: Option<Duration>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Body
            Constraint::Length(5), // Notifications
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], config, uptime);
    render_body(frame, chunks[1], state);

    let notifications_block = titled_block(" Notifications ", Color::Magenta);
    let notifications_inner = notifications_block.inner(chunks[2]);
    frame.render_widget(notifications_block, chunks[2]);
    frame.render_widget(NotificationsWidget::new(notifications), notifications_inner);

    let footer_mode = match confirmation_remaining {
        Some(remaining) => FooterMode::ConfirmQuit(remaining),
        None if state.is_editing() => FooterMode::Editing,
        None => FooterMode::Normal,
    };
    frame.render_widget(FooterWidget::new(footer_mode), chunks[3]);
}

fn render_header(frame: &mut Frame, area: Rect, config: &PanelConfig, uptime: Duration) {
    let mut spans = vec![
        Span::styled(" flowdeck ", Style::default().fg(Color::Blue)),
        Span::styled("│ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            config.node_address.clone(),
            Style::default().fg(Color::White),
        ),
    ];
    if let Some(ref instance) = config.instance {
        spans.push(Span::styled(" / ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            instance.clone(),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        format!("  up {}", format_duration(uptime)),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_body(frame: &mut Frame, area: Rect, state: &PanelState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left column: status over parameters
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(4)])
        .split(columns[0]);

    let status_block = titled_block(" Status ", Color::Blue);
    let status_inner = status_block.inner(left[0]);
    frame.render_widget(status_block, left[0]);
    frame.render_widget(StatusWidget::new(state.status.as_ref()), status_inner);

    let parameters_title = if state.is_editing() {
        " Parameters (editing) "
    } else {
        " Parameters "
    };
    let parameters_color = if state.is_editing() {
        Color::Yellow
    } else {
        Color::Blue
    };
    let parameters_block = titled_block(parameters_title, parameters_color);
    let parameters_inner = parameters_block.inner(left[1]);
    frame.render_widget(parameters_block, left[1]);
    frame.render_widget(
        ParametersWidget::new(&state.parameters_text, state.editor.as_ref()),
        parameters_inner,
    );

    // Place the terminal cursor inside the editor
    if let Some(ref editor) = state.editor {
        let (line, column) = editor.line_col();
        let x = parameters_inner
            .x
            .saturating_add(column.min(u16::MAX as usize) as u16)
            .min(parameters_inner.right().saturating_sub(1));
        let y = parameters_inner
            .y
            .saturating_add(line.min(u16::MAX as usize) as u16)
            .min(parameters_inner.bottom().saturating_sub(1));
        frame.set_cursor_position(Position::new(x, y));
    }

    // Right column: statistics over help
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(columns[1]);

    let statistics_block = titled_block(" Statistics ", Color::Blue);
    let statistics_inner = statistics_block.inner(right[0]);
    frame.render_widget(statistics_block, right[0]);
    frame.render_widget(
        StatisticsWidget::new(state.statistics.as_ref()),
        statistics_inner,
    );

    let help_block = titled_block(" Help ", Color::Blue);
    let help_inner = help_block.inner(right[1]);
    frame.render_widget(help_block, right[1]);
    frame.render_widget(HelpWidget::new(state.help.as_deref()), help_inner);
}

fn titled_block(title: &str, title_color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title.to_string(),
            Style::default().fg(title_color),
        ))
}

/// Format a duration as a compact uptime label.
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m{}s", secs / 60, secs % 60)
    } else {
        format!("{}h{}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(45)), "45s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m5s");
        assert_eq!(format_duration(Duration::from_secs(3700)), "1h1m");
    }
}

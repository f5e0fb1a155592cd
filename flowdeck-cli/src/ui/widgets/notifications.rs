//! Notification toast widget.

use flowdeck::notify::{Notification, NotifyLevel};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Widget displaying the newest notifications, newest first.
pub struct NotificationsWidget<'a> {
    notifications: &'a [Notification],
}

impl<'a> NotificationsWidget<'a> {
    pub fn new(notifications: &'a [Notification]) -> Self {
        Self { notifications }
    }

    fn level_color(level: NotifyLevel) -> Color {
        match level {
            NotifyLevel::Success => Color::Green,
            NotifyLevel::Warning => Color::Yellow,
            NotifyLevel::Error => Color::Red,
        }
    }
}

/// Timestamp plus message, the line format the toast area renders.
pub fn notification_line(notification: &Notification) -> (String, String) {
    (
        notification.at.format("%H:%M:%S").to_string(),
        notification.message.clone(),
    )
}

impl Widget for NotificationsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notifications.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No notifications.",
                Style::default().fg(Color::DarkGray),
            )))
            .render(area, buf);
            return;
        }

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|notification| {
                let (timestamp, message) = notification_line(notification);
                Line::from(vec![
                    Span::styled(
                        format!("{} ", timestamp),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        message,
                        Style::default().fg(Self::level_color(notification.level)),
                    ),
                ])
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_notification_line_contains_message() {
        let notification = Notification {
            level: NotifyLevel::Success,
            message: "Processor started.".to_string(),
            at: Local::now(),
        };

        let (timestamp, message) = notification_line(&notification);
        assert_eq!(message, "Processor started.");
        // HH:MM:SS
        assert_eq!(timestamp.len(), 8);
    }

    #[test]
    fn test_level_colors_distinct() {
        assert_ne!(
            NotificationsWidget::level_color(NotifyLevel::Success),
            NotificationsWidget::level_color(NotifyLevel::Error)
        );
    }
}

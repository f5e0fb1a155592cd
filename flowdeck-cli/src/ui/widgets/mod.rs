//! Panel widgets.
//!
//! Each pane is a struct borrowing its view data and implementing
//! [`ratatui::widgets::Widget`].

mod footer;
mod help;
mod notifications;
mod parameters;
mod statistics;
mod status;

pub use footer::{FooterMode, FooterWidget};
pub use help::HelpWidget;
pub use notifications::NotificationsWidget;
pub use parameters::ParametersWidget;
pub use statistics::StatisticsWidget;
pub use status::StatusWidget;

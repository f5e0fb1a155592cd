//! Terminal UI for flowdeck.
//!
//! Provides the interactive control panel: status, statistics, parameter
//! editing, help text and a notification toast area.

pub mod panel;
pub mod widgets;

pub use panel::{Panel, PanelConfig, PanelEvent, PanelState};

//! Flowdeck - operator control panel for stream-processing nodes
//!
//! This library provides the client side of a node's REST control
//! interface: a typed API client, the response-envelope handling it relies
//! on, a notification log for the panel UI, configuration, and logging.
//!
//! # High-Level API
//!
//! ```ignore
//! use flowdeck::client::{ApiLayout, NodeClient, ReqwestClient};
//!
//! let http = ReqwestClient::new()?;
//! let layout = ApiLayout::from_instance("http://127.0.0.1:8080", Some("writer".into()));
//! let client = NodeClient::new(http, layout);
//!
//! let status = client.get_status().await?;
//! println!("{} is {}", status.processor_name, status.is_running);
//! ```

pub mod client;
pub mod config;
pub mod format;
pub mod logging;
pub mod notify;

/// Version of the flowdeck library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

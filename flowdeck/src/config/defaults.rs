//! Default configuration values.

/// Default REST address of the controlled node.
pub const DEFAULT_NODE_ADDRESS: &str = "http://127.0.0.1:8080";

/// Default request timeout in seconds. 0 disables the timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default panel auto-refresh interval in seconds. 0 disables it.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 2;

/// Default notification history capacity.
pub const DEFAULT_NOTIFICATION_HISTORY: usize = 50;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "flowdeck.log";

//! Console issue logger
//!
//! Sends issues through the `log` facade, using the scope as the log target
//! so `RUST_LOG=checker.taskComplete=debug` works per rule.

use log::Level;

use crate::core::models::Issue;
use crate::core::ports::IssueLogger;

/// Issue logger that writes through `log` (and so `env_logger`) to stderr
#[derive(Debug, Clone)]
pub struct ConsoleIssueLogger {
    target: String,
}

impl ConsoleIssueLogger {
    /// Create a logger for `scope`, e.g. `checker.taskComplete`
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            target: scope.into(),
        }
    }
}

impl IssueLogger for ConsoleIssueLogger {
    fn log_message(&self, level: Level, message: &str) {
        log::log!(target: self.target.as_str(), level, "{message}");
    }

    fn log_issue(&self, level: Level, issue: &Issue) {
        log::log!(target: self.target.as_str(), level, "{issue}");
    }
}

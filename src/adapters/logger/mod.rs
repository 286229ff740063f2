//! Issue logger implementations
//!
//! - [`ConsoleIssueLogger`] - prints through `log` / `env_logger`
//! - [`RecordingIssueLogger`] - keeps issues in memory for reports and tests

mod console;
mod recording;

pub use console::ConsoleIssueLogger;
pub use recording::{IssueRecorder, LoggedIssue, RecordingIssueLogger};

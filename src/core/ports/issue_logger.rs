//! Issue logger port
//!
//! Defines where rules and parsers send what they find.

use log::Level;

use crate::core::models::Issue;

/// Output sink for issues and free-form notices
///
/// The core never prints. It hands issues to an implementation of this trait,
/// which may write to the console, record them for JSON output, or stream
/// them to an editor.
pub trait IssueLogger {
    /// Log a free-form notice
    fn log_message(&self, level: Level, message: &str);

    /// Log a structured, file-attributed problem
    fn log_issue(&self, level: Level, issue: &Issue);
}

impl<L: IssueLogger + ?Sized> IssueLogger for &L {
    fn log_message(&self, level: Level, message: &str) {
        (**self).log_message(level, message);
    }

    fn log_issue(&self, level: Level, issue: &Issue) {
        (**self).log_issue(level, issue);
    }
}

impl<L: IssueLogger + ?Sized> IssueLogger for Box<L> {
    fn log_message(&self, level: Level, message: &str) {
        (**self).log_message(level, message);
    }

    fn log_issue(&self, level: Level, issue: &Issue) {
        (**self).log_issue(level, issue);
    }
}

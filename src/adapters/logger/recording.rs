//! Recording issue logger
//!
//! Keeps issues in memory instead of printing them. Used for JSON output,
//! where issues end up inside the report, and by tests.

use std::cell::RefCell;
use std::rc::Rc;

use log::Level;
use serde::Serialize;

use crate::core::models::Issue;
use crate::core::ports::IssueLogger;

/// An issue together with where and how loudly it was reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedIssue {
    /// Logger scope, e.g. `checker.taskComplete`
    pub scope: String,
    /// Severity, as the `log` level name
    pub severity: String,
    /// The issue itself
    #[serde(flatten)]
    pub issue: Issue,
}

/// Shared store that hands out per-scope recording loggers
#[derive(Debug, Clone, Default)]
pub struct IssueRecorder {
    entries: Rc<RefCell<Vec<LoggedIssue>>>,
}

impl IssueRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Logger that records into this store under `scope`
    #[must_use]
    pub fn scoped(&self, scope: &str) -> RecordingIssueLogger {
        RecordingIssueLogger {
            scope: scope.to_string(),
            entries: Rc::clone(&self.entries),
        }
    }

    /// Every issue recorded so far, in order
    #[must_use]
    pub fn issues(&self) -> Vec<LoggedIssue> {
        self.entries.borrow().clone()
    }

    /// Issues recorded under `scope`
    #[must_use]
    pub fn issues_in(&self, scope: &str) -> Vec<Issue> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.scope == scope)
            .map(|entry| entry.issue.clone())
            .collect()
    }
}

/// Issue logger that records issues and forwards notices to `log`
#[derive(Debug, Clone)]
pub struct RecordingIssueLogger {
    scope: String,
    entries: Rc<RefCell<Vec<LoggedIssue>>>,
}

impl IssueLogger for RecordingIssueLogger {
    fn log_message(&self, level: Level, message: &str) {
        log::log!(target: self.scope.as_str(), level, "{message}");
    }

    fn log_issue(&self, level: Level, issue: &Issue) {
        self.entries.borrow_mut().push(LoggedIssue {
            scope: self.scope.clone(),
            severity: level.to_string(),
            issue: issue.clone(),
        });
    }
}

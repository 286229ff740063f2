//! Issue model
//!
//! An issue is one reportable problem in one file, optionally pinned to a line.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// A problem found in a validated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// What is wrong
    pub message: String,

    /// The file the problem was found in (may be empty for set-wide problems)
    pub file: PathBuf,

    /// 1-based line number, when the problem has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Issue {
    /// Create an issue for a whole file
    pub fn new(message: impl Into<String>, file: impl AsRef<Path>) -> Self {
        Self {
            message: message.into(),
            file: file.as_ref().to_path_buf(),
            line: None,
        }
    }

    /// Create an issue pinned to a 1-based line
    pub fn at_line(message: impl Into<String>, file: impl AsRef<Path>, line: usize) -> Self {
        Self {
            line: Some(line),
            ..Self::new(message, file)
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "File {}, line {line}: {}", self.file.display(), self.message),
            None => write!(f, "File {}: {}", self.file.display(), self.message),
        }
    }
}

//! Pieces shared by the task and solution parsers

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use log::Level;
use regex::Regex;

use crate::core::models::Issue;
use crate::core::ports::IssueLogger;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)$").expect("valid task number regex"));

static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.?#([^{}]*)").expect("valid title regex"));

static SKIPTEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%skiptest (.*)").expect("valid skiptest regex"));

/// Read a document, keeping line endings intact
///
/// Unreadable or non-UTF-8 files are reported and yield `None`.
pub fn read_document(logger: &dyn IssueLogger, path: &Path) -> Option<String> {
    match fs::read(path).map(String::from_utf8) {
        Ok(Ok(text)) => Some(text),
        Ok(Err(_)) => {
            logger.log_issue(Level::Error, &Issue::new("File is not valid UTF-8!", path));
            None
        },
        Err(e) => {
            logger.log_issue(Level::Error, &Issue::new(format!("Cannot read file: {e}"), path));
            None
        },
    }
}

/// Task number from the digits ending the file stem, e.g. `prikl3.md`
pub fn task_number(path: &Path) -> Option<u32> {
    let stem = path.file_stem()?.to_string_lossy();
    NUMBER.captures(&stem)?.get(1)?.as_str().parse().ok()
}

/// Title from the first line, between `#` and the `{...}` header
pub fn title(first_line: &str) -> Option<String> {
    non_empty(TITLE.captures(first_line)?.get(1)?.as_str())
}

/// Trimmed `text`, or `None` when nothing is left
pub fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Rule name from a `%skiptest <rule>` directive
pub fn skiptest(line: &str) -> Option<String> {
    SKIPTEST.captures(line).map(|c| c[1].to_string())
}

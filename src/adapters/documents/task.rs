//! Task statement parser
//!
//! A task document looks like:
//!
//! ```text
//! # Zlatá rybka {bodypopis=4 bodyprogram=6}
//! %by Jana
//! %proofread Fero
//! %skiptest taskFirstLetter
//! ...statement text...
//! ```

use std::path::Path;
use std::sync::LazyLock;

use log::Level;
use regex::Regex;

use super::header;
use crate::core::models::{Issue, Points, Task};
use crate::core::ports::IssueLogger;

static POINTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{bodypopis=([0-9]*) bodyprogram=([0-9]*)\}").expect("valid points regex")
});

static AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%by (.*)").expect("valid author regex"));

static PROOFREADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%proofread (.*)").expect("valid proofreader regex"));

/// Read and parse the task document at `path`
///
/// Returns `None` when the file cannot be read or its name carries no task
/// number. Both cases are reported to `logger`.
pub fn parse_task(logger: &dyn IssueLogger, path: &Path) -> Option<Task> {
    let text = header::read_document(logger, path)?;
    parse_task_text(logger, path, text)
}

/// Parse task document text that was read from `path`
pub fn parse_task_text(logger: &dyn IssueLogger, path: &Path, text: String) -> Option<Task> {
    let Some(number) = header::task_number(path) else {
        logger.log_issue(Level::Error, &Issue::new("File has no valid task number!", path));
        return None;
    };

    let mut task = Task {
        filename: path.to_path_buf(),
        number,
        ..Task::default()
    };

    let first_line = text.lines().next().unwrap_or_default();

    task.name = header::title(first_line);
    if task.name.is_none() {
        logger.log_issue(Level::Warn, &Issue::new("Could not determine the task name!", path));
    }

    task.points = points(first_line);
    if task.points.is_none() {
        logger.log_issue(Level::Warn, &Issue::new("Could not determine the task points!", path));
    }

    for (idx, line) in text.lines().enumerate() {
        if let Some(found) = AUTHOR.captures(line) {
            if task.author.is_some() {
                logger.log_message(
                    Level::Warn,
                    &format!("Task {} supposedly has more than one author!", path.display()),
                );
            }
            task.author = header::non_empty(&found[1]);
        }

        if let Some(rule) = header::skiptest(line) {
            task.bypass.push(rule);
        }

        if let Some(found) = PROOFREADER.captures(line) {
            if task.proofreader.is_some() {
                logger.log_issue(
                    Level::Warn,
                    &Issue::at_line("Task supposedly has more than one proofreader!", path, idx + 1),
                );
            }
            task.proofreader = header::non_empty(&found[1]);
        }
    }

    task.plaintext = text;
    Some(task)
}

fn points(first_line: &str) -> Option<Points> {
    let found = POINTS.captures(first_line)?;
    Some(Points {
        description: found[1].parse().ok()?,
        program: found[2].parse().ok()?,
    })
}

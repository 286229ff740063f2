//! Reference solution parser
//!
//! The first line carries the title and a header naming the author and the
//! points, which must agree with the task:
//!
//! ```text
//! # Zlatá rybka {vzorak="Jana" bodypopis=4 bodyprogram=6}
//! ```

use std::path::Path;
use std::sync::LazyLock;

use log::Level;
use regex::Regex;

use super::header;
use crate::core::models::{Issue, Points, Solution};
use crate::core::ports::IssueLogger;

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\{vzorak="([^"]*)" bodypopis=([0-9]*) bodyprogram=([0-9]*)\}"#)
        .expect("valid solution header regex")
});

/// Read and parse the solution document at `path`
pub fn parse_solution(logger: &dyn IssueLogger, path: &Path) -> Option<Solution> {
    let text = header::read_document(logger, path)?;
    parse_solution_text(logger, path, text)
}

/// Parse solution document text that was read from `path`
pub fn parse_solution_text(
    logger: &dyn IssueLogger,
    path: &Path,
    text: String,
) -> Option<Solution> {
    let Some(number) = header::task_number(path) else {
        logger.log_issue(Level::Error, &Issue::new("File has no valid task number!", path));
        return None;
    };

    let mut solution = Solution {
        filename: path.to_path_buf(),
        number,
        ..Solution::default()
    };

    let first_line = text.lines().next().unwrap_or_default();

    solution.name = header::title(first_line);
    if solution.name.is_none() {
        logger.log_issue(Level::Warn, &Issue::new("Could not determine the task name!", path));
    }

    match author_and_points(first_line) {
        Some((author, points)) => {
            solution.author = header::non_empty(&author);
            solution.points = Some(points);
        },
        None => logger.log_issue(
            Level::Warn,
            &Issue::new("Could not determine the author and points of the solution!", path),
        ),
    }

    solution.bypass = text.lines().filter_map(header::skiptest).collect();
    solution.plaintext = text;
    Some(solution)
}

fn author_and_points(first_line: &str) -> Option<(String, Points)> {
    let found = HEADER.captures(first_line)?;
    let points = Points {
        description: found[2].parse().ok()?,
        program: found[3].parse().ok()?,
    };
    Some((found[1].to_string(), points))
}

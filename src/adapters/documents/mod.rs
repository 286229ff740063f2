//! Document loading
//!
//! Turns a contest directory layout into the item records rules check:
//!
//! ```text
//! tasks/prikl1.md ... prikl8.md          -> Task
//! solutions/prikl1.md ... prikl8.md      -> Solution
//! inputs/1/test/*.in, *.out ... inputs/8 -> InputBundle
//! ```
//!
//! Loading never fails on document content. Problems are reported as issues
//! and the affected document is left out or loaded with empty fields.

mod header;
mod inputs;
mod solution;
mod task;

use std::path::{Path, PathBuf};

use crate::core::models::{Solution, Task};
use crate::core::ports::IssueLogger;

pub use inputs::load_inputs;
pub use solution::parse_solution;
pub use task::parse_task;

/// Log scope for the task parser
pub const TASK_PARSER_SCOPE: &str = "checker.parser.task";
/// Log scope for the solution parser
pub const SOLUTION_PARSER_SCOPE: &str = "checker.parser.solution";
/// Log scope for the input loader
pub const INPUTS_PARSER_SCOPE: &str = "checker.parser.inputs";

/// Find documents in `dir` whose file name matches `pattern`, sorted by path
///
/// A missing directory is logged and yields nothing.
pub fn discover_documents(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, glob::PatternError> {
    if !dir.is_dir() {
        log::error!(target: "checker", "folder '{}' not found or not a folder!", dir.display());
        return Ok(Vec::new());
    }

    let full = format!("{}/{pattern}", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut found = Vec::new();
    for entry in glob::glob(&full)? {
        match entry {
            Ok(path) if path.is_file() => {
                log::debug!(target: "checker", "Reading file {}", path.display());
                found.push(path);
            },
            Ok(_) => {},
            Err(e) => log::warn!(target: "checker", "Cannot read {}: {e}", e.path().display()),
        }
    }
    found.sort();
    Ok(found)
}

/// Load every task document in `dir`
pub fn load_tasks(
    logger: &dyn IssueLogger,
    dir: &Path,
    pattern: &str,
) -> Result<Vec<Task>, glob::PatternError> {
    Ok(discover_documents(dir, pattern)?
        .iter()
        .filter_map(|path| parse_task(logger, path))
        .collect())
}

/// Load every solution document in `dir`
pub fn load_solutions(
    logger: &dyn IssueLogger,
    dir: &Path,
    pattern: &str,
) -> Result<Vec<Solution>, glob::PatternError> {
    Ok(discover_documents(dir, pattern)?
        .iter()
        .filter_map(|path| parse_solution(logger, path))
        .collect())
}

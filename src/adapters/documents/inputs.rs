//! Test input loader
//!
//! Inputs live in one directory per task number, each with a `test/`
//! subdirectory holding the `.in` / `.out` files:
//!
//! ```text
//! inputs/
//! ├── 1/test/00.in, 00.out, ...
//! ├── 2/test/...
//! ...
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use log::Level;
use walkdir::WalkDir;

use crate::core::models::{InputBundle, Issue};
use crate::core::ports::IssueLogger;

/// Subdirectory of each task directory that holds the test files
pub const TEST_DIR: &str = "test";

/// Load the input bundles of tasks `1..=task_count` from `dir`
///
/// Task directories that do not exist produce no bundle. A task directory
/// without a `test/` subdirectory produces an empty bundle.
pub fn load_inputs(logger: &dyn IssueLogger, dir: &Path, task_count: u32) -> Vec<InputBundle> {
    if !dir.is_dir() {
        log::error!(target: "checker", "folder '{}' not found or not a folder!", dir.display());
        return Vec::new();
    }

    let mut bundles = Vec::new();
    for task_number in 1..=task_count {
        let task_dir = dir.join(task_number.to_string());
        if !task_dir.is_dir() {
            logger.log_message(
                Level::Debug,
                &format!("No input folder for task {task_number} in {}", dir.display()),
            );
            continue;
        }

        let test_dir = task_dir.join(TEST_DIR);
        let mut files = BTreeMap::new();
        if test_dir.is_dir() {
            for entry in WalkDir::new(&test_dir).min_depth(1).max_depth(1).sort_by_file_name() {
                match entry {
                    Ok(entry) if entry.file_type().is_file() => {
                        let name = entry.file_name().to_string_lossy().to_string();
                        files.insert(name, entry.into_path());
                    },
                    Ok(_) => {},
                    Err(e) => logger.log_issue(
                        Level::Warn,
                        &Issue::new(format!("Cannot list input: {e}"), &test_dir),
                    ),
                }
            }
        }

        bundles.push(InputBundle {
            task_number,
            directory: test_dir,
            files,
            bypass: Vec::new(),
        });
    }
    bundles
}

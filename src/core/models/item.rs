//! Item records
//!
//! One record per parsed document (task, solution) or per task's test-input
//! directory. Records are produced by the parsers in `adapters` and are
//! read-only to rules.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::SharedData;

/// Points awarded for a task, as declared in the document header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Points {
    /// Points for the written description (`bodypopis`)
    pub description: u32,
    /// Points for the program (`bodyprogram`)
    pub program: u32,
}

impl Points {
    /// Total points for the task, `None` if the sum does not fit a `u32`
    #[must_use]
    pub const fn total(self) -> Option<u32> {
        self.description.checked_add(self.program)
    }
}

impl std::fmt::Display for Points {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bodypopis={} bodyprogram={}", self.description, self.program)
    }
}

/// A task statement document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Path of the document
    pub filename: PathBuf,
    /// Raw document text, line endings preserved
    pub plaintext: String,
    /// 1-based task number, taken from the file name
    pub number: u32,
    /// Task title
    pub name: Option<String>,
    /// Declared points
    pub points: Option<Points>,
    /// Author (`%by`)
    pub author: Option<String>,
    /// Proofreader (`%proofread`)
    pub proofreader: Option<String>,
    /// Rules that must skip this task (`%skiptest`)
    pub bypass: Vec<String>,
}

/// A reference solution document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Path of the document
    pub filename: PathBuf,
    /// Raw document text, line endings preserved
    pub plaintext: String,
    /// 1-based task number, taken from the file name
    pub number: u32,
    /// Solution title, expected to match the task title
    pub name: Option<String>,
    /// Declared points, expected to match the task
    pub points: Option<Points>,
    /// Author of the solution (`vzorak`)
    pub author: Option<String>,
    /// Rules that must skip this solution (`%skiptest`)
    pub bypass: Vec<String>,
}

/// The test inputs and expected outputs of one task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputBundle {
    /// 1-based task number
    pub task_number: u32,
    /// Directory the files were listed from
    pub directory: PathBuf,
    /// File name to full path, sorted by file name
    pub files: BTreeMap<String, PathBuf>,
    /// Rules that must skip this bundle
    pub bypass: Vec<String>,
}

/// A record in one of the item collections of [`SharedData`]
pub trait Item: Clone {
    /// The collection in `data`, in stored order (empty when absent)
    fn collection(data: &SharedData) -> &[Self];

    /// File or directory the item was read from
    fn source(&self) -> &Path;

    /// Names of rules that must skip this item
    fn bypass(&self) -> &[String];
}

impl Item for Task {
    fn collection(data: &SharedData) -> &[Self] {
        data.tasks.as_deref().unwrap_or_default()
    }

    fn source(&self) -> &Path {
        &self.filename
    }

    fn bypass(&self) -> &[String] {
        &self.bypass
    }
}

impl Item for Solution {
    fn collection(data: &SharedData) -> &[Self] {
        data.solutions.as_deref().unwrap_or_default()
    }

    fn source(&self) -> &Path {
        &self.filename
    }

    fn bypass(&self) -> &[String] {
        &self.bypass
    }
}

impl Item for InputBundle {
    fn collection(data: &SharedData) -> &[Self] {
        data.inputs.as_deref().unwrap_or_default()
    }

    fn source(&self) -> &Path {
        &self.directory
    }

    fn bypass(&self) -> &[String] {
        &self.bypass
    }
}

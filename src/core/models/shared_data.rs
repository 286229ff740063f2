//! Shared data snapshot
//!
//! The snapshot every rule inspects. Each rule run receives its own clone, so
//! nothing a rule does to its copy is visible to the next rule.

use std::path::PathBuf;

use super::{InputBundle, Solution, Task};

/// Keys a rule can require before it is allowed to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKey {
    /// Parsed task documents
    Tasks,
    /// Parsed solution documents
    Solutions,
    /// Test input bundles
    Inputs,
    /// Directory the tasks were read from
    TasksDir,
    /// Directory the solutions were read from
    SolutionsDir,
    /// Directory the inputs were read from
    InputsDir,
}

impl DataKey {
    /// The key as written in rule listings
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Solutions => "solutions",
            Self::Inputs => "inputs",
            Self::TasksDir => "path_to_tasks",
            Self::SolutionsDir => "path_to_solutions",
            Self::InputsDir => "path_to_inputs",
        }
    }
}

impl std::fmt::Display for DataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DataKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tasks" => Ok(Self::Tasks),
            "solutions" => Ok(Self::Solutions),
            "inputs" => Ok(Self::Inputs),
            "path_to_tasks" => Ok(Self::TasksDir),
            "path_to_solutions" => Ok(Self::SolutionsDir),
            "path_to_inputs" => Ok(Self::InputsDir),
            _ => Err(format!("Invalid data key: {s}")),
        }
    }
}

/// Everything the rules get to look at
///
/// `None` means the data was not supplied at all. Rules treat `None` and an
/// empty collection alike: as not available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedData {
    /// Directory passed as `--tasks`
    pub tasks_dir: Option<PathBuf>,
    /// Directory passed as `--solutions`
    pub solutions_dir: Option<PathBuf>,
    /// Directory passed as `--inputs`
    pub inputs_dir: Option<PathBuf>,
    /// Parsed tasks, in discovery order
    pub tasks: Option<Vec<Task>>,
    /// Parsed solutions, in discovery order
    pub solutions: Option<Vec<Solution>>,
    /// Input bundles, in task-number order
    pub inputs: Option<Vec<InputBundle>>,
}

impl SharedData {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tasks collection
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    /// Set the solutions collection
    #[must_use]
    pub fn with_solutions(mut self, solutions: Vec<Solution>) -> Self {
        self.solutions = Some(solutions);
        self
    }

    /// Set the inputs collection
    #[must_use]
    pub fn with_inputs(mut self, inputs: Vec<InputBundle>) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Whether `key` holds a present, non-empty value
    #[must_use]
    pub fn is_available(&self, key: DataKey) -> bool {
        match key {
            DataKey::Tasks => self.tasks.as_ref().is_some_and(|t| !t.is_empty()),
            DataKey::Solutions => self.solutions.as_ref().is_some_and(|s| !s.is_empty()),
            DataKey::Inputs => self.inputs.as_ref().is_some_and(|i| !i.is_empty()),
            DataKey::TasksDir => self.tasks_dir.is_some(),
            DataKey::SolutionsDir => self.solutions_dir.is_some(),
            DataKey::InputsDir => self.inputs_dir.is_some(),
        }
    }

    /// Whether no documents were supplied at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks_dir.is_none() && self.solutions_dir.is_none() && self.inputs_dir.is_none()
    }
}

//! Contest configuration
//!
//! The shape of a contest round: how many tasks it has, which letter each
//! task title must start with and how many points each task is worth.
//!
//! Lookup order:
//! 1. `--config <file>` (must exist)
//! 2. `.problint.toml` in the current directory
//! 3. `~/.config/problint/config.toml` (XDG standard)
//! 4. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Project configuration filename
pub const PROJECT_CONFIG: &str = ".problint.toml";

/// Errors loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values are inconsistent
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Contest round configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContestConfig {
    /// Number of tasks in a round
    pub task_count: u32,

    /// Letter every task title must start with, by task number
    pub first_letters: Vec<String>,

    /// Required description + program points, by task number
    pub points: Vec<u32>,

    /// File name pattern of task and solution documents
    pub document_glob: String,
}

impl Default for ContestConfig {
    fn default() -> Self {
        let mut first_letters = vec!["Z".to_string(); 4];
        first_letters.extend(vec!["O".to_string(); 4]);

        Self {
            task_count: 8,
            first_letters,
            points: vec![10, 10, 10, 15, 15, 20, 20, 20],
            document_glob: "prikl*.md".to_string(),
        }
    }
}

impl ContestConfig {
    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate the config file at `path`
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load using the lookup order: explicit file, project file, user file, defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        let project = PathBuf::from(PROJECT_CONFIG);
        if project.is_file() {
            log::debug!("Loading config from {}", project.display());
            return Self::from_file(&project);
        }

        if let Some(user) = user_config_path().filter(|p| p.is_file()) {
            log::debug!("Loading config from {}", user.display());
            return Self::from_file(&user);
        }

        Ok(Self::default())
    }

    /// Check that the per-task tables cover every task
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.task_count == 0 {
            return Err(ConfigError::Invalid("task_count must be at least 1".to_string()));
        }
        let expected = self.task_count as usize;
        if self.first_letters.len() != expected {
            return Err(ConfigError::Invalid(format!(
                "first_letters has {} entries, expected {expected}",
                self.first_letters.len()
            )));
        }
        if self.points.len() != expected {
            return Err(ConfigError::Invalid(format!(
                "points has {} entries, expected {expected}",
                self.points.len()
            )));
        }
        Ok(())
    }

    /// Task numbers of a full round
    pub fn task_numbers(&self) -> impl Iterator<Item = u32> {
        1..=self.task_count
    }

    /// Required title letter for task `number` (1-based)
    #[must_use]
    pub fn first_letter(&self, number: u32) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.first_letters.get(index).map(String::as_str)
    }

    /// Required point total for task `number` (1-based)
    #[must_use]
    pub fn expected_points(&self, number: u32) -> Option<u32> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        self.points.get(index).copied()
    }
}

/// `~/.config/problint/config.toml`, when a config dir exists
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("problint").join("config.toml"))
}

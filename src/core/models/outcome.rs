//! Rule outcomes
//!
//! [`TestResult`] is what a rule run settles into. [`RuleOutcome`] is what a
//! rule body hands back: either a plain pass/fail flag or an explicit result.

use serde::{Deserialize, Serialize};

/// The four-valued outcome of a single rule run
///
/// `Skip` means the rule declined to run because its input was missing,
/// not that it ran and found nothing wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    /// Rule ran and found no problem
    Ok,
    /// Rule did not run
    Skip,
    /// Rule found a problem that does not fail the run
    Warning,
    /// Rule found a problem that fails the run
    Error,
}

impl TestResult {
    /// All results, in tally order
    pub const ALL: [Self; 4] = [Self::Ok, Self::Skip, Self::Warning, Self::Error];

    /// Apply strict mode: `Warning` becomes `Error`, nothing else changes
    #[must_use]
    pub const fn promote(self, strict: bool) -> Self {
        match self {
            Self::Warning if strict => Self::Error,
            other => other,
        }
    }

    /// Whether a rule may declare this result as its failure severity
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }

    /// The log level a summary line for this result is emitted at
    #[must_use]
    pub const fn log_level(self) -> log::Level {
        match self {
            Self::Ok | Self::Skip => log::Level::Debug,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl std::fmt::Display for TestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Skip => write!(f, "SKIP"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl std::str::FromStr for TestResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(Self::Ok),
            "skip" => Ok(Self::Skip),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(format!("Invalid result: {s}. Use: ok, skip, warning, error")),
        }
    }
}

/// What a rule body returns
///
/// A `Bool(false)` is escalated to the rule's declared severity. An
/// `Explicit` result passes through untouched, which lets a body report a
/// different failure level or skip itself for reasons of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Plain pass/fail
    Bool(bool),
    /// A result chosen by the rule body
    Explicit(TestResult),
}

impl RuleOutcome {
    /// Coerce into a [`TestResult`], escalating failure to `severity`
    #[must_use]
    pub const fn resolve(self, severity: TestResult) -> TestResult {
        match self {
            Self::Bool(true) => TestResult::Ok,
            Self::Bool(false) => severity,
            Self::Explicit(result) => result,
        }
    }
}

impl From<bool> for RuleOutcome {
    fn from(passed: bool) -> Self {
        Self::Bool(passed)
    }
}

impl From<TestResult> for RuleOutcome {
    fn from(result: TestResult) -> Self {
        Self::Explicit(result)
    }
}

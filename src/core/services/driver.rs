//! Execution driver
//!
//! Runs a selection of rules one after another against a single snapshot.
//! Every rule gets a fresh clone of the snapshot and its own scoped logger.

use serde::Serialize;

use super::RegisteredRule;
use crate::core::models::{SharedData, TestResult};
use crate::core::ports::IssueLogger;

/// Log target prefix for per-rule loggers
pub const LOGGER_SCOPE: &str = "checker";

/// Scope name for the logger of the rule called `rule_name`
#[must_use]
pub fn rule_scope(rule_name: &str) -> String {
    format!("{LOGGER_SCOPE}.{rule_name}")
}

/// Count of rule runs per result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Rules that passed
    pub ok: usize,
    /// Rules that skipped themselves
    pub skip: usize,
    /// Rules that ended with a warning
    pub warning: usize,
    /// Rules that failed
    pub error: usize,
}

impl Tally {
    /// Count one more run ending in `result`
    pub fn record(&mut self, result: TestResult) {
        match result {
            TestResult::Ok => self.ok += 1,
            TestResult::Skip => self.skip += 1,
            TestResult::Warning => self.warning += 1,
            TestResult::Error => self.error += 1,
        }
    }

    /// Runs that ended in `result`
    #[must_use]
    pub const fn count(&self, result: TestResult) -> usize {
        match result {
            TestResult::Ok => self.ok,
            TestResult::Skip => self.skip,
            TestResult::Warning => self.warning,
            TestResult::Error => self.error,
        }
    }

    /// Total number of runs
    #[must_use]
    pub const fn total(&self) -> usize {
        self.ok + self.skip + self.warning + self.error
    }

    /// Whether any rule failed
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.error > 0
    }

    /// Process exit status: 1 on any error, 0 otherwise
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.failed() { 1 } else { 0 }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, result) in TestResult::ALL.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{result}: {}", self.count(*result))?;
        }
        Ok(())
    }
}

/// Outcome of one rule in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRun {
    /// Rule name
    pub name: String,
    /// Final result, after strict promotion
    pub result: TestResult,
}

/// Everything a run produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Per-rule results, in execution order
    pub runs: Vec<RuleRun>,
    /// Per-result counts
    pub tally: Tally,
}

/// Run `rules` in order against `data`
///
/// `make_logger` is called once per rule with the scope `checker.<name>`.
/// With `strict`, a `Warning` is tallied as `Error`.
pub fn execute_tests<'r, I, F, L>(
    rules: I,
    data: &SharedData,
    mut make_logger: F,
    strict: bool,
) -> RunReport
where
    I: IntoIterator<Item = &'r RegisteredRule>,
    F: FnMut(&str) -> L,
    L: IssueLogger,
{
    let mut report = RunReport::default();

    for rule in rules {
        log::debug!(target: LOGGER_SCOPE, "Running rule {}", rule.name());

        let mut snapshot = data.clone();
        let logger = make_logger(&rule_scope(rule.name()));
        let result = rule.run(&logger, &mut snapshot).promote(strict);

        report.tally.record(result);
        let verdict = match result {
            TestResult::Ok => "is ok.",
            TestResult::Skip => "skipped itself",
            TestResult::Warning => "finished with a warning!",
            TestResult::Error => "FAILED!",
        };
        log::log!(target: LOGGER_SCOPE, result.log_level(), "Rule {} {verdict}", rule.name());
        report.runs.push(RuleRun {
            name: rule.name().to_string(),
            result,
        });
    }

    report
}

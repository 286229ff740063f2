//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::adapters::logger::LoggedIssue;
use crate::core::models::{Issue, TestResult};
use crate::core::services::{RegisteredRule, RunReport, Tally, rule_scope};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// An issue with the severity it was reported at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueEntry {
    /// Severity, as the `log` level name (`ERROR`, `WARN`)
    pub severity: String,
    /// The issue itself
    #[serde(flatten)]
    pub issue: Issue,
}

impl From<&LoggedIssue> for IssueEntry {
    fn from(logged: &LoggedIssue) -> Self {
        Self {
            severity: logged.severity.clone(),
            issue: logged.issue.clone(),
        }
    }
}

/// Result of one rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleReport {
    /// Rule name
    pub name: String,
    /// Final result
    pub result: TestResult,
    /// Issues the rule reported (JSON mode only)
    pub issues: Vec<IssueEntry>,
}

/// Result of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    /// Whether no rule ended in ERROR
    pub passed: bool,
    /// Whether warnings were promoted to errors
    pub strict: bool,
    /// Per-result counts
    pub tally: Tally,
    /// Per-rule results, in execution order
    pub rules: Vec<RuleReport>,
    /// Issues found while loading documents (JSON mode only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<IssueEntry>,
}

impl CheckReport {
    /// Build the report for `run`, attaching recorded issues to their rules
    ///
    /// Issues are matched to rules by logger scope. Issues from any other
    /// scope are taken to come from document loading.
    #[must_use]
    pub fn new(run: &RunReport, strict: bool, recorded: &[LoggedIssue]) -> Self {
        let rules: Vec<RuleReport> = run
            .runs
            .iter()
            .map(|r| {
                let scope = rule_scope(&r.name);
                RuleReport {
                    name: r.name.clone(),
                    result: r.result,
                    issues: recorded
                        .iter()
                        .filter(|logged| logged.scope == scope)
                        .map(IssueEntry::from)
                        .collect(),
                }
            })
            .collect();

        let documents = recorded
            .iter()
            .filter(|logged| !run.runs.iter().any(|r| logged.scope == rule_scope(&r.name)))
            .map(IssueEntry::from)
            .collect();

        Self {
            passed: !run.tally.failed(),
            strict,
            tally: run.tally,
            rules,
            documents,
        }
    }

    /// Final verdict line
    #[must_use]
    pub const fn verdict(&self) -> &'static str {
        if self.tally.error > 0 {
            "FAILED"
        } else if self.tally.warning > 0 {
            "passed with warnings"
        } else {
            "passed"
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules selected.");
        }

        for rule in &self.rules {
            println!("  {} {}", colored_result(rule.result), rule.name);
        }

        println!("\n{}", self.tally);

        let verdict = self.verdict();
        if self.tally.error > 0 {
            println!("{}", verdict.red().bold());
        } else if self.tally.warning > 0 {
            println!("{}", verdict.yellow());
        } else {
            println!("{}", verdict.green());
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn colored_result(result: TestResult) -> colored::ColoredString {
    let label = format!("{:<8}", result.to_string());
    match result {
        TestResult::Ok => label.green(),
        TestResult::Skip => label.dimmed(),
        TestResult::Warning => label.yellow(),
        TestResult::Error => label.red().bold(),
    }
}

/// One entry of the rule catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    /// Rule name, as used by `--skip`, `--run-only` and `%skiptest`
    pub name: String,
    /// Result when the rule fails
    pub severity: TestResult,
    /// Data the rule needs
    pub requires: Vec<String>,
    /// One-line description
    pub summary: String,
    /// Longer description, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&RegisteredRule> for RuleInfo {
    fn from(rule: &RegisteredRule) -> Self {
        Self {
            name: rule.name().to_string(),
            severity: rule.severity(),
            requires: rule.requirements().iter().map(ToString::to_string).collect(),
            summary: rule.doc().summary.clone(),
            details: rule.doc().details.clone(),
        }
    }
}

/// Result of a rules listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleListing {
    /// Every registered rule, in registration order
    pub rules: Vec<RuleInfo>,
}

impl RuleListing {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        for rule in &self.rules {
            println!("{} [{}]", rule.name.bold(), rule.severity);
            if !rule.requires.is_empty() {
                println!("  requires: {}", rule.requires.join(", "));
            }
            if !rule.summary.is_empty() {
                println!("  {}", rule.summary);
            }
            if let Some(details) = &rule.details {
                println!("  {details}");
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

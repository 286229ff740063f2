//! Rule registry
//!
//! The ordered catalog of every rule problint knows. Registration wraps each
//! rule body with requirement gating and result coercion, so the bodies
//! themselves only have to look at data and report issues.

use log::Level;
use thiserror::Error;

use crate::core::models::{DataKey, Issue, RuleOutcome, SharedData, TestResult};
use crate::core::ports::IssueLogger;

/// Errors raised while building or querying the registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A rule with this name is already registered
    #[error("rule '{0}' is already registered")]
    DuplicateRule(String),

    /// No rule with this name exists
    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    /// Declared failure severity is not WARNING or ERROR
    #[error("rule '{rule}' declares {severity} as its failure severity (use WARNING or ERROR)")]
    InvalidSeverity {
        /// Rule name
        rule: String,
        /// The rejected severity
        severity: TestResult,
    },
}

/// What a rule body sees besides the data: its own name and where to log
pub struct RuleContext<'a> {
    name: &'a str,
    logger: &'a dyn IssueLogger,
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<'a> RuleContext<'a> {
    /// Create a context for the rule called `name`
    #[must_use]
    pub fn new(name: &'a str, logger: &'a dyn IssueLogger) -> Self {
        Self { name, logger }
    }

    /// Registered name of the running rule
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name
    }

    /// Report an issue at `level`
    pub fn issue(&self, level: Level, issue: Issue) {
        self.logger.log_issue(level, &issue);
    }

    /// Report an error-level issue
    pub fn error(&self, issue: Issue) {
        self.issue(Level::Error, issue);
    }

    /// Report a warning-level issue
    pub fn warning(&self, issue: Issue) {
        self.issue(Level::Warn, issue);
    }
}

impl IssueLogger for RuleContext<'_> {
    fn log_message(&self, level: Level, message: &str) {
        self.logger.log_message(level, message);
    }

    fn log_issue(&self, level: Level, issue: &Issue) {
        self.logger.log_issue(level, issue);
    }
}

/// Signature of a stored rule body
pub type RuleBody = dyn Fn(&RuleContext<'_>, &mut SharedData) -> RuleOutcome;

/// Rule description shown by `problint rules`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDoc {
    /// One-line description
    pub summary: String,
    /// Optional longer explanation
    pub details: Option<String>,
}

/// Everything about a rule except its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDef {
    name: String,
    doc: RuleDoc,
    severity: TestResult,
    require: Vec<DataKey>,
}

impl RuleDef {
    /// Start a definition for `name`, failing at `severity`
    pub fn new(name: impl Into<String>, severity: TestResult) -> Self {
        Self {
            name: name.into(),
            doc: RuleDoc::default(),
            severity,
            require: Vec::new(),
        }
    }

    /// Set the one-line description
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.doc.summary = summary.into();
        self
    }

    /// Set the long description
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.doc.details = Some(details.into());
        self
    }

    /// Require `key` to be available before the rule may run
    #[must_use]
    pub fn requires(mut self, key: DataKey) -> Self {
        self.require.push(key);
        self
    }
}

/// A rule as stored in the registry
pub struct RegisteredRule {
    def: RuleDef,
    body: Box<RuleBody>,
}

impl std::fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("name", &self.def.name)
            .field("severity", &self.def.severity)
            .field("require", &self.def.require)
            .finish_non_exhaustive()
    }
}

impl RegisteredRule {
    /// Unique rule name, also the literal used by `%skiptest` directives
    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    /// Rule description
    #[must_use]
    pub const fn doc(&self) -> &RuleDoc {
        &self.def.doc
    }

    /// Result a plain failure escalates to
    #[must_use]
    pub const fn severity(&self) -> TestResult {
        self.def.severity
    }

    /// Data keys that must be available for the rule to run
    #[must_use]
    pub fn requirements(&self) -> &[DataKey] {
        &self.def.require
    }

    /// Run the rule against `data`
    ///
    /// Returns `Skip` without calling the body when a required key is
    /// missing or empty. Otherwise the body's outcome is coerced with the
    /// declared severity.
    pub fn run(&self, logger: &dyn IssueLogger, data: &mut SharedData) -> TestResult {
        if let Some(missing) = self.def.require.iter().find(|key| !data.is_available(**key)) {
            logger.log_message(
                Level::Debug,
                &format!("Required data '{missing}' is not available, skipping"),
            );
            return TestResult::Skip;
        }

        let ctx = RuleContext::new(&self.def.name, logger);
        (self.body)(&ctx, data).resolve(self.def.severity)
    }
}

/// Which registered rules a run should execute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Every registered rule
    #[default]
    All,
    /// Every rule except these
    Skip(Vec<String>),
    /// Only these rules, in the given order
    Only(Vec<String>),
}

/// Ordered registry of rules, keyed by name
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RegisteredRule>,
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry").field("rules", &self.names()).finish()
    }
}

impl RuleRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule body under the definition's name
    ///
    /// The body may return `bool` or an explicit [`TestResult`].
    pub fn register<B, O>(&mut self, def: RuleDef, body: B) -> Result<(), RegistryError>
    where
        B: Fn(&RuleContext<'_>, &mut SharedData) -> O + 'static,
        O: Into<RuleOutcome>,
    {
        if !def.severity.is_failure() {
            return Err(RegistryError::InvalidSeverity {
                rule: def.name,
                severity: def.severity,
            });
        }
        if self.rules.iter().any(|rule| rule.def.name == def.name) {
            return Err(RegistryError::DuplicateRule(def.name));
        }

        log::trace!("Registering rule {}", def.name);
        self.rules.push(RegisteredRule {
            def,
            body: Box::new(move |ctx: &RuleContext<'_>, data: &mut SharedData| {
                body(ctx, data).into()
            }),
        });
        Ok(())
    }

    /// Look up a rule by name
    pub fn lookup(&self, name: &str) -> Result<&RegisteredRule, RegistryError> {
        self.rules
            .iter()
            .find(|rule| rule.name() == name)
            .ok_or_else(|| RegistryError::UnknownRule(name.to_string()))
    }

    /// All rules, in registration order
    #[must_use]
    pub fn all(&self) -> &[RegisteredRule] {
        &self.rules
    }

    /// Names of all rules, in registration order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(RegisteredRule::name).collect()
    }

    /// Get the number of registered rules
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve a selection into the rules to run
    ///
    /// Every name in the selection must be registered; a typo would otherwise
    /// silently run (or not run) the wrong rule.
    pub fn select(&self, selection: &Selection) -> Result<Vec<&RegisteredRule>, RegistryError> {
        match selection {
            Selection::All => Ok(self.rules.iter().collect()),
            Selection::Skip(names) => {
                for name in names {
                    self.lookup(name)?;
                }
                Ok(self
                    .rules
                    .iter()
                    .filter(|rule| !names.iter().any(|n| n == rule.name()))
                    .collect())
            },
            Selection::Only(names) => {
                let mut selected: Vec<&RegisteredRule> = Vec::with_capacity(names.len());
                for name in names {
                    let rule = self.lookup(name)?;
                    if !selected.iter().any(|r| r.name() == rule.name()) {
                        selected.push(rule);
                    }
                }
                Ok(selected)
            },
        }
    }
}

//! Rule engine services
//!
//! Pure orchestration logic that operates on domain models.
//! Nothing here touches the filesystem or prints; output goes through
//! the [`IssueLogger`](crate::core::ports::IssueLogger) port.
//!
//! - [`registry`] - Register rules, gate them on required data, coerce results
//! - [`for_each`] - Lift a per-item check to a whole collection
//! - [`driver`] - Run a selection of rules and tally the results

pub mod driver;
pub mod for_each;
pub mod registry;

pub use driver::{RuleRun, RunReport, Tally, execute_tests, rule_scope};
pub use for_each::for_each_item;
pub use registry::{
    RegisteredRule, RegistryError, RuleBody, RuleContext, RuleDef, RuleDoc, RuleRegistry, Selection,
};

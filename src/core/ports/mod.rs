//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the rule engine and the
//! systems it reports to.
//!
//! Implementations live in the `adapters` module.

mod issue_logger;

pub use issue_logger::IssueLogger;

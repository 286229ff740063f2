//! Built-in rules
//!
//! Every rule is registered into an explicit [`RuleRegistry`] by
//! [`register_all`]. Rule names are part of the document format: a
//! `%skiptest <name>` directive has to spell them exactly.
//!
//! - [`tasks`] - task statements
//! - [`solutions`] - reference solutions, and their agreement with tasks
//! - [`inputs`] - test input bundles

use std::rc::Rc;
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::config::ContestConfig;
use crate::core::services::{RegistryError, RuleRegistry};

pub mod inputs;
pub mod solutions;
pub mod tasks;

/// Whitespace that may not end a sample or input line
static TRAILING_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\r\f\v]+$").expect("valid trailing whitespace regex"));

/// Whether `line`, without its `\n`, ends with whitespace
fn ends_with_whitespace(line: &[u8]) -> bool {
    TRAILING_WHITESPACE.is_match(line.strip_suffix(b"\n").unwrap_or(line))
}

/// A registry holding every built-in rule
pub fn builtin(config: &ContestConfig) -> Result<RuleRegistry, RegistryError> {
    let mut registry = RuleRegistry::new();
    register_all(&mut registry, config)?;
    Ok(registry)
}

/// Register every built-in rule into `registry`
pub fn register_all(
    registry: &mut RuleRegistry,
    config: &ContestConfig,
) -> Result<(), RegistryError> {
    let config = Rc::new(config.clone());
    tasks::register(registry, &config)?;
    solutions::register(registry, &config)?;
    inputs::register(registry)?;
    log::debug!("Registered {} rules", registry.len());
    Ok(())
}

//! List the rule catalog

use std::path::Path;

use problint::config::ContestConfig;
use problint::output::{OutputMode, RuleInfo, RuleListing};

/// List every registered rule
pub fn rules(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = ContestConfig::load(config)?;
    let registry = problint::rules::builtin(&config)?;

    let listing = RuleListing {
        rules: registry.all().iter().map(RuleInfo::from).collect(),
    };
    listing.render(mode);
    Ok(())
}

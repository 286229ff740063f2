//! Per-item runner
//!
//! Turns a check written against one item into a rule body for the whole
//! collection. Each item in the collection is checked in stored order. A
//! failing item does not stop the loop, so every problem gets reported in
//! one run.

use log::Level;

use super::RuleContext;
use crate::core::models::{Item, SharedData};
use crate::core::ports::IssueLogger;

/// Build a rule body that applies `check` to every item of type `T`
///
/// When `bypassable` is set, items whose bypass list contains the running
/// rule's exact name are left out and do not count towards the result.
/// The body passes only if every item that was checked passed.
pub fn for_each_item<T, F>(
    bypassable: bool,
    check: F,
) -> impl Fn(&RuleContext<'_>, &mut SharedData) -> bool
where
    T: Item,
    F: Fn(&RuleContext<'_>, &T) -> bool,
{
    move |ctx: &RuleContext<'_>, data: &mut SharedData| {
        let mut success = true;
        for item in T::collection(data) {
            if bypassable && item.bypass().iter().any(|name| name == ctx.name()) {
                ctx.log_message(
                    Level::Debug,
                    &format!(
                        "Found skip directive in \"{}\", skipping rule {}",
                        item.source().display(),
                        ctx.name()
                    ),
                );
                continue;
            }
            if !check(ctx, item) {
                success = false;
            }
        }
        success
    }
}

//! Solution rules
//!
//! Solutions are checked on their own and against the task with the same
//! number. Cross-document checks only look at numbers present on both sides;
//! a missing counterpart is reported by `allTasksPresent` and
//! `allSolutionsPresent`.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::rc::Rc;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::ContestConfig;
use crate::core::models::{DataKey, Issue, Item, Points, SharedData, Solution, Task, TestResult};
use crate::core::services::{RegistryError, RuleContext, RuleDef, RuleRegistry, for_each_item};

static LISTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\\listing\{([^}]*)\}").expect("valid listing regex"));

/// Register the solution rules
pub fn register(
    registry: &mut RuleRegistry,
    config: &Rc<ContestConfig>,
) -> Result<(), RegistryError> {
    let cfg = Rc::clone(config);
    registry.register(
        RuleDef::new("allSolutionsPresent", TestResult::Warning)
            .summary("Checks that a solution exists for every task of the round.")
            .requires(DataKey::Solutions),
        move |ctx, data| all_solutions_present(ctx, data, &cfg),
    )?;

    registry.register(
        RuleDef::new("solutionComplete", TestResult::Error)
            .summary("Checks that each solution has a name and an author.")
            .requires(DataKey::Solutions),
        for_each_item::<Solution, _>(false, solution_complete),
    )?;

    registry.register(
        RuleDef::new("solutionMatchesTask", TestResult::Error)
            .summary("Checks that each solution has the same name and points as its task.")
            .requires(DataKey::Tasks)
            .requires(DataKey::Solutions),
        |ctx, data| solution_matches_task(ctx, data),
    )?;

    registry.register(
        RuleDef::new("solutionAllListingsExist", TestResult::Error)
            .summary("Checks that every \\listing in a solution points to an existing file.")
            .details("Listing paths are resolved relative to the solution document.")
            .requires(DataKey::Solutions),
        for_each_item::<Solution, _>(false, solution_listings_exist),
    )?;

    Ok(())
}

fn all_solutions_present(
    ctx: &RuleContext<'_>,
    data: &SharedData,
    config: &ContestConfig,
) -> bool {
    let directory = data.solutions_dir.clone().unwrap_or_default();
    let present: BTreeSet<u32> = Solution::collection(data).iter().map(|s| s.number).collect();

    let mut success = true;
    for number in config.task_numbers().filter(|n| !present.contains(n)) {
        ctx.warning(Issue::new(format!("Solution number {number} does not exist!"), &directory));
        success = false;
    }
    success
}

fn solution_complete(ctx: &RuleContext<'_>, solution: &Solution) -> bool {
    let mut success = true;
    if solution.name.is_none() {
        ctx.error(Issue::new("Solution has no name!", &solution.filename));
        success = false;
    }
    if solution.author.is_none() {
        ctx.error(Issue::new("Solution has no author!", &solution.filename));
        success = false;
    }
    success
}

fn describe_points(points: Option<Points>) -> String {
    points.map_or_else(|| "no points".to_string(), |p| p.to_string())
}

fn solution_matches_task(ctx: &RuleContext<'_>, data: &SharedData) -> bool {
    let tasks: BTreeMap<u32, &Task> = Task::collection(data).iter().map(|t| (t.number, t)).collect();
    let solutions: BTreeMap<u32, &Solution> =
        Solution::collection(data).iter().map(|s| (s.number, s)).collect();

    let mut success = true;
    for (number, solution) in &solutions {
        let Some(task) = tasks.get(number) else {
            continue;
        };

        if solution.name != task.name {
            ctx.error(Issue::new(
                format!(
                    "Solution name \"{}\" does not match task name \"{}\"!",
                    solution.name.as_deref().unwrap_or_default(),
                    task.name.as_deref().unwrap_or_default()
                ),
                &solution.filename,
            ));
            success = false;
        }

        if solution.points != task.points {
            ctx.error(Issue::new(
                format!(
                    "Solution points ({}) do not match task points ({})!",
                    describe_points(solution.points),
                    describe_points(task.points)
                ),
                &solution.filename,
            ));
            success = false;
        }
    }
    success
}

fn solution_listings_exist(ctx: &RuleContext<'_>, solution: &Solution) -> bool {
    let base = solution.filename.parent().unwrap_or_else(|| Path::new(""));

    let mut success = true;
    for (idx, line) in solution.plaintext.lines().enumerate() {
        let Some(caps) = LISTING.captures(line) else {
            continue;
        };
        let listing = &caps[1];
        if !base.join(listing).is_file() {
            ctx.error(Issue::at_line(
                format!("Listing {listing} does not exist!"),
                &solution.filename,
                idx + 1,
            ));
            success = false;
        }
    }
    success
}

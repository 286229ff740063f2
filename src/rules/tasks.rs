//! Task statement rules

use std::collections::BTreeSet;
use std::rc::Rc;

use log::Level;

use super::ends_with_whitespace;
use crate::config::ContestConfig;
use crate::core::models::{DataKey, Issue, Item, SharedData, Task, TestResult};
use crate::core::ports::IssueLogger;
use crate::core::services::{RegistryError, RuleContext, RuleDef, RuleRegistry, for_each_item};

/// Register the task rules
pub fn register(
    registry: &mut RuleRegistry,
    config: &Rc<ContestConfig>,
) -> Result<(), RegistryError> {
    let cfg = Rc::clone(config);
    registry.register(
        RuleDef::new("allTasksPresent", TestResult::Error)
            .summary("Checks that every task of the round exists.")
            .requires(DataKey::Tasks),
        move |ctx, data| all_tasks_present(ctx, data, &cfg),
    )?;

    registry.register(
        RuleDef::new("taskComplete", TestResult::Error)
            .summary("Checks that each task has a name and an author.")
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(false, task_complete),
    )?;

    registry.register(
        RuleDef::new("taskProofreaded", TestResult::Warning)
            .summary("Checks that each task has been proofread.")
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(true, task_proofreaded),
    )?;

    let cfg = Rc::clone(config);
    registry.register(
        RuleDef::new("taskFirstLetter", TestResult::Error)
            .summary("Checks the first letter of each task name.")
            .details(
                "Fails when a task name does not start with the letter configured for its \
                 number (Z for tasks 1-4 and O for tasks 5-8 by default).",
            )
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(true, move |ctx, task| task_first_letter(ctx, task, &cfg)),
    )?;

    let cfg = Rc::clone(config);
    registry.register(
        RuleDef::new("taskCorrectPoints", TestResult::Error)
            .summary("Checks the point total of each task.")
            .details(
                "Fails when description and program points do not add up to the total \
                 configured for the task number (10 for tasks 1-3, 15 for 4-5 and 20 for \
                 6-8 by default).",
            )
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(true, move |ctx, task| task_correct_points(ctx, task, &cfg)),
    )?;

    registry.register(
        RuleDef::new("taskSamplesEndWithUnixNewline", TestResult::Error)
            .summary("Checks that sample inputs and outputs use UNIX line endings.")
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(true, task_samples_unix_newlines),
    )?;

    registry.register(
        RuleDef::new("taskSamplesWhitespace", TestResult::Error)
            .summary("Checks that sample input and output lines do not end with whitespace.")
            .requires(DataKey::Tasks),
        for_each_item::<Task, _>(true, task_samples_whitespace),
    )?;

    Ok(())
}

fn display_name(task: &Task) -> &str {
    task.name.as_deref().unwrap_or("?")
}

fn all_tasks_present(ctx: &RuleContext<'_>, data: &SharedData, config: &ContestConfig) -> bool {
    let directory = data.tasks_dir.clone().unwrap_or_default();
    let mut success = true;
    let mut present = BTreeSet::new();

    for task in Task::collection(data) {
        if config.first_letter(task.number).is_none() {
            ctx.error(Issue::new(
                format!(
                    "Task number {} is outside the round (1-{})!",
                    task.number, config.task_count
                ),
                &task.filename,
            ));
            success = false;
        }
        present.insert(task.number);
    }

    for number in config.task_numbers() {
        if !present.contains(&number) {
            ctx.error(Issue::new(format!("Task number {number} does not exist!"), &directory));
            success = false;
        }
    }
    success
}

fn task_complete(ctx: &RuleContext<'_>, task: &Task) -> bool {
    let mut success = true;
    if task.name.is_none() {
        ctx.error(Issue::new("Task has no name!", &task.filename));
        success = false;
    }
    if task.author.is_none() {
        ctx.error(Issue::new("Task has no author!", &task.filename));
        success = false;
    }
    success
}

fn task_proofreaded(ctx: &RuleContext<'_>, task: &Task) -> bool {
    if task.proofreader.is_none() {
        ctx.warning(Issue::new("Task has not been proofread!", &task.filename));
        return false;
    }
    true
}

fn task_first_letter(ctx: &RuleContext<'_>, task: &Task, config: &ContestConfig) -> bool {
    let Some(letter) = config.first_letter(task.number) else {
        ctx.error(Issue::new(
            format!("No first letter is configured for task number {}!", task.number),
            &task.filename,
        ));
        return false;
    };
    let Some(name) = task.name.as_deref() else {
        ctx.log_message(Level::Debug, "Task has no name, nothing to check");
        return true;
    };

    if !name.starts_with(letter) {
        ctx.error(Issue::new(
            format!("Task \"{name}\" does not start with the right letter ({letter})!"),
            &task.filename,
        ));
        return false;
    }
    true
}

fn task_correct_points(ctx: &RuleContext<'_>, task: &Task, config: &ContestConfig) -> bool {
    let Some(expected) = config.expected_points(task.number) else {
        ctx.error(Issue::new(
            format!("No point total is configured for task number {}!", task.number),
            &task.filename,
        ));
        return false;
    };
    let Some(points) = task.points else {
        ctx.error(Issue::new(
            format!("Task \"{}\" declares no points!", display_name(task)),
            &task.filename,
        ));
        return false;
    };

    let Some(actual) = points.total() else {
        ctx.error(Issue::new(
            format!(
                "Task \"{}\" has a point total that is out of range ({points})!",
                display_name(task)
            ),
            &task.filename,
        ));
        return false;
    };
    if actual != expected {
        ctx.error(Issue::new(
            format!(
                "Task \"{}\" has the wrong number of points! It has {actual}, it should have \
                 {expected}.",
                display_name(task)
            ),
            &task.filename,
        ));
        return false;
    }
    true
}

/// Lines inside ```` ```vstup ```` / ```` ```vystup ```` blocks, 1-based, endings kept
fn sample_lines(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut inside = false;
    for (idx, line) in text.split_inclusive('\n').enumerate() {
        if line.starts_with("```vstup") || line.starts_with("```vystup") {
            inside = true;
        } else if line.starts_with("```") {
            inside = false;
        } else if inside {
            lines.push((idx + 1, line));
        }
    }
    lines
}

fn task_samples_unix_newlines(ctx: &RuleContext<'_>, task: &Task) -> bool {
    let mut success = true;
    for (line_no, line) in sample_lines(&task.plaintext) {
        if line.ends_with("\r\n") {
            ctx.error(Issue::at_line("Line has a Windows line ending!", &task.filename, line_no));
            success = false;
        }
    }
    success
}

fn task_samples_whitespace(ctx: &RuleContext<'_>, task: &Task) -> bool {
    let mut success = true;
    for (line_no, line) in sample_lines(&task.plaintext) {
        if ends_with_whitespace(line.as_bytes()) {
            ctx.error(Issue::at_line("Line ends with whitespace!", &task.filename, line_no));
            success = false;
        }
    }
    success
}

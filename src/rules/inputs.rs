//! Test input rules
//!
//! Input files are read as bytes; none of these checks assume the files are
//! valid UTF-8.

use std::fs;
use std::path::Path;

use super::ends_with_whitespace;
use crate::core::models::{DataKey, InputBundle, Issue, Item, SharedData, Task, TestResult};
use crate::core::services::{RegistryError, RuleContext, RuleDef, RuleRegistry, for_each_item};

/// Register the input rules
pub fn register(registry: &mut RuleRegistry) -> Result<(), RegistryError> {
    registry.register(
        RuleDef::new("taskHasInputs", TestResult::Warning)
            .summary("Checks that every task has test inputs.")
            .requires(DataKey::Tasks)
            .requires(DataKey::Inputs),
        |ctx, data| task_has_inputs(ctx, data),
    )?;

    registry.register(
        RuleDef::new("inputsHaveUnixNewlines", TestResult::Error)
            .summary("Checks that inputs and outputs use UNIX line endings.")
            .requires(DataKey::Inputs),
        for_each_item::<InputBundle, _>(false, inputs_unix_newlines),
    )?;

    registry.register(
        RuleDef::new("inputsNoTrailingWhitespace", TestResult::Warning)
            .summary("Checks that input and output lines do not end with whitespace.")
            .requires(DataKey::Inputs),
        for_each_item::<InputBundle, _>(false, inputs_no_trailing_whitespace),
    )?;

    registry.register(
        RuleDef::new("eachInputHasOutput", TestResult::Error)
            .summary("Checks that every .in file has a matching .out file.")
            .requires(DataKey::Inputs),
        for_each_item::<InputBundle, _>(false, each_input_has_output),
    )?;

    registry.register(
        RuleDef::new("inputHasNewlineAtEof", TestResult::Error)
            .summary("Checks that input and output files end with a newline.")
            .details("Empty files are accepted.")
            .requires(DataKey::Inputs),
        for_each_item::<InputBundle, _>(false, input_has_newline_at_eof),
    )?;

    Ok(())
}

fn task_has_inputs(ctx: &RuleContext<'_>, data: &SharedData) -> bool {
    let bundles = InputBundle::collection(data);

    let mut success = true;
    for task in Task::collection(data) {
        let has_inputs = bundles
            .iter()
            .any(|bundle| bundle.task_number == task.number && !bundle.files.is_empty());
        if !has_inputs {
            ctx.warning(Issue::new("Task has no inputs!", &task.filename));
            success = false;
        }
    }
    success
}

fn read_input(ctx: &RuleContext<'_>, path: &Path) -> Option<Vec<u8>> {
    match fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            ctx.error(Issue::new(format!("Cannot read file: {e}"), path));
            None
        },
    }
}

/// Lines with their terminators, 1-based
fn numbered_lines(bytes: &[u8]) -> impl Iterator<Item = (usize, &[u8])> {
    bytes.split_inclusive(|b| *b == b'\n').enumerate().map(|(idx, line)| (idx + 1, line))
}

fn inputs_unix_newlines(ctx: &RuleContext<'_>, bundle: &InputBundle) -> bool {
    let mut success = true;
    for path in bundle.files.values() {
        let Some(bytes) = read_input(ctx, path) else {
            success = false;
            continue;
        };
        // One issue per file is enough to point at the problem
        let crlf = numbered_lines(&bytes).find(|(_, line)| line.ends_with(b"\r\n"));
        if let Some((line_no, _)) = crlf {
            ctx.error(Issue::at_line("Input has a Windows line ending!", path, line_no));
            success = false;
        }
    }
    success
}

fn inputs_no_trailing_whitespace(ctx: &RuleContext<'_>, bundle: &InputBundle) -> bool {
    let mut success = true;
    for path in bundle.files.values() {
        let Some(bytes) = read_input(ctx, path) else {
            success = false;
            continue;
        };
        for (line_no, line) in numbered_lines(&bytes) {
            let content = line.strip_suffix(b"\r\n").unwrap_or(line);
            if ends_with_whitespace(content) {
                ctx.warning(Issue::at_line("Line ends with whitespace!", path, line_no));
                success = false;
            }
        }
    }
    success
}

fn each_input_has_output(ctx: &RuleContext<'_>, bundle: &InputBundle) -> bool {
    let mut success = true;
    for (name, path) in &bundle.files {
        let Some(stem) = name.strip_suffix(".in") else {
            continue;
        };
        if !bundle.files.contains_key(&format!("{stem}.out")) {
            ctx.error(Issue::new("Input has no output!", path));
            success = false;
        }
    }
    success
}

fn input_has_newline_at_eof(ctx: &RuleContext<'_>, bundle: &InputBundle) -> bool {
    let mut success = true;
    for path in bundle.files.values() {
        let Some(bytes) = read_input(ctx, path) else {
            success = false;
            continue;
        };
        if !bytes.is_empty() && !bytes.ends_with(b"\n") {
            let last_line = numbered_lines(&bytes).count();
            ctx.error(Issue::at_line("File does not end with a newline!", path, last_line));
            success = false;
        }
    }
    success
}

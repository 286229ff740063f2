//! Tests for the built-in rules
//!
//! Each test starts from a round on which every rule passes, breaks one
//! thing on disk and checks which rule notices.

use std::fs;

use problint::config::ContestConfig;
use problint::core::models::{Issue, TestResult};
use problint::core::services::RuleRegistry;
use test_case::test_case;

use crate::common::{Contest, run_rule, solution_doc, task_doc};

fn builtin() -> RuleRegistry {
    problint::rules::builtin(&ContestConfig::default()).unwrap()
}

fn check(contest: &Contest, rule: &str) -> (TestResult, Vec<Issue>) {
    run_rule(&builtin(), rule, &contest.load())
}

// =============================================================================
// Valid Round
// =============================================================================

#[test]
fn valid_round_passes_every_rule() {
    let contest = Contest::valid();
    let registry = builtin();
    let data = contest.load();

    for name in registry.names() {
        let (result, issues) = run_rule(&registry, name, &data);
        assert_eq!(result, TestResult::Ok, "{name} reported {issues:?}");
        assert!(issues.is_empty(), "{name} reported {issues:?}");
    }
}

#[test_case("allTasksPresent" ; "tasks")]
#[test_case("allSolutionsPresent" ; "solutions")]
#[test_case("taskHasInputs" ; "inputs")]
fn empty_round_skips_collection_rules(rule: &str) {
    let contest = Contest::empty();
    let (result, issues) = check(&contest, rule);
    assert_eq!(result, TestResult::Skip);
    assert!(issues.is_empty());
}

// =============================================================================
// Task Rules
// =============================================================================

#[test]
fn missing_task_is_reported_by_number() {
    let contest = Contest::valid();
    fs::remove_file(contest.tasks().join("prikl3.md")).unwrap();

    let (result, issues) = check(&contest, "allTasksPresent");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "Task number 3 does not exist!");
}

#[test]
fn task_outside_round_is_an_error() {
    let contest = Contest::valid();
    contest.add_task(9, &task_doc("Zvonka", 5, 5));

    let (result, issues) = check(&contest, "allTasksPresent");
    assert_eq!(result, TestResult::Error);
    assert!(issues[0].message.contains("outside the round"));

    let (result, _) = check(&contest, "taskFirstLetter");
    assert_eq!(result, TestResult::Error);
    let (result, _) = check(&contest, "taskCorrectPoints");
    assert_eq!(result, TestResult::Error);
}

#[test]
fn task_without_author_is_incomplete() {
    let contest = Contest::valid();
    contest.add_task(2, &task_doc("Zebra", 5, 5).replace("%by Autor\n", ""));

    let (result, issues) = check(&contest, "taskComplete");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues, vec![Issue::new("Task has no author!", contest.tasks().join("prikl2.md"))]);
}

#[test]
fn blank_author_and_proofreader_count_as_missing() {
    let contest = Contest::valid();
    let doc = task_doc("Zajac", 5, 5)
        .replace("%by Autor\n", "%by \n")
        .replace("%proofread Korektor\n", "%proofread \n");
    contest.add_task(1, &doc);

    let (result, issues) = check(&contest, "taskComplete");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues, vec![Issue::new("Task has no author!", contest.tasks().join("prikl1.md"))]);

    let (result, issues) = check(&contest, "taskProofreaded");
    assert_eq!(result, TestResult::Warning);
    assert_eq!(issues.len(), 1);
}

#[test]
fn unproofread_task_is_a_warning() {
    let contest = Contest::valid();
    contest.add_task(1, &task_doc("Zajac", 5, 5).replace("%proofread Korektor\n", ""));

    let (result, issues) = check(&contest, "taskProofreaded");
    assert_eq!(result, TestResult::Warning);
    assert_eq!(issues.len(), 1);
}

#[test]
fn skiptest_directive_bypasses_proofreading() {
    let contest = Contest::valid();
    contest.add_task(
        1,
        &task_doc("Zajac", 5, 5).replace("%proofread Korektor\n", "%skiptest taskProofreaded\n"),
    );

    let (result, issues) = check(&contest, "taskProofreaded");
    assert_eq!(result, TestResult::Ok);
    assert!(issues.is_empty());
}

#[test]
fn wrong_first_letter_names_the_expected_letter() {
    let contest = Contest::valid();
    contest.add_task(5, &task_doc("Zebra", 7, 8));

    let (result, issues) = check(&contest, "taskFirstLetter");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues[0].message, "Task \"Zebra\" does not start with the right letter (O)!");
}

#[test]
fn skiptest_directive_only_bypasses_the_named_rule() {
    let contest = Contest::valid();
    let doc = task_doc("Zebra", 7, 8).replace("%by Autor\n", "%by Autor\n%skiptest taskFirstLetter\n");
    contest.add_task(5, &doc);

    let (result, _) = check(&contest, "taskFirstLetter");
    assert_eq!(result, TestResult::Ok);
    let (result, _) = check(&contest, "taskCorrectPoints");
    assert_eq!(result, TestResult::Ok);
}

#[test]
fn wrong_point_total_is_an_error() {
    let contest = Contest::valid();
    contest.add_task(4, &task_doc("Zub", 5, 5));

    let (result, issues) = check(&contest, "taskCorrectPoints");
    assert_eq!(result, TestResult::Error);
    assert_eq!(
        issues[0].message,
        "Task \"Zub\" has the wrong number of points! It has 10, it should have 15."
    );
}

#[test]
fn crlf_in_sample_is_reported_with_line() {
    let contest = Contest::valid();
    contest.add_task(1, &task_doc("Zajac", 5, 5).replace("1 2\n", "1 2\r\n"));

    let (result, issues) = check(&contest, "taskSamplesEndWithUnixNewline");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, Some(8));
}

#[test]
fn trailing_whitespace_in_sample_is_reported_with_line() {
    let contest = Contest::valid();
    contest.add_task(1, &task_doc("Zajac", 5, 5).replace("3\n", "3\t\n"));

    let (result, issues) = check(&contest, "taskSamplesWhitespace");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, Some(12));
}

#[test]
fn trailing_whitespace_outside_samples_is_ignored() {
    let contest = Contest::valid();
    contest.add_task(1, &task_doc("Zajac", 5, 5).replace("Statement.\n", "Statement. \n"));

    let (result, _) = check(&contest, "taskSamplesWhitespace");
    assert_eq!(result, TestResult::Ok);
}

// =============================================================================
// Solution Rules
// =============================================================================

#[test]
fn missing_solution_is_a_warning() {
    let contest = Contest::valid();
    fs::remove_file(contest.solutions().join("prikl8.md")).unwrap();

    let (result, issues) = check(&contest, "allSolutionsPresent");
    assert_eq!(result, TestResult::Warning);
    assert_eq!(issues[0].message, "Solution number 8 does not exist!");
}

#[test]
fn solution_with_empty_author_is_incomplete() {
    let contest = Contest::valid();
    contest.add_solution(1, &solution_doc("Zajac", 5, 5).replace("Riesitel", ""));

    let (result, issues) = check(&contest, "solutionComplete");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues[0].message, "Solution has no author!");
}

#[test_case("Zajko", 5, 5, 1 ; "different name")]
#[test_case("Zajac", 4, 6, 1 ; "different points")]
#[test_case("Zajko", 4, 6, 2 ; "both differ")]
fn solution_must_match_task(name: &str, description: u32, program: u32, expected: usize) {
    let contest = Contest::valid();
    contest.add_solution(1, &solution_doc(name, description, program));

    let (result, issues) = check(&contest, "solutionMatchesTask");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), expected);
    assert!(issues.iter().all(|i| i.file == contest.solutions().join("prikl1.md")));
}

#[test]
fn missing_listing_is_reported_with_line() {
    let contest = Contest::valid();
    let doc = format!("{}\\listing{{riesenie.cpp}}\n", solution_doc("Zajac", 5, 5));
    contest.add_solution(1, &doc);

    let (result, issues) = check(&contest, "solutionAllListingsExist");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues[0].message, "Listing riesenie.cpp does not exist!");
    assert_eq!(issues[0].line, Some(4));

    contest.add_solution_file("riesenie.cpp", "int main() {}\n");
    let (result, _) = check(&contest, "solutionAllListingsExist");
    assert_eq!(result, TestResult::Ok);
}

// =============================================================================
// Input Rules
// =============================================================================

#[test]
fn task_without_inputs_is_a_warning() {
    let contest = Contest::valid();
    contest.remove_input(4, "00.in");
    contest.remove_input(4, "00.out");

    let (result, issues) = check(&contest, "taskHasInputs");
    assert_eq!(result, TestResult::Warning);
    assert_eq!(issues, vec![Issue::new("Task has no inputs!", contest.tasks().join("prikl4.md"))]);
}

#[test]
fn task_without_input_directory_is_a_warning() {
    let contest = Contest::valid();
    fs::remove_dir_all(contest.inputs().join("6")).unwrap();

    let (result, issues) = check(&contest, "taskHasInputs");
    assert_eq!(result, TestResult::Warning);
    assert_eq!(issues.len(), 1);
}

#[test]
fn crlf_in_input_is_reported_once_per_file() {
    let contest = Contest::valid();
    contest.add_input(2, "00.in", "1\r\n2\r\n");

    let (result, issues) = check(&contest, "inputsHaveUnixNewlines");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, Some(1));
}

#[test_case("1 2 \n", true ; "space before newline")]
#[test_case("1 2\t\n", true ; "tab before newline")]
#[test_case("1 2\x0b\n", true ; "vertical tab before newline")]
#[test_case("1 2\r\n", false ; "windows line ending alone")]
#[test_case("1 2\n\n", false ; "blank line")]
#[test_case("1 2\n", false ; "clean")]
fn trailing_whitespace_in_input(content: &str, flagged: bool) {
    let contest = Contest::valid();
    contest.add_input(3, "00.in", content);

    let (result, issues) = check(&contest, "inputsNoTrailingWhitespace");
    if flagged {
        assert_eq!(result, TestResult::Warning);
        assert_eq!(issues.len(), 1);
    } else {
        assert_eq!(result, TestResult::Ok);
    }
}

#[test]
fn every_input_needs_an_output() {
    let contest = Contest::valid();
    contest.add_input(1, "01.in", "5\n");
    contest.add_input(2, "01.in", "5\n");

    let (result, issues) = check(&contest, "eachInputHasOutput");
    assert_eq!(result, TestResult::Error);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| i.message == "Input has no output!"));
}

#[test]
fn output_without_input_is_fine() {
    let contest = Contest::valid();
    contest.add_input(1, "extra.out", "5\n");

    let (result, _) = check(&contest, "eachInputHasOutput");
    assert_eq!(result, TestResult::Ok);
}

#[test_case("1 2", Some(1) ; "single line")]
#[test_case("1\n2", Some(2) ; "second line")]
#[test_case("", None ; "empty file")]
#[test_case("1\n", None ; "terminated")]
fn input_must_end_with_newline(content: &str, line: Option<usize>) {
    let contest = Contest::valid();
    contest.add_input(7, "00.out", content);

    let (result, issues) = check(&contest, "inputHasNewlineAtEof");
    match line {
        Some(line) => {
            assert_eq!(result, TestResult::Error);
            assert_eq!(issues[0].line, Some(line));
        },
        None => assert_eq!(result, TestResult::Ok),
    }
}

//! Tests for the rule registry
//!
//! The registry gates rules on required data, coerces boolean outcomes to
//! the declared severity and resolves rule selections.

use problint::adapters::logger::IssueRecorder;
use problint::core::models::{DataKey, SharedData, Task, TestResult};
use problint::core::services::{RegistryError, RuleDef, RuleRegistry, Selection};
use test_case::test_case;

fn tasks() -> SharedData {
    SharedData::new().with_tasks(vec![Task {
        number: 1,
        ..Task::default()
    }])
}

fn run(registry: &RuleRegistry, name: &str, data: &SharedData) -> TestResult {
    let recorder = IssueRecorder::new();
    let logger = recorder.scoped(name);
    registry.lookup(name).unwrap().run(&logger, &mut data.clone())
}

fn abc() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for name in ["a", "b", "c"] {
        registry.register(RuleDef::new(name, TestResult::Error), |_, _| true).unwrap();
    }
    registry
}

// =============================================================================
// Outcome Coercion Tests
// =============================================================================

#[test_case(TestResult::Error, true, TestResult::Ok ; "error rule passing")]
#[test_case(TestResult::Error, false, TestResult::Error ; "error rule failing")]
#[test_case(TestResult::Warning, true, TestResult::Ok ; "warning rule passing")]
#[test_case(TestResult::Warning, false, TestResult::Warning ; "warning rule failing")]
fn bool_outcome_uses_declared_severity(severity: TestResult, outcome: bool, expected: TestResult) {
    let mut registry = RuleRegistry::new();
    registry.register(RuleDef::new("rule", severity), move |_, _| outcome).unwrap();
    assert_eq!(run(&registry, "rule", &tasks()), expected);
}

#[test_case(TestResult::Ok ; "ok")]
#[test_case(TestResult::Skip ; "skip")]
#[test_case(TestResult::Warning ; "warning")]
#[test_case(TestResult::Error ; "error")]
fn explicit_result_passes_through(explicit: TestResult) {
    let mut registry = RuleRegistry::new();
    registry.register(RuleDef::new("rule", TestResult::Error), move |_, _| explicit).unwrap();
    assert_eq!(run(&registry, "rule", &tasks()), explicit);
}

// =============================================================================
// Requirement Gating Tests
// =============================================================================

#[test]
fn missing_requirement_skips_without_calling_body() {
    let mut registry = RuleRegistry::new();
    registry
        .register(RuleDef::new("rule", TestResult::Error).requires(DataKey::Tasks), |_, _| -> bool {
            panic!("body must not run")
        })
        .unwrap();

    assert_eq!(run(&registry, "rule", &SharedData::new()), TestResult::Skip);
    assert_eq!(
        run(&registry, "rule", &SharedData::new().with_tasks(Vec::new())),
        TestResult::Skip
    );
}

#[test]
fn every_requirement_must_be_available() {
    let mut registry = RuleRegistry::new();
    registry
        .register(
            RuleDef::new("rule", TestResult::Error)
                .requires(DataKey::Tasks)
                .requires(DataKey::Solutions),
            |_, _| true,
        )
        .unwrap();

    assert_eq!(run(&registry, "rule", &tasks()), TestResult::Skip);
}

#[test]
fn rule_without_requirements_always_runs() {
    let mut registry = RuleRegistry::new();
    registry.register(RuleDef::new("rule", TestResult::Error), |_, _| false).unwrap();
    assert_eq!(run(&registry, "rule", &SharedData::new()), TestResult::Error);
}

// =============================================================================
// Registration Tests
// =============================================================================

#[test]
fn duplicate_name_is_rejected() {
    let mut registry = abc();
    let err = registry.register(RuleDef::new("b", TestResult::Warning), |_, _| true).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateRule("b".to_string()));
    assert_eq!(registry.len(), 3);
}

#[test_case(TestResult::Ok ; "ok")]
#[test_case(TestResult::Skip ; "skip")]
fn non_failure_severity_is_rejected(severity: TestResult) {
    let mut registry = RuleRegistry::new();
    let err = registry.register(RuleDef::new("rule", severity), |_, _| true).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidSeverity { .. }));
    assert!(registry.is_empty());
}

#[test]
fn rules_keep_registration_order() {
    assert_eq!(abc().names(), vec!["a", "b", "c"]);
}

// =============================================================================
// Selection Tests
// =============================================================================

#[test_case(Selection::All, &["a", "b", "c"] ; "all")]
#[test_case(Selection::Skip(vec!["b".into()]), &["a", "c"] ; "skip one")]
#[test_case(Selection::Skip(vec![]), &["a", "b", "c"] ; "skip none")]
#[test_case(Selection::Only(vec!["c".into(), "a".into()]), &["c", "a"] ; "only keeps requested order")]
#[test_case(Selection::Only(vec!["a".into(), "a".into()]), &["a"] ; "only dedups")]
fn selection_resolves(selection: Selection, expected: &[&str]) {
    let registry = abc();
    let names: Vec<&str> = registry.select(&selection).unwrap().iter().map(|r| r.name()).collect();
    assert_eq!(names, expected);
}

#[test_case(Selection::Skip(vec!["nope".into()]) ; "skip")]
#[test_case(Selection::Only(vec!["a".into(), "nope".into()]) ; "only")]
fn unknown_name_in_selection_is_an_error(selection: Selection) {
    let err = abc().select(&selection).unwrap_err();
    assert_eq!(err, RegistryError::UnknownRule("nope".to_string()));
}

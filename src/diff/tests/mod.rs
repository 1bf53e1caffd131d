//! Tests for the diff engine and step grouping.

use crate::catalog::{CatalogSnapshot, FeatureFile, StepKind};
use crate::registry::CollectedTest;
use crate::test_support::{FeatureFixture, StubTest, build_catalog, given, step, then, when};

use super::{compute_missing, group_steps};

const PUBLISH: &str = "features/publish.feature";

fn publishing_catalog() -> Vec<FeatureFile> {
    build_catalog(vec![
        FeatureFixture::new(PUBLISH)
            .named("Publishing")
            .background(vec![given("a logged in author")])
            .scenario(
                "Publish a draft",
                vec![
                    given("a draft article"),
                    when("I publish the article"),
                    then("the article is live"),
                ],
            )
            .scenario(
                "Reject an empty draft",
                vec![
                    given("an empty draft"),
                    when("I publish the article"),
                    then("I see a validation error"),
                ],
            ),
    ])
}

fn as_items<'a>(tests: &'a [StubTest]) -> Vec<&'a dyn CollectedTest> {
    tests.iter().map(|test| test as &dyn CollectedTest).collect()
}

#[test]
fn empty_collection_reports_all_scenarios_and_background_steps() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);

    let coverage = compute_missing(&snapshot, &[]);

    let scenario_names: Vec<&str> = coverage
        .unbound_scenarios()
        .iter()
        .map(|sref| sref.scenario().name())
        .collect();
    assert_eq!(scenario_names, vec!["Publish a draft", "Reject an empty draft"]);

    // Unbound scenarios generate their own step stubs alongside the
    // scenario stub, so only the shared background step stays reported.
    let step_names: Vec<&str> = coverage
        .undefined_steps()
        .iter()
        .map(|candidate| candidate.name())
        .collect();
    assert_eq!(step_names, vec!["a logged in author"]);
    assert!(!coverage.is_empty());
}

#[test]
fn fully_covered_catalog_reports_nothing() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let all_steps = [
        "a logged in author",
        "a draft article",
        "I publish the article",
        "the article is live",
        "an empty draft",
        "I see a validation error",
    ];
    let tests = vec![
        StubTest::bound(PUBLISH, "Publish a draft").resolving(all_steps),
        StubTest::bound(PUBLISH, "Reject an empty draft").resolving(all_steps),
    ];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    assert!(coverage.unbound_scenarios().is_empty());
    assert!(coverage.undefined_steps().is_empty());
    assert!(coverage.is_empty());
}

#[test]
fn bound_scenario_with_an_unresolved_step_reports_that_step() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![
        StubTest::bound(PUBLISH, "Publish a draft").resolving([
            "a logged in author",
            "a draft article",
            "the article is live",
        ]),
    ];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    let step_names: Vec<&str> = coverage
        .undefined_steps()
        .iter()
        .map(|candidate| candidate.name())
        .collect();
    // "I publish the article" never resolved for the bound scenario; the
    // unbound scenario's own steps stay suppressed.
    assert_eq!(step_names, vec!["I publish the article"]);

    let scenario_names: Vec<&str> = coverage
        .unbound_scenarios()
        .iter()
        .map(|sref| sref.scenario().name())
        .collect();
    assert_eq!(scenario_names, vec!["Reject an empty draft"]);
}

#[test]
fn background_steps_stay_reported_while_any_binding_leaves_them_unresolved() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![
        StubTest::bound(PUBLISH, "Publish a draft").resolving([
            "a draft article",
            "I publish the article",
            "the article is live",
        ]),
    ];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    let step_names: Vec<&str> = coverage
        .undefined_steps()
        .iter()
        .map(|candidate| candidate.name())
        .collect();
    assert_eq!(step_names, vec!["a logged in author"]);
}

#[test]
fn bindings_outside_the_catalog_are_tolerated() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![StubTest::bound("features/other.feature", "Elsewhere")];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    assert_eq!(coverage.unbound_scenarios().len(), 2);
}

#[test]
fn repeated_bindings_to_one_scenario_are_tolerated() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![
        StubTest::bound(PUBLISH, "Publish a draft"),
        StubTest::bound(PUBLISH, "Publish a draft"),
    ];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    assert_eq!(coverage.unbound_scenarios().len(), 1);
}

#[test]
fn unannotated_items_do_not_affect_the_diff() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![StubTest::unbound().resolving(["a logged in author"])];

    let coverage = compute_missing(&snapshot, &as_items(&tests));

    assert_eq!(coverage.unbound_scenarios().len(), 2);
    assert_eq!(coverage.undefined_steps().len(), 1);
}

#[test]
fn diffing_twice_over_the_same_inputs_is_idempotent() {
    let features = publishing_catalog();
    let snapshot = CatalogSnapshot::from_features(&features);
    let tests = vec![StubTest::bound(PUBLISH, "Publish a draft").resolving(["a draft article"])];
    let items = as_items(&tests);

    let first = compute_missing(&snapshot, &items);
    let second = compute_missing(&snapshot, &items);

    let names =
        |coverage: &super::MissingCoverage<'_>| -> (Vec<String>, Vec<String>) {
            (
                coverage
                    .unbound_scenarios()
                    .iter()
                    .map(|sref| sref.scenario().name().to_owned())
                    .collect(),
                coverage
                    .undefined_steps()
                    .iter()
                    .map(|candidate| candidate.name().to_owned())
                    .collect(),
            )
        };
    assert_eq!(names(&first), names(&second));
}

fn grouping_fixture() -> Vec<FeatureFile> {
    build_catalog(vec![
        FeatureFixture::new("features/grouping.feature")
            .named("Grouping")
            .scenario(
                "first",
                vec![
                    then("a result appears"),
                    when("zz action runs"),
                    given("z precondition"),
                ],
            )
            .scenario(
                "second",
                vec![given("a precondition"), given("z precondition")],
            ),
    ])
}

#[test]
fn grouping_orders_by_kind_rank_then_name() {
    let features = grouping_fixture();
    let snapshot = CatalogSnapshot::from_features(&features);

    let grouped = group_steps(snapshot.steps());

    let ordered: Vec<(StepKind, &str)> = grouped
        .iter()
        .map(|candidate| (candidate.kind(), candidate.name()))
        .collect();
    assert_eq!(
        ordered,
        vec![
            (StepKind::Given, "a precondition"),
            (StepKind::Given, "z precondition"),
            (StepKind::When, "zz action runs"),
            (StepKind::Then, "a result appears"),
        ]
    );
}

#[test]
fn grouping_deduplicates_step_text_across_scenarios() {
    let features = grouping_fixture();
    let snapshot = CatalogSnapshot::from_features(&features);

    let grouped = group_steps(snapshot.steps());

    let occurrences = grouped
        .iter()
        .filter(|candidate| candidate.name() == "z precondition")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn grouping_keeps_the_lowest_ranked_kind_for_duplicate_text() {
    let features = build_catalog(vec![
        FeatureFixture::new("features/kinds.feature")
            .named("Kinds")
            .scenario(
                "mixed",
                vec![
                    step(StepKind::Then, "the system is ready"),
                    step(StepKind::Given, "the system is ready"),
                ],
            ),
    ]);
    let snapshot = CatalogSnapshot::from_features(&features);

    let grouped = group_steps(snapshot.steps());

    assert_eq!(grouped.len(), 1);
    let survivor = grouped.first().expect("one grouped step");
    assert_eq!(survivor.kind(), StepKind::Given);
}

#[test]
fn grouping_is_idempotent() {
    let features = grouping_fixture();
    let snapshot = CatalogSnapshot::from_features(&features);

    let once = group_steps(snapshot.steps());
    let twice = group_steps(&once);

    let names = |steps: &[&crate::catalog::PlannedStep]| -> Vec<String> {
        steps
            .iter()
            .map(|candidate| candidate.name().to_owned())
            .collect()
    };
    assert_eq!(names(&once), names(&twice));
}

#[test]
fn grouping_never_repeats_a_name() {
    let features = grouping_fixture();
    let snapshot = CatalogSnapshot::from_features(&features);

    let grouped = group_steps(snapshot.steps());

    let mut names: Vec<&str> = grouped.iter().map(|candidate| candidate.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), grouped.len());
}

//! Missing-coverage reporting: the end-to-end driver and its output format.
//!
//! The driver parses the configured feature paths, diffs them against the
//! collected tests, and writes the report — one alert line per unbound
//! scenario, one per grouped undefined step, then a generated code block —
//! to an injected writer. Styling is injected alongside the writer; there
//! is no process-wide output state.

mod render;

pub use render::render_scaffold;

use std::collections::HashSet;
use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use crossterm::style::Stylize;

use crate::catalog::{
    CatalogSnapshot, FeatureFile, PlannedStep, ScenarioRef, StepOrigin, collect_features,
};
use crate::diff::{MissingCoverage, compute_missing, group_steps};
use crate::error::CoverageError;
use crate::registry::CollectedTest;

/// Width of the rule separating report sections.
const RULE_WIDTH: usize = 79;

/// Controls whether report lines are colorized.
#[derive(Debug, Clone, Copy)]
pub struct ReportStyle {
    color: bool,
}

impl ReportStyle {
    /// Styling with color enabled.
    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }

    /// Styling with color disabled.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Styles an alert line.
    #[must_use]
    pub fn alert(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_owned()
        }
    }
}

/// What a report run found, for the caller's exit-status decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Number of scenarios with no bound test.
    pub unbound_scenarios: usize,
    /// Number of step occurrences with no resolvable implementation.
    pub undefined_steps: usize,
}

impl ReportOutcome {
    /// Whether the collected tests cover the whole catalog.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.unbound_scenarios == 0 && self.undefined_steps == 0
    }
}

/// Runs the whole missing-coverage flow for one invocation.
///
/// Parses `paths`, diffs against `items`, groups the undefined steps, and
/// writes the report and generated code to `writer`.
///
/// # Errors
///
/// Propagates catalog discovery and parse failures, template failures, and
/// I/O failures from the writer. Missing coverage is not an error; it is
/// the returned outcome.
pub fn report_missing<W: Write>(
    paths: &[Utf8PathBuf],
    items: &[&dyn CollectedTest],
    style: &ReportStyle,
    writer: &mut W,
) -> Result<ReportOutcome, CoverageError> {
    let features = collect_features(paths)?;
    let snapshot = CatalogSnapshot::from_features(&features);
    let coverage = compute_missing(&snapshot, items);
    let grouped = group_steps(coverage.undefined_steps());

    write_unbound_scenarios(writer, style, coverage.unbound_scenarios())?;
    write_undefined_steps(writer, style, &features, &grouped)?;
    write_scaffold(writer, &coverage, &grouped)?;

    Ok(ReportOutcome {
        unbound_scenarios: coverage.unbound_scenarios().len(),
        undefined_steps: coverage.undefined_steps().len(),
    })
}

fn write_unbound_scenarios<W: Write>(
    writer: &mut W,
    style: &ReportStyle,
    scenarios: &[ScenarioRef<'_>],
) -> Result<(), CoverageError> {
    for scenario_ref in scenarios {
        let line = format!(
            "Scenario \"{}\" is not bound to any test in the feature \"{}\" in the file {}:{}",
            scenario_ref.scenario().name(),
            scenario_ref.feature().display_key(),
            scenario_ref.feature().path(),
            scenario_ref.scenario().line(),
        );
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "{}", style.alert(&line)).map_err(|e| io_error(&e))?;
    }
    if !scenarios.is_empty() {
        write_rule(writer, style)?;
    }
    Ok(())
}

fn write_undefined_steps<W: Write>(
    writer: &mut W,
    style: &ReportStyle,
    features: &[FeatureFile],
    steps: &[&PlannedStep],
) -> Result<(), CoverageError> {
    for step in steps {
        let line = describe_undefined_step(features, step);
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "{}", style.alert(&line)).map_err(|e| io_error(&e))?;
    }
    if !steps.is_empty() {
        write_rule(writer, style)?;
    }
    Ok(())
}

fn describe_undefined_step(features: &[FeatureFile], step: &PlannedStep) -> String {
    match step.origin() {
        StepOrigin::Scenario(key) => format!(
            "Step \"{}\" is not defined in the scenario \"{}\" in the feature \"{}\" in the file {}:{}",
            step.name(),
            key.name,
            feature_display(features, &key.feature),
            key.feature,
            step.line(),
        ),
        StepOrigin::Background { feature } => format!(
            "Step \"{}\" is not defined in the background of the feature \"{}\" in the file {}:{}",
            step.name(),
            feature_display(features, feature),
            feature,
            step.line(),
        ),
    }
}

/// Display key of the feature at `path`, falling back to the path itself.
fn feature_display<'a>(features: &'a [FeatureFile], path: &'a Utf8Path) -> &'a str {
    features
        .iter()
        .find(|feature| feature.path() == path)
        .map_or(path.as_str(), FeatureFile::display_key)
}

fn write_scaffold<W: Write>(
    writer: &mut W,
    coverage: &MissingCoverage<'_>,
    grouped: &[&PlannedStep],
) -> Result<(), CoverageError> {
    writeln!(writer, "Paste the following code into the matching test file(s):")
        .map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    let referenced = referenced_features(coverage.unbound_scenarios());
    let code = render_scaffold(&referenced, coverage.unbound_scenarios(), grouped)?;
    writer.write_all(code.as_bytes()).map_err(|e| io_error(&e))?;
    Ok(())
}

/// Features still referenced by unbound scenarios, sorted by display key.
fn referenced_features<'c>(scenarios: &[ScenarioRef<'c>]) -> Vec<&'c FeatureFile> {
    let mut seen = HashSet::new();
    let mut features: Vec<&'c FeatureFile> = scenarios
        .iter()
        .map(ScenarioRef::feature)
        .filter(|feature| seen.insert(feature.path().as_str()))
        .collect();
    features.sort_by(|a, b| a.display_key().cmp(b.display_key()));
    features
}

fn write_rule<W: Write>(writer: &mut W, style: &ReportStyle) -> Result<(), CoverageError> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(writer, "{}", style.alert(&rule)).map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`CoverageError::Io`].
fn io_error(error: &io::Error) -> CoverageError {
    CoverageError::Io {
        message: error.to_string(),
    }
}

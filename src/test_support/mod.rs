//! Test helpers for constructing catalogs and collected tests by hand.
//!
//! These builders keep coverage tests free of filesystem fixtures: a
//! catalog is described as plain data and converted into [`FeatureFile`]
//! values with unique step identities, exactly as the catalog builder would
//! produce them.

use camino::Utf8PathBuf;

use crate::catalog::{
    FeatureFile, PlannedStep, ScenarioKey, ScenarioSpec, StepId, StepKind, StepOrigin,
};
use crate::registry::CollectedTest;

/// One step described as plain data.
#[derive(Debug, Clone)]
pub struct StepFixture {
    kind: StepKind,
    name: String,
    line: usize,
}

impl StepFixture {
    /// Overrides the step's source line (defaults to 0).
    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

/// A `Given` step fixture.
#[must_use]
pub fn given(name: &str) -> StepFixture {
    step(StepKind::Given, name)
}

/// A `When` step fixture.
#[must_use]
pub fn when(name: &str) -> StepFixture {
    step(StepKind::When, name)
}

/// A `Then` step fixture.
#[must_use]
pub fn then(name: &str) -> StepFixture {
    step(StepKind::Then, name)
}

/// A step fixture of an arbitrary kind.
#[must_use]
pub fn step(kind: StepKind, name: &str) -> StepFixture {
    StepFixture {
        kind,
        name: name.to_owned(),
        line: 0,
    }
}

/// One feature described as plain data.
#[derive(Debug, Clone)]
pub struct FeatureFixture {
    path: Utf8PathBuf,
    name: Option<String>,
    background: Vec<StepFixture>,
    scenarios: Vec<(String, usize, Vec<StepFixture>)>,
}

impl FeatureFixture {
    /// Starts a feature at `path` with no declared name.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self {
            path: Utf8PathBuf::from(path),
            name: None,
            background: Vec::new(),
            scenarios: Vec::new(),
        }
    }

    /// Declares the feature name.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Adds background steps.
    #[must_use]
    pub fn background(mut self, steps: Vec<StepFixture>) -> Self {
        self.background = steps;
        self
    }

    /// Adds a scenario with the given steps.
    #[must_use]
    pub fn scenario(mut self, name: &str, steps: Vec<StepFixture>) -> Self {
        let line = self.scenarios.len() + 1;
        self.scenarios.push((name.to_owned(), line, steps));
        self
    }
}

/// Converts feature fixtures into catalog features with unique step
/// identities, sorted by display key as the catalog builder sorts them.
#[must_use]
pub fn build_catalog(fixtures: Vec<FeatureFixture>) -> Vec<FeatureFile> {
    let mut next_id = 0usize;
    let mut features: Vec<FeatureFile> = fixtures
        .into_iter()
        .map(|fixture| build_feature(fixture, &mut next_id))
        .collect();
    features.sort_by(|a, b| a.display_key().cmp(b.display_key()));
    features
}

fn build_feature(fixture: FeatureFixture, next_id: &mut usize) -> FeatureFile {
    let FeatureFixture {
        path,
        name,
        background,
        scenarios,
    } = fixture;
    let background_steps = background
        .into_iter()
        .map(|step_fixture| {
            planned(
                step_fixture,
                StepOrigin::Background {
                    feature: path.clone(),
                },
                next_id,
            )
        })
        .collect();
    let scenario_specs = scenarios
        .into_iter()
        .enumerate()
        .map(|(index, (scenario_name, line, steps))| {
            let key = ScenarioKey::new(path.clone(), scenario_name.clone());
            let planned_steps = steps
                .into_iter()
                .map(|step_fixture| {
                    planned(step_fixture, StepOrigin::Scenario(key.clone()), next_id)
                })
                .collect();
            ScenarioSpec::new(scenario_name, line, index, planned_steps)
        })
        .collect();
    FeatureFile::new(path, name, background_steps, scenario_specs)
}

fn planned(fixture: StepFixture, origin: StepOrigin, next_id: &mut usize) -> PlannedStep {
    let id = StepId::new(*next_id);
    *next_id += 1;
    PlannedStep::new(id, fixture.name, fixture.kind, fixture.line, origin)
}

/// Collected-test stand-in with a fixed binding and resolvable step set.
#[derive(Debug, Clone, Default)]
pub struct StubTest {
    binding: Option<ScenarioKey>,
    resolvable: Vec<String>,
}

impl StubTest {
    /// A collected test with no scenario annotation.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// A collected test bound to the named scenario.
    #[must_use]
    pub fn bound(feature: &str, scenario: &str) -> Self {
        Self {
            binding: Some(ScenarioKey::new(feature, scenario)),
            resolvable: Vec::new(),
        }
    }

    /// Marks the given step texts as resolvable for this test.
    #[must_use]
    pub fn resolving<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolvable.extend(names.into_iter().map(Into::into));
        self
    }
}

impl CollectedTest for StubTest {
    fn binding(&self) -> Option<&ScenarioKey> {
        self.binding.as_ref()
    }

    fn resolves_step(&self, name: &str) -> bool {
        self.resolvable.iter().any(|candidate| candidate == name)
    }
}

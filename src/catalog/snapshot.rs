//! Flattened, deterministically ordered view of a parsed catalog.
//!
//! The snapshot is the canonical "what the feature files declare" input to
//! the diff engine: scenarios sorted by `(feature display key, scenario
//! name)` and step occurrences deduplicated by identity and sorted by name.

use std::collections::HashSet;

use super::model::{FeatureFile, PlannedStep, ScenarioKey, ScenarioSpec};

/// A scenario paired with its owning feature.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRef<'c> {
    feature: &'c FeatureFile,
    scenario: &'c ScenarioSpec,
}

impl<'c> ScenarioRef<'c> {
    /// The owning feature file.
    #[must_use]
    pub const fn feature(&self) -> &'c FeatureFile {
        self.feature
    }

    /// The scenario itself.
    #[must_use]
    pub const fn scenario(&self) -> &'c ScenarioSpec {
        self.scenario
    }

    /// Composite key for this scenario.
    #[must_use]
    pub fn key(&self) -> ScenarioKey {
        self.feature.key_for(self.scenario)
    }

    /// Whether `key` names this scenario.
    #[must_use]
    pub fn matches(&self, key: &ScenarioKey) -> bool {
        key.feature.as_path() == self.feature.path() && key.name == self.scenario.name()
    }

    /// The feature's background steps followed by the scenario's own steps.
    pub fn effective_steps(&self) -> impl Iterator<Item = &'c PlannedStep> {
        self.feature
            .background()
            .iter()
            .chain(self.scenario.steps().iter())
    }
}

/// Deterministically ordered view over a slice of parsed features.
#[derive(Debug)]
pub struct CatalogSnapshot<'c> {
    scenarios: Vec<ScenarioRef<'c>>,
    steps: Vec<&'c PlannedStep>,
}

impl<'c> CatalogSnapshot<'c> {
    /// Flattens `features` into sorted scenarios and deduplicated steps.
    ///
    /// Every step occurrence reachable from a scenario contributes once: a
    /// background step shared by several scenarios keeps a single entry
    /// (identity dedup by [`StepId`](super::StepId)). A background in a
    /// feature without scenarios is unreachable and contributes nothing.
    #[must_use]
    pub fn from_features(features: &'c [FeatureFile]) -> Self {
        let mut scenarios: Vec<ScenarioRef<'c>> = features
            .iter()
            .flat_map(|feature| {
                feature
                    .scenarios()
                    .iter()
                    .map(move |scenario| ScenarioRef { feature, scenario })
            })
            .collect();
        scenarios.sort_by(|a, b| {
            (a.feature.display_key(), a.scenario.name())
                .cmp(&(b.feature.display_key(), b.scenario.name()))
        });

        let mut steps: Vec<&'c PlannedStep> = Vec::new();
        let mut seen = HashSet::new();
        for scenario_ref in &scenarios {
            for step in scenario_ref.effective_steps() {
                if seen.insert(step.id()) {
                    steps.push(step);
                }
            }
        }
        steps.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(&b.id())));

        Self { scenarios, steps }
    }

    /// Scenarios sorted by `(feature display key, scenario name)`.
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioRef<'c>] {
        &self.scenarios
    }

    /// Step occurrences, identity-deduplicated and sorted by name.
    #[must_use]
    pub fn steps(&self) -> &[&'c PlannedStep] {
        &self.steps
    }

    /// Looks a scenario up by composite key.
    #[must_use]
    pub fn lookup(&self, key: &ScenarioKey) -> Option<ScenarioRef<'c>> {
        self.scenarios
            .iter()
            .find(|scenario_ref| scenario_ref.matches(key))
            .copied()
    }
}

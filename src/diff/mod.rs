//! The matching-and-diff engine.
//!
//! Starting from the full catalog ("everything is missing"), collected
//! tests prune what they cover: a bound scenario leaves the unbound set,
//! and every step it resolves leaves the undefined set. Scenarios that stay
//! unbound then withdraw their own steps from the report — their stubs are
//! generated together with the scenario — while background steps stay
//! reported whenever they never resolved, since they are shared
//! infrastructure for the whole feature.

use std::collections::HashSet;

use crate::catalog::{CatalogSnapshot, PlannedStep, ScenarioRef, StepOrigin};
use crate::registry::CollectedTest;

/// The scenarios and steps the collected tests do not cover.
#[derive(Debug)]
pub struct MissingCoverage<'c> {
    unbound_scenarios: Vec<ScenarioRef<'c>>,
    undefined_steps: Vec<&'c PlannedStep>,
}

impl<'c> MissingCoverage<'c> {
    /// Scenarios with no bound test, in catalog order.
    #[must_use]
    pub fn unbound_scenarios(&self) -> &[ScenarioRef<'c>] {
        &self.unbound_scenarios
    }

    /// Step occurrences with no resolvable implementation, in catalog
    /// order. Group with [`group_steps`] before reporting or generating
    /// code.
    #[must_use]
    pub fn undefined_steps(&self) -> &[&'c PlannedStep] {
        &self.undefined_steps
    }

    /// Whether the collected tests cover the whole catalog.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unbound_scenarios.is_empty() && self.undefined_steps.is_empty()
    }
}

/// Diffs the catalog against the collected tests.
///
/// Scenario bindings match by composite key (feature path plus scenario
/// name); repeated bindings and bindings to scenarios outside the catalog
/// are tolerated. Step resolution is asked of the collected item owning the
/// binding, covering the feature's background steps as well as the
/// scenario's own. The computation is pure: running it twice over the same
/// inputs yields identical results.
#[must_use]
pub fn compute_missing<'c>(
    snapshot: &CatalogSnapshot<'c>,
    items: &[&dyn CollectedTest],
) -> MissingCoverage<'c> {
    let mut unbound: Vec<ScenarioRef<'c>> = snapshot.scenarios().to_vec();
    let mut undefined: Vec<&'c PlannedStep> = snapshot.steps().to_vec();

    for item in items {
        let Some(key) = item.binding() else { continue };
        if let Some(position) = unbound.iter().position(|candidate| candidate.matches(key)) {
            unbound.remove(position);
        }
        let Some(bound) = snapshot.lookup(key) else {
            tracing::debug!(
                feature = %key.feature,
                scenario = %key.name,
                "bound scenario is not in the parsed catalog"
            );
            continue;
        };
        for step in bound.effective_steps() {
            if item.resolves_step(step.name()) {
                undefined.retain(|candidate| candidate.id() != step.id());
            }
        }
    }

    for scenario_ref in &unbound {
        undefined.retain(|step| !owned_by(step, scenario_ref));
    }

    MissingCoverage {
        unbound_scenarios: unbound,
        undefined_steps: undefined,
    }
}

/// Whether `step` is one of the scenario's own (non-background) steps.
fn owned_by(step: &PlannedStep, scenario_ref: &ScenarioRef<'_>) -> bool {
    match step.origin() {
        StepOrigin::Scenario(key) => scenario_ref.matches(key),
        StepOrigin::Background { .. } => false,
    }
}

/// Collapses step occurrences into one entry per distinct step text,
/// ordered by canonical type rank and then name.
///
/// The first occurrence of each text wins, so when one text is registered
/// under several types the surviving entry carries the lowest-ranked type.
/// The function is idempotent: grouping an already-grouped list returns the
/// same list.
#[must_use]
pub fn group_steps<'c>(steps: &[&'c PlannedStep]) -> Vec<&'c PlannedStep> {
    let mut ordered = steps.to_vec();
    ordered.sort_by(|a, b| a.kind().cmp(&b.kind()).then_with(|| a.name().cmp(b.name())));
    let mut seen = HashSet::new();
    ordered.retain(|step| seen.insert(step.name()));
    ordered.sort_by_key(|step| step.kind());
    ordered
}

#[cfg(test)]
mod tests;

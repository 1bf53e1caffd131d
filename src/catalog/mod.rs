//! Feature catalog: data model, discovery, and the flattened snapshot.
//!
//! This module owns the read-only view of what the feature files declare.
//! Gherkin syntax itself is parsed by the external `gherkin` crate; the
//! builder here only walks paths, invokes the parser, and normalizes the
//! result into [`FeatureFile`] values with deterministic ordering.

mod builder;
mod model;
mod snapshot;

pub use builder::collect_features;
pub use model::{
    FeatureFile, PlannedStep, ScenarioKey, ScenarioSpec, StepId, StepKind, StepOrigin,
};
pub use snapshot::{CatalogSnapshot, ScenarioRef};

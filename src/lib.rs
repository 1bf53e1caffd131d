//! Stubble reports missing behaviour-test coverage for Gherkin feature
//! files and generates the boilerplate to close the gap.
//!
//! The library parses feature files into a catalog, diffs the catalog
//! against the host framework's collected test items to find unbound
//! scenarios and undefined steps, groups the undefined steps for code
//! generation, and renders paste-ready test stubs. Every run is a fresh,
//! stateless computation over that invocation's inputs.

pub mod catalog;
pub mod config;
pub mod diff;
pub mod error;
pub mod naming;
pub mod registry;
pub mod report;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use catalog::{
    CatalogSnapshot, FeatureFile, PlannedStep, ScenarioKey, ScenarioRef, ScenarioSpec, StepId,
    StepKind, StepOrigin, collect_features,
};
pub use config::{OperationMode, StubbleConfig};
pub use diff::{MissingCoverage, compute_missing, group_steps};
pub use error::CoverageError;
pub use naming::to_identifier;
pub use registry::{
    CollectedTest, CollectionSnapshot, RegistrationError, ResolvedStep, SnapshotItem,
    SnapshotTest, StepDef, StepIndex, StepMatch, StepPattern, StepRegistration,
};
pub use report::{ReportOutcome, ReportStyle, render_scaffold, report_missing};

//! Data model for parsed feature catalogs.
//!
//! These types are the read-only view this crate keeps of what the external
//! Gherkin parser produced: features identified by file path, scenarios
//! keyed by name, and individual step occurrences. They are created once per
//! invocation by the catalog builder and discarded when the run finishes —
//! nothing is cached across runs.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Step type tag.
///
/// The derived ordering follows declaration order, which is the canonical
/// type ordering used when grouping steps for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// A precondition step.
    Given,
    /// An action step.
    When,
    /// An assertion step.
    Then,
}

impl StepKind {
    /// Lowercase keyword, as used by step attributes in generated code.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Identity of a single step occurrence within one catalog build.
///
/// Identifiers are assigned sequentially while a catalog is built and have
/// no meaning across builds. A background step keeps one identity however
/// many scenarios share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(usize);

impl StepId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }
}

/// Stable composite key identifying a scenario across the catalog and the
/// collected-test annotations: owning feature path plus scenario name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScenarioKey {
    /// Path of the feature file declaring the scenario.
    pub feature: Utf8PathBuf,
    /// Scenario name as written in the feature file.
    pub name: String,
}

impl ScenarioKey {
    /// Builds a key from a feature path and scenario name.
    pub fn new(feature: impl Into<Utf8PathBuf>, name: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            name: name.into(),
        }
    }
}

/// Where a step occurrence lives: inside a named scenario or inside a
/// feature's background. The two are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOrigin {
    /// The step belongs to a named scenario.
    Scenario(ScenarioKey),
    /// The step belongs to the background shared by a feature's scenarios.
    Background {
        /// Path of the feature file declaring the background.
        feature: Utf8PathBuf,
    },
}

impl StepOrigin {
    /// Whether the step lives in a background section.
    #[must_use]
    pub const fn is_background(&self) -> bool {
        matches!(self, Self::Background { .. })
    }

    /// Path of the feature file the step ultimately belongs to.
    #[must_use]
    pub fn feature_path(&self) -> &Utf8Path {
        match self {
            Self::Scenario(key) => key.feature.as_path(),
            Self::Background { feature } => feature.as_path(),
        }
    }
}

/// One step occurrence: the literal step text plus its type and location.
///
/// Occurrences with the same text in different scenarios stay distinct
/// entities until [`group_steps`](crate::diff::group_steps) collapses them
/// for code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    id: StepId,
    name: String,
    kind: StepKind,
    line: usize,
    origin: StepOrigin,
}

impl PlannedStep {
    pub(crate) fn new(
        id: StepId,
        name: impl Into<String>,
        kind: StepKind,
        line: usize,
        origin: StepOrigin,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            line,
            origin,
        }
    }

    /// Identity of this occurrence within its catalog build.
    #[must_use]
    pub const fn id(&self) -> StepId {
        self.id
    }

    /// Literal step text, unicode allowed.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Step type tag.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// 1-based source line of the step.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Owning scenario or background.
    #[must_use]
    pub const fn origin(&self) -> &StepOrigin {
        &self.origin
    }
}

/// A named scenario and its ordered steps.
///
/// Step order is execution order; the diff engine treats the steps as a
/// set, so order never affects coverage results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSpec {
    name: String,
    line: usize,
    index: usize,
    steps: Vec<PlannedStep>,
}

impl ScenarioSpec {
    pub(crate) fn new(
        name: impl Into<String>,
        line: usize,
        index: usize,
        steps: Vec<PlannedStep>,
    ) -> Self {
        Self {
            name: name.into(),
            line,
            index,
            steps,
        }
    }

    /// Scenario name as written in the feature file.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 1-based source line of the scenario heading.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Ordinal of the scenario within its feature file.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The scenario's own steps, excluding background steps.
    #[must_use]
    pub fn steps(&self) -> &[PlannedStep] {
        &self.steps
    }
}

/// A parsed feature file: background steps plus named scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFile {
    path: Utf8PathBuf,
    name: Option<String>,
    background: Vec<PlannedStep>,
    scenarios: Vec<ScenarioSpec>,
}

impl FeatureFile {
    pub(crate) fn new(
        path: Utf8PathBuf,
        name: Option<String>,
        background: Vec<PlannedStep>,
        scenarios: Vec<ScenarioSpec>,
    ) -> Self {
        Self {
            path,
            name,
            background,
            scenarios,
        }
    }

    /// Path of the feature file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Declared feature name, when the feature heading carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Key used for ordering and display: the declared name, falling back
    /// to the file path.
    #[must_use]
    pub fn display_key(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.path.as_str())
    }

    /// Background steps shared by every scenario in the feature.
    #[must_use]
    pub fn background(&self) -> &[PlannedStep] {
        &self.background
    }

    /// Scenarios in declaration order.
    #[must_use]
    pub fn scenarios(&self) -> &[ScenarioSpec] {
        &self.scenarios
    }

    /// Name-keyed scenario lookup.
    #[must_use]
    pub fn scenario(&self, name: &str) -> Option<&ScenarioSpec> {
        self.scenarios.iter().find(|scenario| scenario.name() == name)
    }

    /// Composite key for one of this feature's scenarios.
    #[must_use]
    pub fn key_for(&self, scenario: &ScenarioSpec) -> ScenarioKey {
        ScenarioKey::new(self.path.clone(), scenario.name())
    }
}

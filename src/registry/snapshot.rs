//! JSON-backed stand-in for the host framework's collected test items.
//!
//! The host test framework is an external collaborator: all this crate
//! needs from it is the enumeration of collected tests (each optionally
//! annotated with the scenario it implements) and a step-resolution query.
//! A collection snapshot is that view serialized to a JSON file:
//!
//! ```json
//! {
//!   "items": [
//!     {
//!       "id": "tests/articles.rs::publish_draft",
//!       "scenario": { "feature": "features/publish.feature", "name": "Publish a draft" }
//!     }
//!   ],
//!   "steps": [
//!     { "kind": "given", "literal": "a draft article", "handler": "draft_article" },
//!     { "kind": "when", "regex": "I publish the (.+) article", "handler": "publish_article" },
//!     { "kind": "given", "literal": "an article draft", "alias_of": "draft_article" }
//!   ]
//! }
//! ```

use camino::Utf8Path;
use serde::Deserialize;

use crate::catalog::{ScenarioKey, StepKind};
use crate::error::CoverageError;

use super::index::{StepIndex, StepRegistration};
use super::pattern::StepPattern;
use super::CollectedTest;

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    items: Vec<RawItem>,
    #[serde(default)]
    steps: Vec<RawStep>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    id: String,
    #[serde(default)]
    scenario: Option<ScenarioKey>,
}

#[derive(Debug, Deserialize)]
struct RawStep {
    kind: StepKind,
    #[serde(default)]
    literal: Option<String>,
    #[serde(default)]
    regex: Option<String>,
    #[serde(default)]
    handler: Option<String>,
    #[serde(default)]
    alias_of: Option<String>,
}

/// One collected test from a snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotItem {
    id: String,
    scenario: Option<ScenarioKey>,
}

impl SnapshotItem {
    /// Host-framework identifier of the test.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Scenario the test is bound to, when annotated.
    #[must_use]
    pub const fn scenario(&self) -> Option<&ScenarioKey> {
        self.scenario.as_ref()
    }
}

/// The collected tests and step definitions of one host-framework run.
#[derive(Debug, Clone, Default)]
pub struct CollectionSnapshot {
    items: Vec<SnapshotItem>,
    index: StepIndex,
}

impl CollectionSnapshot {
    /// Parses a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::Bindings`] for malformed JSON or step
    /// entries, and [`CoverageError::Registration`] when a step entry is
    /// rejected by the registration helper.
    pub fn from_json(text: &str) -> Result<Self, CoverageError> {
        let raw: RawSnapshot =
            serde_json::from_str(text).map_err(|error| CoverageError::Bindings {
                message: error.to_string(),
            })?;
        let mut index = StepIndex::new();
        for record in raw.steps {
            index.register(build_registration(record)?)?;
        }
        let items = raw
            .items
            .into_iter()
            .map(|record| SnapshotItem {
                id: record.id,
                scenario: record.scenario,
            })
            .collect();
        Ok(Self { items, index })
    }

    /// Reads and parses a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::Bindings`] when the file cannot be read,
    /// plus every error [`Self::from_json`] produces.
    pub fn from_path(path: &Utf8Path) -> Result<Self, CoverageError> {
        let text = std::fs::read_to_string(path).map_err(|error| CoverageError::Bindings {
            message: format!("cannot read {path}: {error}"),
        })?;
        Self::from_json(&text)
    }

    /// The collected items.
    #[must_use]
    pub fn items(&self) -> &[SnapshotItem] {
        &self.items
    }

    /// The shared step definition index.
    #[must_use]
    pub const fn index(&self) -> &StepIndex {
        &self.index
    }

    /// Views implementing [`CollectedTest`] over the shared step index.
    #[must_use]
    pub fn tests(&self) -> Vec<SnapshotTest<'_>> {
        self.items
            .iter()
            .map(|item| SnapshotTest {
                item,
                index: &self.index,
            })
            .collect()
    }
}

fn build_registration(record: RawStep) -> Result<StepRegistration, CoverageError> {
    let pattern = match (record.literal, record.regex) {
        (Some(text), None) => StepPattern::literal(text),
        (None, Some(source)) => StepPattern::pattern(&source)?,
        (Some(_), Some(_)) => {
            return Err(CoverageError::Bindings {
                message: "step entry cannot set both \"literal\" and \"regex\"".to_owned(),
            });
        }
        (None, None) => {
            return Err(CoverageError::Bindings {
                message: "step entry needs \"literal\" or \"regex\"".to_owned(),
            });
        }
    };
    Ok(StepRegistration {
        kind: record.kind,
        pattern,
        handler: record.handler,
        alias_of: record.alias_of,
    })
}

/// A snapshot item viewed as a collected test.
#[derive(Debug, Clone, Copy)]
pub struct SnapshotTest<'a> {
    item: &'a SnapshotItem,
    index: &'a StepIndex,
}

impl CollectedTest for SnapshotTest<'_> {
    fn binding(&self) -> Option<&ScenarioKey> {
        self.item.scenario()
    }

    fn resolves_step(&self, name: &str) -> bool {
        self.index.resolve(name).is_some()
    }
}

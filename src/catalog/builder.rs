//! Feature discovery and parsing into the in-memory catalog.
//!
//! Paths may name feature files directly or directories, which expand
//! recursively to every `*.feature` file beneath them. Filesystem iteration
//! order is never relied upon: the final catalog is sorted by display key so
//! reports and generated code are deterministic across runs.

use camino::{Utf8Path, Utf8PathBuf};
use gherkin::GherkinEnv;
use walkdir::WalkDir;

use crate::error::CoverageError;

use super::model::{
    FeatureFile, PlannedStep, ScenarioKey, ScenarioSpec, StepId, StepKind, StepOrigin,
};

/// Extension that marks a file as a feature file during directory walks.
const FEATURE_EXTENSION: &str = "feature";

/// Discovers and parses the feature files named by `paths`.
///
/// Duplicate path arguments are skipped by literal string comparison only
/// (first occurrence wins); symlinked or relative-versus-absolute aliases of
/// the same file are not detected. The returned features are sorted by
/// display key.
///
/// # Errors
///
/// Returns [`CoverageError::FeatureDiscovery`] when a path cannot be read
/// or walked, and [`CoverageError::FeatureParse`] when a feature file is
/// rejected by the parser. Failures abort the run; there is no partial
/// catalog.
pub fn collect_features(paths: &[Utf8PathBuf]) -> Result<Vec<FeatureFile>, CoverageError> {
    let mut seen = std::collections::HashSet::new();
    let mut features = Vec::new();
    let mut next_id = 0usize;
    for path in paths {
        if !seen.insert(path.as_str()) {
            continue;
        }
        if path.is_dir() {
            for file in find_feature_files(path)? {
                features.push(parse_feature_file(&file, &mut next_id)?);
            }
        } else {
            features.push(parse_feature_file(path, &mut next_id)?);
        }
    }
    features.sort_by(|a, b| a.display_key().cmp(b.display_key()));
    tracing::debug!(count = features.len(), "collected feature files");
    Ok(features)
}

/// Expands a directory to every feature file beneath it, in walk order.
fn find_feature_files(root: &Utf8Path) -> Result<Vec<Utf8PathBuf>, CoverageError> {
    let mut files = Vec::new();
    for entry_result in WalkDir::new(root.as_std_path()) {
        let entry = entry_result.map_err(|error| CoverageError::FeatureDiscovery {
            path: root.to_owned(),
            message: error.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_feature = entry
            .path()
            .extension()
            .is_some_and(|extension| extension == FEATURE_EXTENSION);
        if !is_feature {
            continue;
        }
        let file = Utf8PathBuf::from_path_buf(entry.into_path()).map_err(|rejected| {
            CoverageError::FeatureDiscovery {
                path: root.to_owned(),
                message: format!("non-UTF-8 path: {}", rejected.display()),
            }
        })?;
        files.push(file);
    }
    Ok(files)
}

/// Parses one feature file, assigning step identities from `next_id`.
fn parse_feature_file(
    path: &Utf8Path,
    next_id: &mut usize,
) -> Result<FeatureFile, CoverageError> {
    let parsed = gherkin::Feature::parse_path(path.as_std_path(), GherkinEnv::default()).map_err(
        |error| CoverageError::FeatureParse {
            path: path.to_owned(),
            message: error.to_string(),
        },
    )?;
    Ok(from_gherkin(path, &parsed, next_id))
}

/// Converts the external parser's feature into this crate's model.
fn from_gherkin(path: &Utf8Path, parsed: &gherkin::Feature, next_id: &mut usize) -> FeatureFile {
    let declared = parsed.name.trim();
    let name = (!declared.is_empty()).then(|| declared.to_owned());
    let background = parsed
        .background
        .as_ref()
        .map(|section| {
            section
                .steps
                .iter()
                .map(|step| {
                    planned_step(
                        step,
                        StepOrigin::Background {
                            feature: path.to_owned(),
                        },
                        next_id,
                    )
                })
                .collect()
        })
        .unwrap_or_default();
    let scenarios = parsed
        .scenarios
        .iter()
        .enumerate()
        .map(|(index, scenario)| {
            let key = ScenarioKey::new(path.to_owned(), scenario.name.clone());
            let steps = scenario
                .steps
                .iter()
                .map(|step| planned_step(step, StepOrigin::Scenario(key.clone()), next_id))
                .collect();
            ScenarioSpec::new(scenario.name.clone(), scenario.position.line, index, steps)
        })
        .collect();
    FeatureFile::new(path.to_owned(), name, background, scenarios)
}

fn planned_step(step: &gherkin::Step, origin: StepOrigin, next_id: &mut usize) -> PlannedStep {
    let id = StepId::new(*next_id);
    *next_id += 1;
    PlannedStep::new(id, step.value.clone(), step.ty.into(), step.position.line, origin)
}

impl From<gherkin::StepType> for StepKind {
    fn from(ty: gherkin::StepType) -> Self {
        match ty {
            gherkin::StepType::Given => Self::Given,
            gherkin::StepType::When => Self::When,
            gherkin::StepType::Then => Self::Then,
        }
    }
}

//! Scenario state and workspace helpers for the missing coverage BDD
//! tests.

use std::fs;

use camino::Utf8PathBuf;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use stubble::{CollectionSnapshot, CoverageError, ReportOutcome};
use tempfile::TempDir;

/// Scenario state for missing coverage tests.
#[derive(ScenarioState, Default)]
pub(crate) struct CoverageState {
    pub(crate) workspace: Slot<TempDir>,
    pub(crate) feature_path: Slot<Utf8PathBuf>,
    pub(crate) snapshot: Slot<CollectionSnapshot>,
    pub(crate) output: Slot<String>,
    pub(crate) outcome: Slot<ReportOutcome>,
    pub(crate) error: Slot<CoverageError>,
}

/// Ensures the scenario workspace exists and returns its root path.
pub(crate) fn workspace_path(
    coverage_state: &CoverageState,
) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
    if coverage_state.workspace.with_ref(|_| ()).is_none() {
        coverage_state.workspace.set(TempDir::new()?);
    }
    coverage_state
        .workspace
        .with_ref(|dir| Utf8PathBuf::from_path_buf(dir.path().to_path_buf()))
        .ok_or("workspace not initialised")?
        .map_err(|rejected| format!("non-UTF-8 temp path: {}", rejected.display()).into())
}

/// Writes a feature file into the scenario workspace and records its path.
pub(crate) fn write_workspace_feature(
    coverage_state: &CoverageState,
    file_name: &str,
    content: &str,
) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
    let root = workspace_path(coverage_state)?;
    let path = root.join(file_name);
    fs::write(path.as_std_path(), content)?;
    coverage_state.feature_path.set(path.clone());
    Ok(path)
}

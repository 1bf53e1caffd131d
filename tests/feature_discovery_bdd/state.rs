//! Scenario state for the feature discovery BDD tests.

use camino::Utf8PathBuf;
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use stubble::{CoverageError, FeatureFile};
use tempfile::TempDir;

/// Scenario state for feature discovery tests.
#[derive(ScenarioState, Default)]
pub(crate) struct DiscoveryState {
    pub(crate) workspace: Slot<TempDir>,
    pub(crate) file_path: Slot<Utf8PathBuf>,
    pub(crate) collected: Slot<Vec<FeatureFile>>,
    pub(crate) error: Slot<CoverageError>,
}

impl DiscoveryState {
    /// Root path of the scenario workspace.
    pub(crate) fn root(&self) -> Result<Utf8PathBuf, Box<dyn std::error::Error>> {
        self.workspace
            .with_ref(|dir| Utf8PathBuf::from_path_buf(dir.path().to_path_buf()))
            .ok_or("workspace not initialised")?
            .map_err(|rejected| format!("non-UTF-8 temp path: {}", rejected.display()).into())
    }
}

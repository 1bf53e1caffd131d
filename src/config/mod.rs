//! Application configuration loaded from CLI, environment, and files.
//!
//! Configuration merges values from command-line arguments, environment
//! variables, and configuration files using ortho-config's layered
//! approach, with the usual precedence (lowest to highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.stubble.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `STUBBLE_FEATURES` and friends
//! 4. **Command-line arguments** – `--generate-missing`, `--features`, …

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::CoverageError;
use crate::report::ReportStyle;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Report missing coverage for the configured feature paths and exit.
    GenerateMissing,
    /// No operation requested; print a hint and exit cleanly.
    Idle,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `STUBBLE_GENERATE_MISSING` or `--generate-missing`: report mode toggle
/// - `STUBBLE_FEATURES` or repeated `--features`: feature files/directories
/// - `STUBBLE_BINDINGS` or `--bindings`: collection snapshot path
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STUBBLE",
    discovery(
        dotfile_name = ".stubble.toml",
        config_file_name = "stubble.toml",
        app_name = "stubble"
    )
)]
pub struct StubbleConfig {
    /// Reports missing bdd test code for the given feature files and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--generate-missing` or `-g`
    /// - Config file: `generate_missing = true`
    #[ortho_config(cli_short = 'g')]
    pub generate_missing: bool,

    /// Feature file or directory to inspect. Multiple allowed.
    ///
    /// Can be provided via:
    /// - CLI: `--features <FILE_OR_DIR>` or `-f <FILE_OR_DIR>`, repeatable
    /// - Environment: `STUBBLE_FEATURES`
    /// - Config file: `features = ["features"]`
    #[ortho_config(cli_short = 'f')]
    pub features: Vec<String>,

    /// Path to a collection snapshot describing the host framework's
    /// collected tests and registered steps.
    ///
    /// When absent, the diff runs against an empty collection and every
    /// scenario is reported unbound.
    ///
    /// Can be provided via:
    /// - CLI: `--bindings <FILE>` or `-b <FILE>`
    /// - Environment: `STUBBLE_BINDINGS`
    /// - Config file: `bindings = "collection.json"`
    #[ortho_config(cli_short = 'b')]
    pub bindings: Option<String>,

    /// Disables colorized report output.
    ///
    /// Can be provided via:
    /// - CLI: `--no-color`
    /// - Config file: `no_color = true`
    #[ortho_config()]
    pub no_color: bool,
}

impl Default for StubbleConfig {
    fn default() -> Self {
        Self {
            generate_missing: false,
            features: Vec::new(),
            bindings: None,
            no_color: false,
        }
    }
}

impl StubbleConfig {
    /// Returns the configured feature paths.
    ///
    /// # Errors
    ///
    /// Returns [`CoverageError::MissingFeaturePaths`] when no feature path
    /// is configured.
    pub fn require_features(&self) -> Result<Vec<Utf8PathBuf>, CoverageError> {
        if self.features.is_empty() {
            return Err(CoverageError::MissingFeaturePaths);
        }
        Ok(self.features.iter().map(Utf8PathBuf::from).collect())
    }

    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.generate_missing {
            OperationMode::GenerateMissing
        } else {
            OperationMode::Idle
        }
    }

    /// Report styling derived from the color configuration.
    #[must_use]
    pub const fn report_style(&self) -> ReportStyle {
        if self.no_color {
            ReportStyle::plain()
        } else {
            ReportStyle::colored()
        }
    }
}

#[cfg(test)]
mod tests;

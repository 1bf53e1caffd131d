//! Handler for the generate-missing operation mode.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8Path;
use stubble::{CollectedTest, CollectionSnapshot, CoverageError, StubbleConfig, report_missing};

/// Exit status when unbound scenarios or undefined steps were found.
const EXIT_MISSING_COVERAGE: u8 = 100;

/// Exit status when report mode runs without any feature paths. Distinct
/// from [`EXIT_MISSING_COVERAGE`] so callers can tell a usage error from a
/// coverage gap.
const EXIT_NO_FEATURE_PATHS: u8 = 2;

/// Runs the missing-coverage report for the configured feature paths.
///
/// # Errors
///
/// Propagates catalog, snapshot, template, and I/O failures. An absent
/// feature path configuration is recovered here as a user-facing message
/// plus its own exit sentinel, not an error.
pub fn run(config: &StubbleConfig) -> Result<ExitCode, CoverageError> {
    let style = config.report_style();
    let mut stdout = io::stdout().lock();

    let paths = match config.require_features() {
        Ok(paths) => paths,
        Err(CoverageError::MissingFeaturePaths) => {
            let notice = style.alert("The --features parameter is required.");
            writeln!(stdout, "{notice}").map_err(|error| CoverageError::Io {
                message: error.to_string(),
            })?;
            return Ok(ExitCode::from(EXIT_NO_FEATURE_PATHS));
        }
        Err(other) => return Err(other),
    };

    let collection = load_collection(config)?;
    let tests = collection.tests();
    let items: Vec<&dyn CollectedTest> = tests
        .iter()
        .map(|test| test as &dyn CollectedTest)
        .collect();

    let outcome = report_missing(&paths, &items, &style, &mut stdout)?;
    if outcome.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_MISSING_COVERAGE))
    }
}

/// Loads the collection snapshot named by the configuration, or an empty
/// collection when none is configured.
fn load_collection(config: &StubbleConfig) -> Result<CollectionSnapshot, CoverageError> {
    config.bindings.as_deref().map_or_else(
        || Ok(CollectionSnapshot::default()),
        |path| CollectionSnapshot::from_path(Utf8Path::new(path)),
    )
}

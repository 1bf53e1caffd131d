//! Stubble CLI entrypoint for missing-coverage reporting.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use stubble::{CoverageError, OperationMode, StubbleConfig};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, CoverageError> {
    let config = load_config()?;
    match config.operation_mode() {
        OperationMode::GenerateMissing => cli::generate::run(&config),
        OperationMode::Idle => cli::idle(),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CoverageError::Configuration`] when ortho-config fails to
/// parse arguments or load configuration files.
fn load_config() -> Result<StubbleConfig, CoverageError> {
    StubbleConfig::load().map_err(|error| CoverageError::Configuration {
        message: error.to_string(),
    })
}

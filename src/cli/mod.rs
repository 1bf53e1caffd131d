//! CLI operation mode handlers.
//!
//! - [`generate`]: Report missing coverage and generate test stubs

use std::io::{self, Write};
use std::process::ExitCode;

use stubble::CoverageError;

pub mod generate;

/// Handles an invocation without an operation mode: hints at the report
/// flag and exits cleanly.
pub fn idle() -> Result<ExitCode, CoverageError> {
    let mut stderr = io::stderr().lock();
    writeln!(
        stderr,
        "nothing to do: pass --generate-missing to report missing coverage"
    )
    .map_err(|error| CoverageError::Io {
        message: error.to_string(),
    })?;
    Ok(ExitCode::SUCCESS)
}

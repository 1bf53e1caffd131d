//! Error types surfaced while computing missing coverage.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::registry::RegistrationError;

/// Errors surfaced while discovering features, loading collected tests, or
/// writing the report.
///
/// Unresolved steps and unbound scenarios are deliberately absent here: they
/// are the product of the tool, reported in bulk, never raised as errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoverageError {
    /// Report mode was requested without any feature paths.
    #[error("at least one feature file or directory is required")]
    MissingFeaturePaths,

    /// A feature path could not be read or walked.
    #[error("cannot read feature path {path}: {message}")]
    FeatureDiscovery {
        /// The path argument that failed to expand.
        path: Utf8PathBuf,
        /// Detail from the underlying filesystem operation.
        message: String,
    },

    /// A feature file failed to parse.
    #[error("cannot parse feature file {path}: {message}")]
    FeatureParse {
        /// The feature file that was rejected.
        path: Utf8PathBuf,
        /// Parser error detail.
        message: String,
    },

    /// The collection snapshot could not be loaded or was malformed.
    #[error("invalid collection snapshot: {message}")]
    Bindings {
        /// Detail describing the malformed snapshot.
        message: String,
    },

    /// A step registration was rejected.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Scaffold template rendering failed.
    #[error("scaffold rendering failed: {message}")]
    Template {
        /// Detail from the template engine.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

//! Errors raised by the step-registration helper.

use thiserror::Error;

/// Usage errors raised synchronously while registering step definitions.
///
/// These reject invalid registrations at registration time; they are never
/// produced by step resolution, which treats every miss as "still
/// undefined".
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistrationError {
    /// A registration named both a new handler and an alias target.
    #[error("step \"{step}\" cannot both introduce handler \"{handler}\" and alias \"{alias}\"")]
    ConflictingBinding {
        /// Source text of the rejected registration.
        step: String,
        /// The new handler name that was supplied.
        handler: String,
        /// The alias target that was supplied alongside it.
        alias: String,
    },

    /// A pattern failed to compile.
    #[error("invalid step pattern \"{pattern}\": {message}")]
    InvalidPattern {
        /// The pattern source that was rejected.
        pattern: String,
        /// Compiler error detail.
        message: String,
    },
}

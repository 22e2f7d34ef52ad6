//! Error taxonomy for the classification engine.
//!
//! "No match" is deliberately not here: it is an expected outcome for
//! unrecognized input and is reported through `ClassificationOutcome`,
//! so callers can tell it apart from a genuine failure.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CodexError {
    /// Empty or whitespace-only input, rejected before any analyzer runs.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Attempt to register a category code that already exists. The
    /// registration is rejected; silent overwrite would corrupt results
    /// already issued against the old definition.
    #[error("category '{0}' is already registered")]
    DuplicateCategory(String),

    /// A category or variant failed validation at construction time.
    #[error("invalid category '{code}': {reason}")]
    InvalidCategory { code: String, reason: String },
}

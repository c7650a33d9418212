//! Errors raised at the document boundary.

use nsa_core::ValidationError;
use thiserror::Error;

/// Failure to decode or validate a payload document.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// No payload is registered under the namespace.
    #[error("unknown payload namespace: {0:?}")]
    UnknownPayload(String),

    /// The document is not well-formed JSON for the payload's record.
    #[error("cannot decode {payload} document: {reason}")]
    Decode {
        /// Payload namespace.
        payload: &'static str,
        /// Decoder diagnostic.
        reason: String,
    },

    /// The document decoded but the record is invalid.
    ///
    /// Renders exactly as the underlying validation error.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl PayloadError {
    /// The validation error, if this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

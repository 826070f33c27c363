//! Errors raised while building or interpreting Labfolder records.
//!
//! Transport errors live in `lf-client`. Everything here is detectable
//! without talking to the server.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A record is missing something the operation needs (an id, content).
    #[error("Validation error: {0}")]
    Validation(String),

    /// An element `type` string that this client does not model.
    #[error("Unsupported element type: {0}")]
    UnknownElementKind(String),

    /// A sheet could not be converted to or from a frame.
    #[error("Table error: {0}")]
    Table(String),

    /// A JSON body did not match the expected record shape.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn table(message: impl Into<String>) -> Self {
        Self::Table(message.into())
    }
}

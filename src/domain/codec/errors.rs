//! Codec error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::matrix::MatrixError;

/// Errors raised while encoding or decoding the interchange document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Top-level shape is wrong (not JSON, missing or non-list sections,
    /// empty sections).
    #[error("Malformed state document: {0}")]
    MalformedDocument(String),

    /// The document is well-formed but exceeds the configured caps.
    #[error(transparent)]
    Matrix(MatrixError),

    #[error("Failed to serialize state: {0}")]
    Serialization(String),
}

impl CodecError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CodecError::MalformedDocument(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CodecError::MalformedDocument(_) => ErrorCode::MalformedDocument,
            CodecError::Matrix(err) => err.code(),
            CodecError::Serialization(_) => ErrorCode::InternalError,
        }
    }
}

impl From<MatrixError> for CodecError {
    fn from(err: MatrixError) -> Self {
        match err {
            MatrixError::MinimumCountViolation { kind } => CodecError::malformed(format!(
                "document must contain at least one {}",
                kind
            )),
            other => CodecError::Matrix(other),
        }
    }
}

impl From<CodecError> for DomainError {
    fn from(err: CodecError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

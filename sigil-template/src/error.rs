use serde::Serialize;
use thiserror::Error;

/// Structural validation failure for a template payload
///
/// Validators collect every violation rather than stopping at the first, so
/// an editing client can surface all problems in one round.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    #[error("missing required field: {field}")]
    MissingField { field: String },
    #[error("field '{field}' lies outside the canvas (value {value})")]
    OutOfBounds { field: String, value: f64 },
    #[error("invalid value '{value}' for {field}, allowed: {allowed}")]
    InvalidEnum {
        field: String,
        value: String,
        allowed: String,
    },
    #[error("variable {token} has no matching layout field")]
    OrphanVariable { token: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    pub fn out_of_bounds(field: impl Into<String>, value: f64) -> Self {
        Self::OutOfBounds {
            field: field.into(),
            value,
        }
    }

    pub fn orphan(token: impl Into<String>) -> Self {
        Self::OrphanVariable {
            token: token.into(),
        }
    }
}

/// Failure to decode a stored template document
///
/// Decoding is all-or-nothing: a `Template` is never partially populated on
/// failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("missing required key: {0}")]
    MissingRequiredKey(String),
    #[error("type mismatch at '{key}': expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: String,
        actual: String,
    },
    #[error("malformed template document: {0}")]
    InvalidDocument(String),
}

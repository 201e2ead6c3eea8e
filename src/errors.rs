//! Error types for data validation and schema construction.
//!
//! Two distinct kinds:
//! - [`ValidationError`]: the input does not satisfy the schema. Carries the
//!   offending value, a human message, and the trace locating the failure.
//! - [`SchemaError`]: the schema itself is malformed. This is a programmer
//!   error surfaced when a cleaner is built, never during validation of data,
//!   and must not be handled by validation-error paths.

use serde_json::Value;
use thiserror::Error;

use crate::trace::{Segment, Trace};

/// Result type for validation and coercion.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A data-validation failure.
#[derive(Debug, Clone, Error)]
#[error("{value} {message}")]
pub struct ValidationError {
    /// The offending input value.
    pub value: Value,
    /// Human-readable reason.
    pub message: String,
    /// Path from the schema root to the failing node.
    pub trace: Trace,
}

impl ValidationError {
    pub fn new(value: &Value, message: &str, trace: Trace) -> Self {
        Self {
            value: value.clone(),
            message: message.to_string(),
            trace,
        }
    }

    /// Prepends an outer path segment while the failure unwinds.
    pub(crate) fn nested(mut self, segment: Segment) -> Self {
        self.trace.prepend(segment);
        self
    }

    /// Full rendering including the trace.
    pub fn report(&self) -> String {
        format!("{} {} ; Trace: {}", self.value, self.message, self.trace)
    }
}

/// A malformed schema, detected before any data is validated.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A list schema may be empty or hold exactly one element type.
    #[error("list schema has {0} element types; it may be empty or have exactly one")]
    AmbiguousListElement(usize),
    /// A first-match schema needs at least one alternative to try.
    #[error("any-of schema has no alternatives")]
    EmptyAlternatives,
    /// A pattern that does not compile.
    #[error("invalid pattern: {0}")]
    BadPattern(#[from] regex::Error),
}

//! Entry point: validate, then coerce.
//!
//! A [`Cleaner`] binds one schema. Construction audits the schema structure
//! (a malformed schema is a [`SchemaError`], never a
//! [`ValidationError`](crate::errors::ValidationError)); cleaning runs the
//! full validate pass and, only if it succeeds, the parse pass. There is no
//! partial result: a call returns either a fully coerced tree or the first
//! structured failure.

use serde_json::Value;
use tracing::{debug, trace};

use crate::errors::{SchemaError, ValidationResult};
use crate::schema::Schema;
use crate::value::Cleaned;
use crate::walker;

/// A reusable validate-and-coerce pipeline for one schema.
#[derive(Debug, Clone)]
pub struct Cleaner {
    schema: Schema,
}

impl Cleaner {
    /// Audits `schema` and binds it.
    pub fn new(schema: Schema) -> Result<Self, SchemaError> {
        schema.check()?;
        Ok(Self { schema })
    }

    /// Validates the whole input, then produces the coerced tree.
    pub fn clean(&self, value: &Value) -> ValidationResult<Cleaned> {
        if let Err(error) = walker::validate(value, &self.schema) {
            debug!(%error, path = %error.trace, "validation failed");
            return Err(error);
        }
        let cleaned = match walker::parse(value, &self.schema) {
            Ok(cleaned) => cleaned,
            Err(error) => {
                debug!(%error, path = %error.trace, "coercion failed");
                return Err(error);
            }
        };
        trace!("value cleaned");
        Ok(cleaned)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Builds a [`Cleaner`] for `schema`.
pub fn clean(schema: Schema) -> Result<Cleaner, SchemaError> {
    Cleaner::new(schema)
}

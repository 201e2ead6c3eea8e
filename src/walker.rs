//! The structural walker: recursive validate and parse passes over a
//! schema's shape.
//!
//! Both passes dispatch on the schema node variant:
//! - `validate` raises on the first failure, in schema declaration order,
//!   and never mutates or coerces.
//! - `parse` assumes a validated tree and produces the coerced output;
//!   container kinds are still re-checked so a direct call stays total.
//!
//! Traces build bottom-up: the failing leaf anchors the trace and each
//! unwinding frame prepends its own segment. `Optional` and `Any` wrap the
//! inner trace whole instead of chaining onto it.

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};
use crate::schema::Schema;
use crate::trace::{Segment, Trace};
use crate::types::ScalarType;
use crate::value::Cleaned;

/// Fail-fast validation of `value` against `schema`.
pub(crate) fn validate(value: &Value, schema: &Schema) -> ValidationResult<()> {
    match schema {
        Schema::String(t) => t.validate(value),
        Schema::Pattern(t) => t.validate(value),
        Schema::Number(t) => t.validate(value),
        Schema::Boolean(t) => t.validate(value),
        Schema::Null(t) => t.validate(value),
        Schema::Date(t) => t.validate(value),
        Schema::Datetime(t) => t.validate(value),
        Schema::Constant(t) => t.validate(value),
        Schema::Optional(inner) => {
            if value.is_null() {
                return Ok(());
            }
            validate(value, inner).map_err(wrap_optional)
        }
        // First-match alternatives have no standalone validate; each
        // alternative runs its own validate-then-parse during the parse pass.
        Schema::Any(_) => Ok(()),
        Schema::Object(fields) => {
            let object = value
                .as_object()
                .ok_or_else(|| shape_error(value, "is not an object", Segment::Object))?;
            for (key, node) in fields {
                if !object.contains_key(key) && !matches!(node, Schema::Optional(_)) {
                    return Err(shape_error(
                        value,
                        &format!("doesn't have key \"{}\"", key),
                        Segment::Object,
                    ));
                }
            }
            for (key, node) in fields {
                if let Some(field) = object.get(key) {
                    validate(field, node).map_err(|e| e.nested(Segment::Key(key.clone())))?;
                }
            }
            Ok(())
        }
        Schema::List(elements) => {
            let items = value
                .as_array()
                .ok_or_else(|| shape_error(value, "is not a list", Segment::List))?;
            let element = match elements.first() {
                Some(element) => element,
                None => return Ok(()),
            };
            for (index, item) in items.iter().enumerate() {
                validate(item, element).map_err(|e| e.nested(Segment::Index(index)))?;
            }
            Ok(())
        }
        Schema::Tuple(slots) => {
            let items = value
                .as_array()
                .ok_or_else(|| shape_error(value, "is not a list", Segment::Tuple))?;
            if items.len() != slots.len() {
                let which = if items.len() < slots.len() { "few" } else { "many" };
                return Err(shape_error(
                    value,
                    &format!("has too {} elements (it requires {})", which, slots.len()),
                    Segment::Tuple,
                ));
            }
            for (slot, (item, node)) in items.iter().zip(slots).enumerate() {
                validate(item, node).map_err(|e| e.nested(Segment::Slot(slot)))?;
            }
            Ok(())
        }
    }
}

/// Coercion of a validated `value` into the schema's output shape.
pub(crate) fn parse(value: &Value, schema: &Schema) -> ValidationResult<Cleaned> {
    match schema {
        Schema::String(t) => t.coerce(value),
        Schema::Pattern(t) => t.coerce(value),
        Schema::Number(t) => t.coerce(value),
        Schema::Boolean(t) => t.coerce(value),
        Schema::Null(t) => t.coerce(value),
        Schema::Date(t) => t.coerce(value),
        Schema::Datetime(t) => t.coerce(value),
        Schema::Constant(t) => t.coerce(value),
        Schema::Optional(inner) => {
            if value.is_null() {
                return Ok(Cleaned::Null);
            }
            parse(value, inner).map_err(wrap_optional)
        }
        Schema::Any(alternatives) => {
            let mut failures = Vec::with_capacity(alternatives.len());
            for alternative in alternatives {
                match validate(value, alternative).and_then(|_| parse(value, alternative)) {
                    Ok(cleaned) => return Ok(cleaned),
                    Err(failure) => failures.push(failure),
                }
            }
            let traces = failures.into_iter().map(|failure| failure.trace).collect();
            Err(shape_error(
                value,
                "doesn't meet any allowed criterion",
                Segment::AnyOf(traces),
            ))
        }
        Schema::Object(fields) => {
            let mut cleaned = IndexMap::with_capacity(fields.len());
            for (key, node) in fields {
                // Absent keys map to null, which optional nodes short-circuit.
                let field = value.get(key.as_str()).unwrap_or(&Value::Null);
                let parsed = parse(field, node).map_err(|e| e.nested(Segment::Key(key.clone())))?;
                cleaned.insert(key.clone(), parsed);
            }
            Ok(Cleaned::Object(cleaned))
        }
        Schema::List(elements) => {
            let element = match elements.first() {
                Some(element) => element,
                // An unconstrained list parses to an empty list regardless of
                // the input's length.
                None => return Ok(Cleaned::List(Vec::new())),
            };
            let items = value
                .as_array()
                .ok_or_else(|| shape_error(value, "is not a list", Segment::List))?;
            let mut cleaned = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                cleaned.push(parse(item, element).map_err(|e| e.nested(Segment::Index(index)))?);
            }
            Ok(Cleaned::List(cleaned))
        }
        Schema::Tuple(slots) => {
            let items = value
                .as_array()
                .ok_or_else(|| shape_error(value, "is not a list", Segment::Tuple))?;
            let mut cleaned = Vec::with_capacity(slots.len());
            for (slot, (item, node)) in items.iter().zip(slots).enumerate() {
                cleaned.push(parse(item, node).map_err(|e| e.nested(Segment::Slot(slot)))?);
            }
            Ok(Cleaned::Tuple(cleaned))
        }
    }
}

fn shape_error(value: &Value, message: &str, segment: Segment) -> ValidationError {
    ValidationError::new(value, message, Trace::root(segment))
}

/// Re-anchors an inner failure under an `Optional` wrapper.
fn wrap_optional(inner: ValidationError) -> ValidationError {
    ValidationError {
        trace: Trace::root(Segment::Optional(inner.trace)),
        ..inner
    }
}

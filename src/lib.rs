//! jsonclean - A strict, deterministic schema validation and coercion engine
//! for JSON values.
//!
//! A schema is a tree of [`Schema`] nodes: scalar leaves (strings, patterns,
//! numbers, booleans, null, dates, datetimes, constants), combinators
//! (optional presence, first-match alternatives) and containers (objects,
//! lists, tuples). [`clean`] binds a schema and checks runtime values against
//! it, producing a coerced [`Cleaned`] tree whose types match the schema's
//! intent (numeric strings become numbers, date strings become dates), or a
//! [`ValidationError`] carrying the offending value, a message, and the path
//! trace locating the failure inside the nested structure.
//!
//! ```
//! use jsonclean::{clean, NumberType, Schema};
//! use serde_json::json;
//!
//! let cleaner = clean(Schema::object([
//!     ("name", Schema::string()),
//!     ("score", NumberType::new().min(0.0).into()),
//!     ("joined", Schema::optional(Schema::date())),
//! ]))
//! .unwrap();
//!
//! let cleaned = cleaner
//!     .clean(&json!({"name": "Alice", "score": "42", "joined": "2020-05-01"}))
//!     .unwrap();
//! assert_eq!(cleaned.as_object().unwrap()["score"].as_int(), Some(42));
//! ```

pub mod cleaner;
pub mod errors;
pub mod schema;
pub mod trace;
pub mod types;
pub mod value;

mod walker;

pub use cleaner::{clean, Cleaner};
pub use errors::{SchemaError, ValidationError, ValidationResult};
pub use schema::Schema;
pub use trace::{Segment, Trace, TRACE_SEP};
pub use types::{
    BooleanType, Condition, ConditionResult, ConstantType, DateType, DatetimeType, NullType,
    NumberType, PatternType, ScalarType, StringType,
};
pub use value::Cleaned;

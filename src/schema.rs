//! Schema nodes: the declarative description of an expected shape.
//!
//! A schema is a tree of [`Schema`] values built once by the caller and
//! treated as read-only afterwards; nodes are safe to share across
//! concurrent validation calls. Shapes:
//! - scalar leaves (string, pattern, number, boolean, null, date, datetime,
//!   constant)
//! - combinators (optional presence, first-match alternatives)
//! - containers (object, list, tuple)

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::SchemaError;
use crate::types::{
    BooleanType, ConstantType, DateType, DatetimeType, NullType, NumberType, PatternType,
    StringType,
};

/// A schema node.
#[derive(Debug, Clone)]
pub enum Schema {
    /// Free-form string.
    String(StringType),
    /// Regex-constrained string.
    Pattern(PatternType),
    /// Numeric value with optional bounds.
    Number(NumberType),
    /// Strict or lenient boolean.
    Boolean(BooleanType),
    /// Exactly null.
    Null(NullType),
    /// Calendar date.
    Date(DateType),
    /// Date and time.
    Datetime(DatetimeType),
    /// Equality against a fixed literal.
    Constant(ConstantType),
    /// Null/absent passes; anything else must satisfy the wrapped node.
    Optional(Box<Schema>),
    /// Ordered alternatives; the first that validates and parses wins.
    Any(Vec<Schema>),
    /// Named fields in declaration order. Input keys not declared here are
    /// ignored; declared keys are required unless wrapped in `Optional`.
    Object(IndexMap<String, Schema>),
    /// Homogeneous list: empty means any list, a single element type applies
    /// to every element. More than one element type is a schema error.
    List(Vec<Schema>),
    /// Fixed-arity tuple, one node per positional slot.
    Tuple(Vec<Schema>),
}

impl Schema {
    pub fn string() -> Self {
        Schema::String(StringType::new())
    }

    /// Compiles `pattern` into a pattern-gated string node.
    pub fn pattern(pattern: &str) -> Result<Self, SchemaError> {
        Ok(Schema::Pattern(PatternType::new(pattern)?))
    }

    pub fn number() -> Self {
        Schema::Number(NumberType::new())
    }

    pub fn boolean() -> Self {
        Schema::Boolean(BooleanType::new())
    }

    pub fn null() -> Self {
        Schema::Null(NullType)
    }

    pub fn date() -> Self {
        Schema::Date(DateType::new())
    }

    pub fn datetime() -> Self {
        Schema::Datetime(DatetimeType::new())
    }

    pub fn constant(literal: impl Into<Value>) -> Self {
        Schema::Constant(ConstantType::new(literal))
    }

    pub fn optional(inner: Schema) -> Self {
        Schema::Optional(Box::new(inner))
    }

    pub fn any<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Schema>,
    {
        Schema::Any(alternatives.into_iter().collect())
    }

    /// An object schema with fields in declaration order.
    pub fn object<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Schema)>,
    {
        Schema::Object(fields.into_iter().map(|(k, s)| (k.into(), s)).collect())
    }

    /// A list whose every element must satisfy `element`.
    pub fn list(element: Schema) -> Self {
        Schema::List(vec![element])
    }

    /// A list with no element constraint.
    pub fn any_list() -> Self {
        Schema::List(Vec::new())
    }

    pub fn tuple<I>(slots: I) -> Self
    where
        I: IntoIterator<Item = Schema>,
    {
        Schema::Tuple(slots.into_iter().collect())
    }

    /// Audits the schema structure itself, recursively. Malformed structure
    /// is a programmer error, reported before any data is validated.
    pub fn check(&self) -> Result<(), SchemaError> {
        match self {
            Schema::List(elements) => {
                if elements.len() > 1 {
                    return Err(SchemaError::AmbiguousListElement(elements.len()));
                }
                elements.iter().try_for_each(Schema::check)
            }
            Schema::Any(alternatives) => {
                if alternatives.is_empty() {
                    return Err(SchemaError::EmptyAlternatives);
                }
                alternatives.iter().try_for_each(Schema::check)
            }
            Schema::Optional(inner) => inner.check(),
            Schema::Object(fields) => fields.values().try_for_each(Schema::check),
            Schema::Tuple(slots) => slots.iter().try_for_each(Schema::check),
            _ => Ok(()),
        }
    }
}

impl From<StringType> for Schema {
    fn from(t: StringType) -> Self {
        Schema::String(t)
    }
}

impl From<PatternType> for Schema {
    fn from(t: PatternType) -> Self {
        Schema::Pattern(t)
    }
}

impl From<NumberType> for Schema {
    fn from(t: NumberType) -> Self {
        Schema::Number(t)
    }
}

impl From<BooleanType> for Schema {
    fn from(t: BooleanType) -> Self {
        Schema::Boolean(t)
    }
}

impl From<NullType> for Schema {
    fn from(t: NullType) -> Self {
        Schema::Null(t)
    }
}

impl From<DateType> for Schema {
    fn from(t: DateType) -> Self {
        Schema::Date(t)
    }
}

impl From<DatetimeType> for Schema {
    fn from(t: DatetimeType) -> Self {
        Schema::Datetime(t)
    }
}

impl From<ConstantType> for Schema {
    fn from(t: ConstantType) -> Self {
        Schema::Constant(t)
    }
}

//! Coerced output values.
//!
//! A [`Cleaned`] tree is produced only after full-tree validation succeeds.
//! It mirrors the schema's container shape with every scalar leaf replaced by
//! its canonical typed form: numeric strings become numbers, date strings
//! become date values, lenient booleans become booleans.

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// A coerced value.
///
/// Serializes back to plain JSON (dates and datetimes render in their
/// ISO 8601 text form).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cleaned {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    List(Vec<Cleaned>),
    Tuple(Vec<Cleaned>),
    Object(IndexMap<String, Cleaned>),
}

impl Cleaned {
    pub fn is_null(&self) -> bool {
        matches!(self, Cleaned::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Cleaned::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cleaned::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers widen to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cleaned::Int(i) => Some(*i as f64),
            Cleaned::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cleaned::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cleaned::Date(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cleaned::Datetime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Sequence view covering both lists and tuples.
    pub fn as_list(&self) -> Option<&[Cleaned]> {
        match self {
            Cleaned::List(items) | Cleaned::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Cleaned>> {
        match self {
            Cleaned::Object(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Passthrough conversion for values that are kept as-is (constants, raw
/// literals). Integral JSON numbers become [`Cleaned::Int`], everything else
/// maps one-to-one.
impl From<&Value> for Cleaned {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Cleaned::Null,
            Value::Bool(b) => Cleaned::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cleaned::Int(i),
                None => Cleaned::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Cleaned::Str(s.clone()),
            Value::Array(items) => Cleaned::List(items.iter().map(Cleaned::from).collect()),
            Value::Object(fields) => Cleaned::Object(
                fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Cleaned::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        assert!(Cleaned::Null.is_null());
        assert_eq!(Cleaned::Bool(true).as_bool(), Some(true));
        assert_eq!(Cleaned::Int(3).as_int(), Some(3));
        assert_eq!(Cleaned::Int(3).as_float(), Some(3.0));
        assert_eq!(Cleaned::Float(1.5).as_float(), Some(1.5));
        assert_eq!(Cleaned::Str("hi".into()).as_str(), Some("hi"));
        assert_eq!(Cleaned::Int(3).as_str(), None);
    }

    #[test]
    fn test_tuple_and_list_share_sequence_view() {
        let items = vec![Cleaned::Int(1), Cleaned::Int(2)];
        assert_eq!(Cleaned::List(items.clone()).as_list(), Some(&items[..]));
        assert_eq!(Cleaned::Tuple(items.clone()).as_list(), Some(&items[..]));
    }

    #[test]
    fn test_from_value_passthrough() {
        let value = json!({"a": [1, "two", null, true]});
        let cleaned = Cleaned::from(&value);

        let object = cleaned.as_object().unwrap();
        let items = object["a"].as_list().unwrap();
        assert_eq!(items[0], Cleaned::Int(1));
        assert_eq!(items[1], Cleaned::Str("two".into()));
        assert_eq!(items[2], Cleaned::Null);
        assert_eq!(items[3], Cleaned::Bool(true));
    }

    #[test]
    fn test_serializes_back_to_json() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let mut fields = IndexMap::new();
        fields.insert("when".to_string(), Cleaned::Date(date));
        fields.insert("n".to_string(), Cleaned::Int(42));

        let rendered = serde_json::to_value(Cleaned::Object(fields)).unwrap();
        assert_eq!(rendered, json!({"when": "2000-01-01", "n": 42}));
    }
}

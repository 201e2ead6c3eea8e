//! Scalar schema types: leaf validators and coercers.
//!
//! Every scalar implements the [`ScalarType`] contract:
//! - `validate` gate-keeps the raw shape/format and never coerces
//! - `parse` converts to the canonical typed form
//! - `coerce` runs parse plus the configured condition (and bounds, for
//!   numbers)
//!
//! Date and datetime are pattern-gated parsers composed from [`PatternType`]:
//! the gate owns the shape check, the variant owns the conversion.

use std::fmt;
use std::sync::{Arc, OnceLock};

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

use crate::errors::{SchemaError, ValidationError, ValidationResult};
use crate::trace::{Segment, Trace};
use crate::value::Cleaned;

/// Outcome of a condition predicate: `Ok(true)` passes, `Ok(false)` fails
/// with the generic message, `Err(message)` fails with its own message.
pub type ConditionResult = Result<bool, String>;

const CONDITION_FALLBACK: &str = "doesn't meet the validation criterion";

/// A predicate applied to the coerced value after parsing.
///
/// Shared behind an `Arc` so configured schemas stay cloneable and safe to
/// use from concurrent validation calls.
#[derive(Clone)]
pub struct Condition(Arc<dyn Fn(&Cleaned) -> ConditionResult + Send + Sync>);

impl Condition {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    fn check(&self, value: &Cleaned) -> ConditionResult {
        (self.0)(value)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Condition(..)")
    }
}

/// Capability contract shared by every scalar schema type.
pub trait ScalarType {
    /// Trace segment identifying this scalar in failure paths.
    fn segment(&self) -> Segment;

    /// Checks the raw shape/format of `value`. Never evaluates the condition
    /// or bounds.
    fn validate(&self, value: &Value) -> ValidationResult<()>;

    /// Converts `value` into its canonical typed form. May fail even after a
    /// passing `validate` when the looser gate admits values the conversion
    /// cannot represent.
    fn parse(&self, value: &Value) -> ValidationResult<Cleaned>;

    /// The configured condition predicate, if any.
    fn predicate(&self) -> Option<&Condition> {
        None
    }

    /// Parses `value`, then applies the configured condition to the parsed
    /// form.
    fn parse_checked(&self, value: &Value) -> ValidationResult<Cleaned> {
        let parsed = self.parse(value)?;
        if let Some(condition) = self.predicate() {
            match condition.check(&parsed) {
                Ok(true) => {}
                Ok(false) => return Err(self.invalid(value, CONDITION_FALLBACK)),
                Err(message) => return Err(self.invalid(value, &message)),
            }
        }
        Ok(parsed)
    }

    /// Full coercion: parse, condition, and any variant-specific post checks.
    fn coerce(&self, value: &Value) -> ValidationResult<Cleaned> {
        self.parse_checked(value)
    }

    /// Builds a failure anchored at this scalar.
    fn invalid(&self, value: &Value, message: &str) -> ValidationError {
        ValidationError::new(value, message, Trace::root(self.segment()))
    }
}

// ---------------------------------------------------------------------------
// String
// ---------------------------------------------------------------------------

/// Free-form string. Strict (the default) requires text input; lenient
/// stringifies anything.
#[derive(Debug, Clone)]
pub struct StringType {
    strict: bool,
    condition: Option<Condition>,
}

impl StringType {
    pub fn new() -> Self {
        Self {
            strict: true,
            condition: None,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }
}

impl Default for StringType {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarType for StringType {
    fn segment(&self) -> Segment {
        Segment::Variant("String")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if self.strict && !value.is_string() {
            return Err(self.invalid(value, "is not a string"));
        }
        Ok(())
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        let text = match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Ok(Cleaned::Str(text))
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Pattern
// ---------------------------------------------------------------------------

/// Pattern-gated string: input must be text matching `pattern` from its
/// first character. Parses to the text unchanged.
#[derive(Debug, Clone)]
pub struct PatternType {
    pattern: String,
    regex: Regex,
    condition: Option<Condition>,
}

impl PatternType {
    /// Compiles `pattern`, anchored at the start of the input.
    pub fn new(pattern: &str) -> Result<Self, SchemaError> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            condition: None,
        })
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }

    fn mismatch(&self, value: &Value) -> ValidationError {
        self.invalid(value, &format!("doesn't match pattern {}", self.pattern))
    }
}

impl ScalarType for PatternType {
    fn segment(&self) -> Segment {
        Segment::Variant("Pattern")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        match value.as_str() {
            Some(text) if self.regex.is_match(text) => Ok(()),
            _ => Err(self.mismatch(value)),
        }
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        match value.as_str() {
            Some(text) => Ok(Cleaned::Str(text.to_string())),
            None => Err(self.mismatch(value)),
        }
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Number
// ---------------------------------------------------------------------------

/// Numeric-literal gate for lenient string input: unsigned, no exponent.
fn numeric_gate() -> &'static Regex {
    static GATE: OnceLock<Regex> = OnceLock::new();
    GATE.get_or_init(|| Regex::new(r"^\d+(\.\d+)?$").expect("numeric gate compiles"))
}

/// Numeric value with optional inclusive bounds. Lenient (the default) also
/// accepts numeric-looking strings; strict rejects any text.
#[derive(Debug, Clone)]
pub struct NumberType {
    min: Option<f64>,
    max: Option<f64>,
    strict: bool,
    condition: Option<Condition>,
}

impl NumberType {
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
            strict: false,
            condition: None,
        }
    }

    /// Inclusive lower bound on the parsed value.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound on the parsed value.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }
}

impl Default for NumberType {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarType for NumberType {
    fn segment(&self) -> Segment {
        Segment::Variant("Number")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if value.is_number() {
            return Ok(());
        }
        if self.strict {
            return Err(self.invalid(value, "is not a number"));
        }
        let text = match value.as_str() {
            Some(text) => text,
            None => return Err(self.invalid(value, "is not a number")),
        };
        if !numeric_gate().is_match(text) {
            return Err(self.invalid(value, "is not a validly formatted number"));
        }
        Ok(())
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        let parsed = match value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| self.invalid(value, "is not a validly formatted number"))?,
            Value::String(s) => s
                .parse::<f64>()
                .map_err(|_| self.invalid(value, "is not a validly formatted number"))?,
            _ => return Err(self.invalid(value, "is not a number")),
        };
        // Integral values normalize to integer form.
        if parsed.fract() == 0.0 && parsed >= i64::MIN as f64 && parsed <= i64::MAX as f64 {
            Ok(Cleaned::Int(parsed as i64))
        } else {
            Ok(Cleaned::Float(parsed))
        }
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }

    fn coerce(&self, value: &Value) -> ValidationResult<Cleaned> {
        let parsed = self.parse_checked(value)?;
        let numeric = match &parsed {
            Cleaned::Int(i) => *i as f64,
            Cleaned::Float(f) => *f,
            _ => return Ok(parsed),
        };
        if let Some(min) = self.min {
            if numeric < min {
                return Err(self.invalid(value, &format!("is less than the minimum: {}", min)));
            }
        }
        if let Some(max) = self.max {
            if numeric > max {
                return Err(self.invalid(value, &format!("is greater than the maximum: {}", max)));
            }
        }
        Ok(parsed)
    }
}

// ---------------------------------------------------------------------------
// Null
// ---------------------------------------------------------------------------

/// Exactly the null sentinel.
#[derive(Debug, Clone, Default)]
pub struct NullType;

impl ScalarType for NullType {
    fn segment(&self) -> Segment {
        Segment::Variant("Null")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if value.is_null() {
            Ok(())
        } else {
            Err(self.invalid(value, "is not null"))
        }
    }

    fn parse(&self, _value: &Value) -> ValidationResult<Cleaned> {
        Ok(Cleaned::Null)
    }
}

// ---------------------------------------------------------------------------
// Date
// ---------------------------------------------------------------------------

/// Gate for `YYYY-MM-DD`.
pub const DATE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";

/// Calendar date in `YYYY-MM-DD` form, parsed to [`NaiveDate`].
///
/// The gate only checks the digit layout; parse rejects dates that do not
/// exist on the calendar.
#[derive(Debug, Clone)]
pub struct DateType {
    gate: PatternType,
    condition: Option<Condition>,
}

impl DateType {
    pub fn new() -> Self {
        Self {
            gate: PatternType::new(DATE_PATTERN).expect("date gate compiles"),
            condition: None,
        }
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }
}

impl Default for DateType {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarType for DateType {
    fn segment(&self) -> Segment {
        Segment::Variant("Date")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.gate
            .validate(value)
            .map_err(|e| self.invalid(value, &e.message))
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        let text = value
            .as_str()
            .ok_or_else(|| self.invalid(value, "is an invalid date"))?;
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Cleaned::Date)
            .map_err(|_| self.invalid(value, "is an invalid date"))
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Datetime
// ---------------------------------------------------------------------------

/// Gate for `YYYY-MM-DDTHH:MM:SS`, optional fraction, optional `Z` marker.
pub const DATETIME_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d*)?Z?$";

/// Parse attempts, in order: seconds-only, fractional seconds, fractional
/// seconds with the zone marker. First that parses wins.
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.fZ",
];

/// Date and time, parsed to [`NaiveDateTime`]. The `Z` marker is treated as
/// a literal, not an offset.
#[derive(Debug, Clone)]
pub struct DatetimeType {
    gate: PatternType,
    condition: Option<Condition>,
}

impl DatetimeType {
    pub fn new() -> Self {
        Self {
            gate: PatternType::new(DATETIME_PATTERN).expect("datetime gate compiles"),
            condition: None,
        }
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }
}

impl Default for DatetimeType {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarType for DatetimeType {
    fn segment(&self) -> Segment {
        Segment::Variant("Datetime")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.gate
            .validate(value)
            .map_err(|e| self.invalid(value, &e.message))
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        let text = value
            .as_str()
            .ok_or_else(|| self.invalid(value, "is an invalid datetime"))?;
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(Cleaned::Datetime)
            .ok_or_else(|| self.invalid(value, "is an invalid datetime"))
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Boolean
// ---------------------------------------------------------------------------

const TRUE_TOKENS: [&str; 5] = ["yes", "True", "true", "t", "1"];
const FALSE_TOKENS: [&str; 5] = ["no", "False", "false", "f", "0"];

fn is_true_token(value: &Value) -> bool {
    match value {
        Value::String(s) => TRUE_TOKENS.contains(&s.as_str()),
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

fn is_false_token(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => FALSE_TOKENS.contains(&s.as_str()),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Boolean literal. Strict (the default) accepts only `true`/`false`;
/// lenient also maps a fixed token set, with null counting as false.
#[derive(Debug, Clone)]
pub struct BooleanType {
    strict: bool,
    condition: Option<Condition>,
}

impl BooleanType {
    pub fn new() -> Self {
        Self {
            strict: true,
            condition: None,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn condition<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Cleaned) -> ConditionResult + Send + Sync + 'static,
    {
        self.condition = Some(Condition::new(predicate));
        self
    }
}

impl Default for BooleanType {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarType for BooleanType {
    fn segment(&self) -> Segment {
        Segment::Variant("Boolean")
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if value.is_boolean() {
            return Ok(());
        }
        if self.strict {
            return Err(self.invalid(value, "is not boolean"));
        }
        if is_true_token(value) || is_false_token(value) {
            Ok(())
        } else {
            Err(self.invalid(value, "can't be interpreted as boolean"))
        }
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        let parsed = match value {
            Value::Bool(b) => *b,
            // Anything that is not a false token reads as true.
            v => !is_false_token(v),
        };
        Ok(Cleaned::Bool(parsed))
    }

    fn predicate(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Constant
// ---------------------------------------------------------------------------

/// Equality against a fixed literal.
#[derive(Debug, Clone)]
pub struct ConstantType {
    literal: Value,
}

impl ConstantType {
    pub fn new(literal: impl Into<Value>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    pub fn literal(&self) -> &Value {
        &self.literal
    }

    fn repr(&self) -> String {
        match &self.literal {
            Value::String(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }
}

impl ScalarType for ConstantType {
    fn segment(&self) -> Segment {
        Segment::Constant(self.repr())
    }

    fn validate(&self, value: &Value) -> ValidationResult<()> {
        if *value == self.literal {
            Ok(())
        } else {
            Err(self.invalid(value, &format!("is not equal to {}", self.repr())))
        }
    }

    fn parse(&self, value: &Value) -> ValidationResult<Cleaned> {
        Ok(Cleaned::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_strict_rejects_non_text() {
        let strict = StringType::new();
        assert!(strict.validate(&json!("hello")).is_ok());
        assert!(strict.validate(&json!(1)).is_err());
        assert_eq!(
            strict.validate(&json!(1)).unwrap_err().message,
            "is not a string"
        );
    }

    #[test]
    fn test_string_lenient_stringifies_anything() {
        let lenient = StringType::new().strict(false);
        assert!(lenient.validate(&json!(12)).is_ok());
        assert_eq!(lenient.parse(&json!(12)).unwrap(), Cleaned::Str("12".into()));
        assert_eq!(
            lenient.parse(&json!(true)).unwrap(),
            Cleaned::Str("true".into())
        );
        assert_eq!(
            lenient.parse(&json!("as-is")).unwrap(),
            Cleaned::Str("as-is".into())
        );
    }

    #[test]
    fn test_pattern_matches_from_start() {
        let pattern = PatternType::new(r"\d{3}").unwrap();
        assert!(pattern.validate(&json!("123x")).is_ok());
        assert!(pattern.validate(&json!("x123")).is_err());
        assert!(pattern.validate(&json!(123)).is_err());
    }

    #[test]
    fn test_pattern_mismatch_names_pattern() {
        let pattern = PatternType::new(r"\d{3}").unwrap();
        let err = pattern.validate(&json!("ab")).unwrap_err();
        assert_eq!(err.message, r"doesn't match pattern \d{3}");
    }

    #[test]
    fn test_bad_pattern_is_a_schema_error() {
        assert!(PatternType::new(r"(unclosed").is_err());
    }

    #[test]
    fn test_number_accepts_numbers_and_numeric_strings() {
        let number = NumberType::new();
        assert!(number.validate(&json!(3)).is_ok());
        assert!(number.validate(&json!(3.5)).is_ok());
        assert!(number.validate(&json!("1234")).is_ok());
        assert!(number.validate(&json!("12.5")).is_ok());
    }

    #[test]
    fn test_number_rejects_malformed_strings() {
        let number = NumberType::new();
        let err = number.validate(&json!("abc")).unwrap_err();
        assert_eq!(err.message, "is not a validly formatted number");
        // Signs and exponents are outside the gate.
        assert!(number.validate(&json!("-1")).is_err());
        assert!(number.validate(&json!("1e5")).is_err());
        assert!(number.validate(&json!(true)).is_err());
    }

    #[test]
    fn test_number_strict_rejects_text() {
        let strict = NumberType::new().strict(true);
        assert!(strict.validate(&json!(3)).is_ok());
        let err = strict.validate(&json!("1234")).unwrap_err();
        assert_eq!(err.message, "is not a number");
    }

    #[test]
    fn test_number_parse_normalizes_integral_floats() {
        let number = NumberType::new();
        assert_eq!(number.parse(&json!("1234")).unwrap(), Cleaned::Int(1234));
        assert_eq!(number.parse(&json!(2.0)).unwrap(), Cleaned::Int(2));
        assert_eq!(number.parse(&json!("12.5")).unwrap(), Cleaned::Float(12.5));
    }

    #[test]
    fn test_number_bounds_produce_distinct_messages() {
        let bounded = NumberType::new().min(0.0).max(10.0);
        let err = bounded.coerce(&json!(-1)).unwrap_err();
        assert_eq!(err.message, "is less than the minimum: 0");
        let err = bounded.coerce(&json!(11)).unwrap_err();
        assert_eq!(err.message, "is greater than the maximum: 10");
        assert_eq!(bounded.coerce(&json!(10)).unwrap(), Cleaned::Int(10));
    }

    #[test]
    fn test_condition_runs_on_parsed_value() {
        let even = NumberType::new().condition(|v| Ok(v.as_int().map_or(false, |i| i % 2 == 0)));
        assert_eq!(even.coerce(&json!("42")).unwrap(), Cleaned::Int(42));
        let err = even.coerce(&json!("43")).unwrap_err();
        assert_eq!(err.message, "doesn't meet the validation criterion");
    }

    #[test]
    fn test_condition_custom_message() {
        let named = StringType::new().condition(|v| {
            if v.as_str().map_or(false, |s| s.len() >= 3) {
                Ok(true)
            } else {
                Err("needs at least 3 characters".to_string())
            }
        });
        let err = named.coerce(&json!("ab")).unwrap_err();
        assert_eq!(err.message, "needs at least 3 characters");
    }

    #[test]
    fn test_null_accepts_only_null() {
        let null = NullType;
        assert!(null.validate(&json!(null)).is_ok());
        assert!(null.validate(&json!(0)).is_err());
        assert_eq!(null.parse(&json!(null)).unwrap(), Cleaned::Null);
    }

    #[test]
    fn test_date_parses_real_dates_only() {
        let date = DateType::new();
        assert!(date.validate(&json!("2000-01-01")).is_ok());
        assert!(date.validate(&json!("2000-1-1")).is_err());
        assert!(date.validate(&json!("not-a-date")).is_err());

        let parsed = date.parse(&json!("2000-01-01")).unwrap();
        assert_eq!(
            parsed.as_date(),
            Some(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())
        );

        // Matches the gate, does not exist on the calendar.
        assert!(date.validate(&json!("2000-02-30")).is_ok());
        let err = date.parse(&json!("2000-02-30")).unwrap_err();
        assert_eq!(err.message, "is an invalid date");
    }

    #[test]
    fn test_datetime_tries_formats_in_order() {
        let datetime = DatetimeType::new();
        for text in [
            "2000-01-02T10:10:10",
            "2000-01-02T10:10:10.123",
            "2000-01-02T10:10:10.123Z",
        ] {
            assert!(datetime.validate(&json!(text)).is_ok(), "{}", text);
            assert!(datetime.parse(&json!(text)).is_ok(), "{}", text);
        }

        let parsed = datetime.parse(&json!("2000-01-02T10:10:10.123Z")).unwrap();
        let expected = NaiveDate::from_ymd_opt(2000, 1, 2)
            .unwrap()
            .and_hms_milli_opt(10, 10, 10, 123)
            .unwrap();
        assert_eq!(parsed.as_datetime(), Some(expected));
    }

    #[test]
    fn test_datetime_rejects_impossible_instants() {
        let datetime = DatetimeType::new();
        assert!(datetime.validate(&json!("2000-01-02 10:10:10")).is_err());
        // Gate passes, no format parses hour 25.
        assert!(datetime.validate(&json!("2000-01-02T25:10:10")).is_ok());
        let err = datetime.parse(&json!("2000-01-02T25:10:10")).unwrap_err();
        assert_eq!(err.message, "is an invalid datetime");
    }

    #[test]
    fn test_boolean_strict_accepts_literals_only() {
        let strict = BooleanType::new();
        assert!(strict.validate(&json!(true)).is_ok());
        assert!(strict.validate(&json!(false)).is_ok());
        assert_eq!(
            strict.validate(&json!("yes")).unwrap_err().message,
            "is not boolean"
        );
        assert!(strict.validate(&json!(1)).is_err());
    }

    #[test]
    fn test_boolean_lenient_maps_token_set() {
        let lenient = BooleanType::new().strict(false);
        for truthy in [json!("yes"), json!("True"), json!("t"), json!("1"), json!(1)] {
            assert!(lenient.validate(&truthy).is_ok(), "{}", truthy);
            assert_eq!(lenient.parse(&truthy).unwrap(), Cleaned::Bool(true));
        }
        for falsy in [json!("no"), json!("f"), json!("0"), json!(0), json!(null)] {
            assert!(lenient.validate(&falsy).is_ok(), "{}", falsy);
            assert_eq!(lenient.parse(&falsy).unwrap(), Cleaned::Bool(false));
        }
        let err = lenient.validate(&json!("maybe")).unwrap_err();
        assert_eq!(err.message, "can't be interpreted as boolean");
    }

    #[test]
    fn test_constant_checks_value_equality() {
        let constant = ConstantType::new("FOO");
        assert!(constant.validate(&json!("FOO")).is_ok());
        let err = constant.validate(&json!("BAR")).unwrap_err();
        assert_eq!(err.message, "is not equal to 'FOO'");
        assert_eq!(err.trace.to_string(), "Constant('FOO')");

        let number = ConstantType::new(3);
        assert!(number.validate(&json!(3)).is_ok());
        assert_eq!(number.parse(&json!(3)).unwrap(), Cleaned::Int(3));
    }
}

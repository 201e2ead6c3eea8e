//! Failure traces: typed path segments from the schema root to the failing
//! node.
//!
//! A trace is an ordered, outermost-to-innermost list of [`Segment`]s. It is
//! built bottom-up while a failure unwinds: the failing leaf anchors the
//! trace and every enclosing recursion level prepends its own segment. The
//! display form joins segments with [`TRACE_SEP`]; segment structure stays
//! available to tooling until then.

use std::fmt;

use serde::Serialize;

/// Separator between path segments in display form.
pub const TRACE_SEP: &str = " --> ";

/// One step of a failure trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Segment {
    /// A scalar leaf, labeled with its variant name (`Number`, `Date`, ...).
    Variant(&'static str),
    /// An object whose own shape failed (not an object, missing key).
    Object,
    /// Descent into an object field.
    Key(String),
    /// A list whose own shape failed.
    List,
    /// Descent into a list element.
    Index(usize),
    /// A tuple whose own shape failed (not a sequence, wrong arity).
    Tuple,
    /// Descent into a tuple slot.
    Slot(usize),
    /// An optional wrapper around an inner failure.
    Optional(Trace),
    /// A first-match combinator, carrying every alternative's trace.
    AnyOf(Vec<Trace>),
    /// A constant-equality check, carrying the rendered literal.
    Constant(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Variant(name) => write!(f, "{}", name),
            Segment::Object => write!(f, "Object"),
            Segment::Key(key) => write!(f, "Object(key:'{}')", key),
            Segment::List => write!(f, "List"),
            Segment::Index(index) => write!(f, "List(index:{})", index),
            Segment::Tuple => write!(f, "Tuple"),
            Segment::Slot(slot) => write!(f, "Tuple(index:{})", slot),
            Segment::Optional(inner) => write!(f, "Optional({})", inner),
            Segment::AnyOf(traces) => {
                write!(f, "Any(")?;
                for (i, trace) in traces.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", trace)?;
                }
                write!(f, ")")
            }
            Segment::Constant(repr) => write!(f, "Constant({})", repr),
        }
    }
}

/// Ordered path of segments identifying where a validation failure occurred.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Trace(Vec<Segment>);

impl Trace {
    /// A single-segment trace anchored at the failing node.
    pub fn root(segment: Segment) -> Self {
        Self(vec![segment])
    }

    /// Prepends an outer segment while a failure unwinds.
    pub fn prepend(&mut self, segment: Segment) {
        self.0.insert(0, segment);
    }

    /// The segments, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", TRACE_SEP)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_join_with_separator() {
        let mut trace = Trace::root(Segment::Variant("Number"));
        trace.prepend(Segment::Index(1));
        trace.prepend(Segment::Key("nest".into()));

        assert_eq!(
            trace.to_string(),
            "Object(key:'nest') --> List(index:1) --> Number"
        );
    }

    #[test]
    fn test_prepend_keeps_outermost_first() {
        let mut trace = Trace::root(Segment::Variant("String"));
        trace.prepend(Segment::Slot(0));
        trace.prepend(Segment::Index(2));

        assert_eq!(
            trace.segments(),
            &[
                Segment::Index(2),
                Segment::Slot(0),
                Segment::Variant("String"),
            ]
        );
    }

    #[test]
    fn test_optional_wraps_inner_trace() {
        let inner = Trace::root(Segment::Variant("Number"));
        let trace = Trace::root(Segment::Optional(inner));

        assert_eq!(trace.to_string(), "Optional(Number)");
    }

    #[test]
    fn test_any_of_joins_alternative_traces() {
        let traces = vec![
            Trace::root(Segment::Variant("Number")),
            Trace::root(Segment::Variant("String")),
        ];
        let trace = Trace::root(Segment::AnyOf(traces));

        assert_eq!(trace.to_string(), "Any(Number, String)");
    }

    #[test]
    fn test_constant_renders_literal() {
        let trace = Trace::root(Segment::Constant("'FOO'".into()));
        assert_eq!(trace.to_string(), "Constant('FOO')");
    }
}

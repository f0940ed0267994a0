// ============================================================================
// Operand
// Boundary classification of caller-supplied values
// ============================================================================

use crate::numeric::Number;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a caller-supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperandKind {
    Integer,
    Float,
    Boolean,
    /// Absence of a value
    Null,
    Text,
    Tuple,
    List,
    Set,
    Dict,
}

impl OperandKind {
    /// Lowercase name used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperandKind::Integer => "integer",
            OperandKind::Float => "float",
            OperandKind::Boolean => "boolean",
            OperandKind::Null => "null",
            OperandKind::Text => "text",
            OperandKind::Tuple => "tuple",
            OperandKind::List => "list",
            OperandKind::Set => "set",
            OperandKind::Dict => "dict",
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a value that is neither a number nor a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherKind {
    Null,
    Text,
    Tuple,
    List,
    Set,
    Dict,
}

impl From<OtherKind> for OperandKind {
    fn from(kind: OtherKind) -> Self {
        match kind {
            OtherKind::Null => OperandKind::Null,
            OtherKind::Text => OperandKind::Text,
            OtherKind::Tuple => OperandKind::Tuple,
            OtherKind::List => OperandKind::List,
            OtherKind::Set => OperandKind::Set,
            OtherKind::Dict => OperandKind::Dict,
        }
    }
}

/// A value handed to the calculator, classified before use.
///
/// Only `Integer` and `Float` are numeric. `Boolean` is kept as its own
/// variant so it can never pass as an integer. Everything else collapses into
/// `Other`, which only remembers what kind of value it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Other(OtherKind),
}

impl Operand {
    /// The null operand.
    pub const NULL: Operand = Operand::Other(OtherKind::Null);

    /// Kind of this operand.
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Integer(_) => OperandKind::Integer,
            Operand::Float(_) => OperandKind::Float,
            Operand::Boolean(_) => OperandKind::Boolean,
            Operand::Other(kind) => (*kind).into(),
        }
    }

    /// Check if this operand is a boolean.
    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Operand::Boolean(_))
    }

    /// Check if this operand is an integer or a float.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Operand::Integer(_) | Operand::Float(_))
    }

    /// The numeric value, if any.
    pub fn as_number(&self) -> Option<Number> {
        match *self {
            Operand::Integer(i) => Some(Number::Integer(i)),
            Operand::Float(f) => Some(Number::Float(f)),
            Operand::Boolean(_) | Operand::Other(_) => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Integer(i) => write!(f, "{}", i),
            Operand::Float(x) => write!(f, "{}", Number::Float(*x)),
            Operand::Boolean(b) => write!(f, "{}", b),
            Operand::Other(kind) => write!(f, "<{}>", OperandKind::from(*kind)),
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

impl From<Number> for Operand {
    fn from(value: Number) -> Self {
        match value {
            Number::Integer(i) => Operand::Integer(i),
            Number::Float(f) => Operand::Float(f),
        }
    }
}

macro_rules! integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_operand!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    i64::try_from(value)
                        .map(Operand::Integer)
                        .unwrap_or(Operand::Float(value as f64))
                }
            }
        )*
    };
}

wide_integer_operand!(u64, i128, u128, isize, usize);

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Boolean(value)
    }
}

impl From<&str> for Operand {
    fn from(_: &str) -> Self {
        Operand::Other(OtherKind::Text)
    }
}

impl From<String> for Operand {
    fn from(_: String) -> Self {
        Operand::Other(OtherKind::Text)
    }
}

impl From<char> for Operand {
    fn from(_: char) -> Self {
        Operand::Other(OtherKind::Text)
    }
}

impl From<()> for Operand {
    fn from(_: ()) -> Self {
        Operand::Other(OtherKind::Tuple)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Operand::NULL)
    }
}

impl<A, B> From<(A, B)> for Operand {
    fn from(_: (A, B)) -> Self {
        Operand::Other(OtherKind::Tuple)
    }
}

impl<T> From<Vec<T>> for Operand {
    fn from(_: Vec<T>) -> Self {
        Operand::Other(OtherKind::List)
    }
}

impl<T> From<&[T]> for Operand {
    fn from(_: &[T]) -> Self {
        Operand::Other(OtherKind::List)
    }
}

impl<T, S> From<HashSet<T, S>> for Operand {
    fn from(_: HashSet<T, S>) -> Self {
        Operand::Other(OtherKind::Set)
    }
}

impl<T> From<BTreeSet<T>> for Operand {
    fn from(_: BTreeSet<T>) -> Self {
        Operand::Other(OtherKind::Set)
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for Operand {
    fn from(_: HashMap<K, V, S>) -> Self {
        Operand::Other(OtherKind::Dict)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Operand {
    fn from(_: BTreeMap<K, V>) -> Self {
        Operand::Other(OtherKind::Dict)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Operand {
    fn from(value: serde_json::Value) -> Self {
        Operand::from(&value)
    }
}

#[cfg(feature = "serde")]
impl From<&serde_json::Value> for Operand {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Operand::NULL,
            Value::Bool(b) => Operand::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Operand::Integer(i),
                None => Operand::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(_) => Operand::Other(OtherKind::Text),
            Value::Array(_) => Operand::Other(OtherKind::List),
            Value::Object(_) => Operand::Other(OtherKind::Dict),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_classification() {
        assert_eq!(Operand::from(5), Operand::Integer(5));
        assert_eq!(Operand::from(5u8), Operand::Integer(5));
        assert_eq!(Operand::from(2.5), Operand::Float(2.5));
        assert_eq!(Operand::from(0.5f32), Operand::Float(0.5));
        assert!(Operand::from(-3i64).is_numeric());
    }

    #[test]
    fn test_wide_integers_fall_back_to_float() {
        assert_eq!(Operand::from(7usize), Operand::Integer(7));
        assert_eq!(Operand::from(u64::MAX), Operand::Float(u64::MAX as f64));
    }

    #[test]
    fn test_boolean_is_not_numeric() {
        let t = Operand::from(true);
        assert!(t.is_boolean());
        assert!(!t.is_numeric());
        assert_eq!(t.as_number(), None);
        assert_eq!(t.kind(), OperandKind::Boolean);
    }

    #[test]
    fn test_other_kinds() {
        let cases: Vec<(Operand, OperandKind)> = vec![
            (Operand::from(None::<i64>), OperandKind::Null),
            (Operand::from(""), OperandKind::Text),
            (Operand::from(String::from("text")), OperandKind::Text),
            (Operand::from(()), OperandKind::Tuple),
            (Operand::from((0, "n")), OperandKind::Tuple),
            (Operand::from(Vec::<i64>::new()), OperandKind::List),
            (Operand::from(vec![0, 1, 2]), OperandKind::List),
            (Operand::from(HashSet::<i64>::new()), OperandKind::Set),
            (Operand::from(BTreeSet::from([0, 1, 2])), OperandKind::Set),
            (Operand::from(HashMap::<String, String>::new()), OperandKind::Dict),
            (Operand::from(BTreeMap::from([("key", "value")])), OperandKind::Dict),
        ];

        for (operand, kind) in cases {
            assert_eq!(operand.kind(), kind);
            assert!(!operand.is_numeric(), "{} classified numeric", kind);
            assert_eq!(operand.as_number(), None);
        }
    }

    #[test]
    fn test_other_never_reports_a_numeric_or_boolean_kind() {
        for kind in [
            OtherKind::Null,
            OtherKind::Text,
            OtherKind::Tuple,
            OtherKind::List,
            OtherKind::Set,
            OtherKind::Dict,
        ] {
            let operand = Operand::Other(kind);
            assert!(!operand.is_numeric());
            assert!(!operand.is_boolean());
            assert!(!matches!(
                operand.kind(),
                OperandKind::Integer | OperandKind::Float | OperandKind::Boolean
            ));
        }
    }

    #[test]
    fn test_option_classifies_inner_value() {
        assert_eq!(Operand::from(Some(4)), Operand::Integer(4));
        assert_eq!(Operand::from(Some(true)), Operand::Boolean(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Operand::from(3).to_string(), "3");
        assert_eq!(Operand::from(3.0).to_string(), "3.0");
        assert_eq!(Operand::from(false).to_string(), "false");
        assert_eq!(Operand::NULL.to_string(), "<null>");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_classification() {
        use serde_json::json;

        assert_eq!(Operand::from(json!(null)).kind(), OperandKind::Null);
        assert_eq!(Operand::from(json!(true)).kind(), OperandKind::Boolean);
        assert_eq!(Operand::from(json!(3)), Operand::Integer(3));
        assert_eq!(Operand::from(json!(2.5)), Operand::Float(2.5));
        assert_eq!(Operand::from(json!("n")).kind(), OperandKind::Text);
        assert_eq!(Operand::from(json!([0, 1])).kind(), OperandKind::List);
        assert_eq!(Operand::from(json!({"key": "value"})).kind(), OperandKind::Dict);
    }
}

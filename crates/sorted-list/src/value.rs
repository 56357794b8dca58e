//! Element values and the two builtin orders.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortedListError;

/// Element type tag of a list. Locked once set.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Integer,
    Text,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Integer => "integer",
            ElementKind::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = SortedListError;

    /// Accepts `integer`, `int`, `number`, `text`, `string`, `str`
    /// (ASCII case-insensitive).
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "integer" | "int" | "number" => Ok(ElementKind::Integer),
            "text" | "string" | "str" => Ok(ElementKind::Text),
            _ => Err(SortedListError::InvalidKind(tag.to_string())),
        }
    }
}

/// Owned element stored in a list node.
///
/// Serializes untagged: integers as numbers, text as strings.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::Integer(_) => ElementKind::Integer,
            Value::Text(_) => ElementKind::Text,
        }
    }

    pub fn as_value_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Integer(n) => ValueRef::Integer(*n),
            Value::Text(s) => ValueRef::Text(s),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Integer(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_value_ref().fmt(f)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<ValueRef<'_>> for Value {
    fn from(v: ValueRef<'_>) -> Self {
        match v {
            ValueRef::Integer(n) => Value::Integer(n),
            ValueRef::Text(s) => Value::Text(s.to_string()),
        }
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(*other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Borrowed view of a value, used for lookups so queries never allocate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueRef<'a> {
    Integer(i64),
    Text(&'a str),
}

impl ValueRef<'_> {
    pub fn kind(&self) -> ElementKind {
        match self {
            ValueRef::Integer(_) => ElementKind::Integer,
            ValueRef::Text(_) => ElementKind::Text,
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Integer(n) => write!(f, "{n}"),
            ValueRef::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for ValueRef<'_> {
    fn from(n: i64) -> Self {
        ValueRef::Integer(n)
    }
}

impl From<i32> for ValueRef<'_> {
    fn from(n: i32) -> Self {
        ValueRef::Integer(n as i64)
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(s: &'a str) -> Self {
        ValueRef::Text(s)
    }
}

impl<'a> From<&'a String> for ValueRef<'a> {
    fn from(s: &'a String) -> Self {
        ValueRef::Text(s.as_str())
    }
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(v: &'a Value) -> Self {
        v.as_value_ref()
    }
}

/// Orders two values of the same kind: numeric for integers, byte-wise
/// lexicographic for text.
///
/// Returns `None` when the kinds differ; callers treat that as "no match".
pub fn compare(a: ValueRef<'_>, b: ValueRef<'_>) -> Option<Ordering> {
    match (a, b) {
        (ValueRef::Integer(x), ValueRef::Integer(y)) => Some(x.cmp(&y)),
        (ValueRef::Text(x), ValueRef::Text(y)) => Some(x.as_bytes().cmp(y.as_bytes())),
        _ => None,
    }
}

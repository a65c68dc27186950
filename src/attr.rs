//! Attribute payload types for graphs without caller-defined payloads.
//!
//! Most callers parameterize the graph types with their own structs. For the
//! cases where no payload is wanted, or where a loosely typed bag of named
//! values is enough, this module provides [`NoAttr`] and [`AttrMap`].

use std::collections::BTreeMap;

/// Zero-sized placeholder attribute for nodes or edges without payloads.
///
/// # Example
///
/// ```
/// # use ungraph::{DenseGraph, NoAttr};
/// let mut graph = DenseGraph::<NoAttr, NoAttr>::new();
/// let a = graph.add_node(NoAttr);
/// let b = graph.add_node(NoAttr);
/// graph.add_edge(a, b, NoAttr);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoAttr;

/// A string-keyed heterogeneous attribute mapping.
///
/// Usable as a default payload type when a caller does not want to define
/// their own.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// A dynamically typed attribute value, as stored in an [`AttrMap`].
///
/// The variants cover the payload kinds the loosely typed map supports.
///
/// # Example
///
/// ```
/// use ungraph::AttrValue;
///
/// let name: AttrValue = "wire".into();
/// let weight: AttrValue = 7i64.into();
///
/// assert_eq!(name.as_str(), Some("wire"));
/// assert_eq!(weight.as_int(), Some(7));
/// assert_eq!(weight.as_str(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point number.
    Float(f64),
    /// UTF-8 string.
    Str(String),
}

impl AttrValue {
    /// Returns the value as a boolean if it is one.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if it is one.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float if it is one.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is one.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttrValue {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for AttrValue {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for AttrValue {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for AttrValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for AttrValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn conversions_round_trip() {
        assert_eq!(AttrValue::from(true).as_bool(), Some(true));
        assert_eq!(AttrValue::from(42i64).as_int(), Some(42));
        assert_eq!(AttrValue::from(2.5f64).as_float(), Some(2.5));
        assert_eq!(AttrValue::from("hello").as_str(), Some("hello"));
    }

    #[test]
    fn accessors_reject_other_variants() {
        let i = AttrValue::from(3i64);
        assert_eq!(i.as_bool(), None);
        assert_eq!(i.as_float(), None);
        assert_eq!(i.as_str(), None);
    }

    #[test]
    fn attr_map_keeps_key_order() {
        let mut attrs = AttrMap::new();
        attrs.insert("b".to_owned(), 1i64.into());
        attrs.insert("a".to_owned(), 2i64.into());
        let keys: Vec<_> = attrs.keys().cloned().collect();
        assert_eq!(keys, ["a", "b"]);
    }
}

//! Normalized response trees.
//!
//! Responses from the reporting API are deeply nested and inconsistently
//! shaped: a field holding "the events of the day" is an object when there is
//! one event and an array when there are several. [`flatten`] rewrites a
//! decoded body into a [`Node`] tree made only of scalars, maps and lists, and
//! [`OneOrMany`] lets search code treat both shapes through one path.
//!
//! # Example
//!
//! ```rust
//! use flurry_api::metrics::{flatten, Node};
//! use serde_json::json;
//!
//! let single = flatten(json!({"event": {"@eventName": "Login"}}));
//! let many = flatten(json!({"event": [{"@eventName": "Login"}]}));
//!
//! let names = |node: &Node| -> Vec<String> {
//!     node.get("event")
//!         .and_then(Node::one_or_many)
//!         .map(|events| {
//!             events
//!                 .iter()
//!                 .filter_map(|event| event.get("@eventName").and_then(Node::as_str))
//!                 .map(String::from)
//!                 .collect()
//!         })
//!         .unwrap_or_default()
//! };
//!
//! assert_eq!(names(&single), names(&many));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value};

/// A map level of a normalized tree.
pub type NodeMap = BTreeMap<String, Node>;

/// A leaf value of a normalized tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number.
    Number(Number),
    /// JSON string.
    String(String),
}

impl Scalar {
    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer.
    ///
    /// The API sends most counters as numeric strings, so strings holding an
    /// integer are converted too.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => n.as_i64(),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns the value as a float, accepting numeric strings.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => n.as_f64(),
            Self::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Returns `true` if this scalar's text equals `text`.
    ///
    /// Numbers compare by their JSON representation.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Self::String(s) => s == text,
            Self::Number(n) => n.to_string() == text,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Null => Self::Null,
            Scalar::Bool(b) => Self::Bool(b),
            Scalar::Number(n) => Self::Number(n),
            Scalar::String(s) => Self::String(s),
        }
    }
}

/// A node of a normalized response tree.
///
/// Objects become [`Node::Map`], arrays stay ordered [`Node::List`]s so a
/// single object and a collection of objects remain distinguishable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// A leaf value.
    Scalar(Scalar),
    /// An object, keys in canonical order.
    Map(NodeMap),
    /// An array, in original order.
    List(Vec<Node>),
}

impl Node {
    /// Returns the child at `key` if this node is a map.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_map()?.get(key)
    }

    /// Follows a path of map keys from this node.
    #[must_use]
    pub fn pointer(&self, path: &[&str]) -> Option<&Self> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    /// Returns the map if this node is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&NodeMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the list if this node is one.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the scalar if this node is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the string if this node is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar()?.as_str()
    }

    /// Returns `true` if this node is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Views a container as one-or-many.
    ///
    /// A map is [`OneOrMany::Single`], a list is [`OneOrMany::Many`] of its
    /// elements. Scalars have no such view.
    #[must_use]
    pub fn one_or_many(&self) -> Option<OneOrMany<&Self>> {
        match self {
            Self::Map(_) => Some(OneOrMany::Single(self)),
            Self::List(items) => Some(OneOrMany::Many(items.iter().collect())),
            Self::Scalar(_) => None,
        }
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        flatten(value)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        match node {
            Node::Scalar(scalar) => scalar.into(),
            Node::Map(map) => Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect()),
            Node::List(items) => Self::Array(items.into_iter().map(Self::from).collect()),
        }
    }
}

/// Recursively converts a decoded body into a normalized tree.
///
/// Every object and array at every depth is converted; empty containers stay
/// empty containers.
#[must_use]
pub fn flatten(value: Value) -> Node {
    match value {
        Value::Object(map) => Node::Map(map.into_iter().map(|(k, v)| (k, flatten(v))).collect()),
        Value::Array(items) => Node::List(items.into_iter().map(flatten).collect()),
        Value::Null => Node::Scalar(Scalar::Null),
        Value::Bool(b) => Node::Scalar(Scalar::Bool(b)),
        Value::Number(n) => Node::Scalar(Scalar::Number(n)),
        Value::String(s) => Node::Scalar(Scalar::String(s)),
    }
}

/// A value that may be a single item or a collection of items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Exactly one item.
    Single(T),
    /// Zero or more items.
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Iterates the items; `Single` yields one item.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        match self {
            Self::Single(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts into a vector of items.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Single(item) => vec![item],
            Self::Many(items) => items,
        }
    }
}

impl<T> IntoIterator for OneOrMany<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(item: &str) -> Self {
        Self::Single(item.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(item: String) -> Self {
        Self::Single(item)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(items: Vec<String>) -> Self {
        Self::Many(items)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(items: Vec<&str>) -> Self {
        Self::Many(items.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(items: &[&str]) -> Self {
        Self::Many(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(items: [&str; N]) -> Self {
        Self::Many(items.iter().map(|s| (*s).to_string()).collect())
    }
}

//! Tag values and the tag map produced by the parser.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// The value(s) recorded for one tag name.
///
/// A tag seen once is a `Scalar`. Seeing the same tag again turns it into a
/// `Multi` holding every occurrence in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    /// Single occurrence: `@since 1.2`
    Scalar(String),

    /// Repeated tag: `@throws A` followed by `@throws B`
    Multi(Vec<String>),
}

impl TagValue {
    /// The value when the tag occurred exactly once.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            TagValue::Scalar(s) => Some(s),
            TagValue::Multi(_) => None,
        }
    }

    /// All occurrences as a slice, regardless of shape.
    pub fn values(&self) -> &[String] {
        match self {
            TagValue::Scalar(s) => std::slice::from_ref(s),
            TagValue::Multi(values) => values,
        }
    }

    /// First occurrence in source order.
    pub fn first(&self) -> &str {
        match self {
            TagValue::Scalar(s) => s,
            TagValue::Multi(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    /// Number of occurrences.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, TagValue::Multi(_))
    }

    /// Record another occurrence of the same tag.
    pub fn push(&mut self, value: String) {
        match self {
            TagValue::Scalar(existing) => {
                let first = std::mem::take(existing);
                *self = TagValue::Multi(vec![first, value]);
            }
            TagValue::Multi(values) => values.push(value),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Scalar(s.to_string())
    }
}

/// Mapping from tag name to its value(s).
///
/// Keys are unique. Iteration is sorted by tag name so printed output is
/// stable, but callers should look tags up by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagMap {
    tags: BTreeMap<String, TagValue>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an occurrence of `name`, upgrading to `Multi` on repeats.
    pub fn append(&mut self, name: &str, value: String) {
        match self.tags.get_mut(name) {
            Some(existing) => existing.push(value),
            None => {
                self.tags.insert(name.to_string(), TagValue::Scalar(value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, TagValue> {
        self.tags.iter()
    }

    pub fn into_inner(self) -> BTreeMap<String, TagValue> {
        self.tags
    }
}

impl<'a> IntoIterator for &'a TagMap {
    type Item = (&'a String, &'a TagValue);
    type IntoIter = btree_map::Iter<'a, String, TagValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

//! Field paths: dot-separated object keys plus bracketed array indices.
//!
//! `items[0].id`, `location.name`, `[0].title` are all field paths. Paths are
//! opaque strings to the rest of the system; only the tokenizer here gives them
//! structure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One traversal step of a [`FieldPath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment<'a> {
    /// Object key lookup.
    Key(&'a str),
    /// Zero-based array index.
    Index(usize),
}

/// An immutable path addressing a location inside a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of `key` nested under this path (`parent.key`, or `key` at the root).
    pub fn child(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Path of the first element of the array at this path (`parent[0]`).
    pub fn first_element(&self) -> Self {
        Self(format!("{}[0]", self.0))
    }

    /// Tokenize the path.
    ///
    /// Splits on `.`, `[` and `]`, dropping the empty tokens adjacent
    /// delimiters produce, so `items[0].id` yields `items`, `0`, `id`. A token
    /// made only of ASCII digits is an index; anything else is a key.
    pub fn segments(&self) -> impl Iterator<Item = PathSegment<'_>> {
        segments(&self.0)
    }

    /// `true` when `other` continues this path with a `.` or `[` step.
    pub fn is_prefix_of(&self, other: &FieldPath) -> bool {
        match other.0.strip_prefix(self.0.as_str()) {
            Some(rest) => rest.starts_with('.') || rest.starts_with('['),
            None => false,
        }
    }
}

/// Tokenize a raw path string. See [`FieldPath::segments`].
pub fn segments(path: &str) -> impl Iterator<Item = PathSegment<'_>> {
    path.split(|c| matches!(c, '.' | '[' | ']'))
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.bytes().all(|b| b.is_ascii_digit()) {
                // Indices too large for usize can never be in range.
                PathSegment::Index(token.parse().unwrap_or(usize::MAX))
            } else {
                PathSegment::Key(token)
            }
        })
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl PartialEq<str> for FieldPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

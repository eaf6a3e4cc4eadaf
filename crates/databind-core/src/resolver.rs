//! Path resolution against live JSON documents.
//!
//! Resolution is total: any path against any document yields either a value
//! or `None` (not found). A non-array indexed by position, a non-object
//! looked up by key, a missing key and an out-of-range index all end the walk
//! with `None`.

use serde_json::Value;
use std::borrow::Cow;

use crate::path::{segments, PathSegment};
use crate::rules::{FormatRule, LocationSummaryRule};

/// Resolves field paths, applying an ordered list of [`FormatRule`]s.
///
/// The default resolver has no rules and returns raw values borrowed from the
/// document. A rule that fires yields an owned string instead.
#[derive(Debug, Default)]
pub struct PathResolver {
    rules: Vec<Box<dyn FormatRule>>,
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with the legacy geolocation collapse enabled.
    pub fn with_location_summary() -> Self {
        Self::new().with_rule(LocationSummaryRule)
    }

    /// Append a rule. Earlier rules take precedence.
    pub fn with_rule(mut self, rule: impl FormatRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &dyn FormatRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Resolve `path` against `root`.
    ///
    /// Rules are checked on the root and after every step; the first one that
    /// matches the current object ends the walk with its formatted string.
    pub fn resolve<'a>(&self, root: &'a Value, path: impl AsRef<str>) -> Option<Cow<'a, Value>> {
        let path = path.as_ref();
        let mut current = root;

        if let Some(collapsed) = self.collapse(current, path) {
            return Some(Cow::Owned(collapsed));
        }

        for segment in segments(path) {
            current = match (segment, current) {
                (PathSegment::Index(index), Value::Array(items)) => items.get(index)?,
                (PathSegment::Key(key), Value::Object(map)) => map.get(key)?,
                _ => return None,
            };

            if let Some(collapsed) = self.collapse(current, path) {
                return Some(Cow::Owned(collapsed));
            }
        }

        Some(Cow::Borrowed(current))
    }

    fn collapse(&self, value: &Value, path: &str) -> Option<Value> {
        let Value::Object(map) = value else {
            return None;
        };
        let rule = self.rules.iter().find(|rule| rule.matches(map))?;
        tracing::trace!(rule = rule.name(), path, "format rule collapsed value");
        Some(Value::String(rule.format(map)))
    }
}

/// Resolve with the default (rule-free) resolver.
pub fn resolve<'a>(root: &'a Value, path: impl AsRef<str>) -> Option<Cow<'a, Value>> {
    PathResolver::new().resolve(root, path)
}

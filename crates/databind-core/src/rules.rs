//! Format rules: caller-supplied collapses applied during path resolution.
//!
//! A rule looks at an object the resolver is standing on and may replace it
//! with a display string. When a rule fires, traversal stops there and the
//! remaining path segments are ignored. Rules are opt-in; a resolver without
//! rules returns raw values.

use serde_json::{Map, Value};
use std::fmt;

/// A (predicate, formatter) pair over JSON objects.
pub trait FormatRule: Send + Sync + fmt::Debug {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    fn matches(&self, object: &Map<String, Value>) -> bool;

    fn format(&self, object: &Map<String, Value>) -> String;
}

/// Collapses geolocation objects into `"<name>, <region>, <country>"`.
///
/// Fires on any object that carries all of `name`, `region`, `country`,
/// `lat`, `lon` and `localtime` (extra keys allowed). This mirrors the shape
/// weather-style APIs return for a location block.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationSummaryRule;

impl LocationSummaryRule {
    pub const KEYS: [&'static str; 6] = ["name", "region", "country", "lat", "lon", "localtime"];
}

impl FormatRule for LocationSummaryRule {
    fn name(&self) -> &str {
        "location-summary"
    }

    fn matches(&self, object: &Map<String, Value>) -> bool {
        Self::KEYS.iter().all(|key| object.contains_key(*key))
    }

    fn format(&self, object: &Map<String, Value>) -> String {
        let part = |key: &str| match object.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        format!("{}, {}, {}", part("name"), part("region"), part("country"))
    }
}

type Predicate = dyn Fn(&Map<String, Value>) -> bool + Send + Sync;
type Formatter = dyn Fn(&Map<String, Value>) -> String + Send + Sync;

/// A rule built from two closures.
pub struct FnRule {
    name: String,
    predicate: Box<Predicate>,
    formatter: Box<Formatter>,
}

impl FnRule {
    pub fn new<P, F>(name: impl Into<String>, predicate: P, formatter: F) -> Self
    where
        P: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
        F: Fn(&Map<String, Value>) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Box::new(predicate),
            formatter: Box::new(formatter),
        }
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").field("name", &self.name).finish()
    }
}

impl FormatRule for FnRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn matches(&self, object: &Map<String, Value>) -> bool {
        (self.predicate)(object)
    }

    fn format(&self, object: &Map<String, Value>) -> String {
        (self.formatter)(object)
    }
}

//! Values stored in component property bags.
//!
//! The presentation layer treats bag values as final, so the flattening of
//! JSON into display form happens here, in one place:
//! - arrays bound to a single property join into `"a, b, c"`
//! - objects become their compact JSON text
//! - scalars pass through unchanged
//!
//! Inside joined text, `null` elements render as empty strings and nested
//! arrays/objects as JSON. Integral floats print without a fraction (`11`,
//! not `11.0`).
//!
//! Multi-value bindings and static defaults keep their JSON structure
//! instead, see [`BoundValue::from_raw`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Property name → bound value.
pub type PropertyBag = BTreeMap<String, BoundValue>;

/// Separator used when an array is bound to a single-value property.
pub const LIST_SEPARATOR: &str = ", ";

/// A resolved, display-ready property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoundValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Produced by multi-value bindings and static defaults.
    List(Vec<BoundValue>),
    Object(Map<String, Value>),
}

impl BoundValue {
    /// Convert a resolved JSON value using the single-value binding rules.
    pub fn from_resolved(value: &Value) -> Self {
        match value {
            Value::Null => BoundValue::Null,
            Value::Bool(b) => BoundValue::Bool(*b),
            Value::Number(n) => BoundValue::Number(n.clone()),
            Value::String(s) => BoundValue::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => BoundValue::Text(display_string(value)),
        }
    }

    /// Structure-preserving conversion: arrays stay lists, objects stay
    /// objects.
    pub fn from_raw(value: &Value) -> Self {
        match value {
            Value::Array(items) => BoundValue::List(items.iter().map(Self::from_raw).collect()),
            Value::Object(map) => BoundValue::Object(map.clone()),
            other => Self::from_resolved(other),
        }
    }

    /// Human-readable text for this value.
    pub fn to_display_string(&self) -> String {
        match self {
            BoundValue::Null => String::new(),
            BoundValue::Bool(b) => b.to_string(),
            BoundValue::Number(n) => number_string(n),
            BoundValue::Text(s) => s.clone(),
            BoundValue::List(items) => items
                .iter()
                .map(BoundValue::to_display_string)
                .collect::<Vec<_>>()
                .join(LIST_SEPARATOR),
            BoundValue::Object(map) => Value::Object(map.clone()).to_string(),
        }
    }
}

impl From<&str> for BoundValue {
    fn from(s: &str) -> Self {
        BoundValue::Text(s.to_string())
    }
}

impl From<String> for BoundValue {
    fn from(s: String) -> Self {
        BoundValue::Text(s)
    }
}

impl From<bool> for BoundValue {
    fn from(b: bool) -> Self {
        BoundValue::Bool(b)
    }
}

impl From<i64> for BoundValue {
    fn from(n: i64) -> Self {
        BoundValue::Number(n.into())
    }
}

/// Text form of a resolved value, as substituted into templates.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(element_string)
            .collect::<Vec<_>>()
            .join(LIST_SEPARATOR),
        Value::Object(_) => value.to_string(),
    }
}

fn number_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

fn element_string(value: &Value) -> String {
    match value {
        Value::Array(_) => value.to_string(),
        other => display_string(other),
    }
}

/// Build a bag from static JSON defaults.
pub fn bag_from_json(props: &Map<String, Value>) -> PropertyBag {
    props
        .iter()
        .map(|(key, value)| (key.clone(), BoundValue::from_raw(value)))
        .collect()
}

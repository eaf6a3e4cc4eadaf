//! Field path discovery from sample responses.
//!
//! Walks an unknown-shape JSON document and lists every addressable path a
//! user can bind to:
//! - every object key, in document order, parents before children
//! - nested objects recursively
//! - arrays of objects through their first element only (`items[0].id`)
//!
//! Arrays are sampled, not enumerated: `items[1]` never appears, and the
//! fields of later elements that differ in shape from the first are not
//! discovered.

use serde_json::Value;

use crate::path::FieldPath;

/// List the addressable paths of `sample` in pre-order.
///
/// Scalars at the top level have no addressable children and yield an empty
/// list. The output is not de-duplicated.
pub fn extract_field_paths(sample: &Value) -> Vec<FieldPath> {
    let mut out = Vec::new();
    let root = FieldPath::new("");
    match sample {
        Value::Object(_) => walk(sample, &root, &mut out),
        Value::Array(_) => sample_array(sample, &root, &mut out),
        _ => {}
    }
    tracing::debug!(paths = out.len(), "extracted field paths");
    out
}

fn walk(value: &Value, prefix: &FieldPath, out: &mut Vec<FieldPath>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let path = prefix.child(key);
        out.push(path.clone());
        match child {
            Value::Object(_) => walk(child, &path, out),
            Value::Array(_) => sample_array(child, &path, out),
            _ => {}
        }
    }
}

fn sample_array(value: &Value, path: &FieldPath, out: &mut Vec<FieldPath>) {
    if let Some(first @ Value::Object(_)) = value.as_array().and_then(|items| items.first()) {
        let element = path.first_element();
        out.push(element.clone());
        walk(first, &element, out);
    }
}

//! Property bindings: single-value and multi-value mappings.
//!
//! Both operations merge resolved values over a base bag and return a new
//! bag. A binding whose path does not resolve is skipped, so the base value
//! (or its absence) survives.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::path::FieldPath;
use crate::resolver::PathResolver;
use crate::value::{BoundValue, PropertyBag};

/// Property name → the one path bound to it.
pub type SingleMapping = BTreeMap<String, FieldPath>;

/// Property name → ordered paths aggregated into `multi_<name>`.
pub type MultiMapping = BTreeMap<String, Vec<FieldPath>>;

/// Prefix of the synthetic properties produced by multi mappings.
pub const MULTI_PROPERTY_PREFIX: &str = "multi_";

/// Bag key for the multi mapping of `property`.
pub fn multi_property_key(property: &str) -> String {
    format!("{MULTI_PROPERTY_PREFIX}{property}")
}

/// Bind each property to the value at its path.
///
/// Arrays are joined into `"a, b, c"`, objects are stored as JSON text and
/// scalars as-is. Unresolved paths leave `base` untouched.
pub fn apply_single_mapping(
    resolver: &PathResolver,
    base: &PropertyBag,
    mapping: &SingleMapping,
    document: &Value,
) -> PropertyBag {
    let mut out = base.clone();
    for (property, path) in mapping {
        match resolver.resolve(document, path) {
            Some(value) => {
                out.insert(property.clone(), BoundValue::from_resolved(&value));
            }
            None => {
                tracing::trace!(property = %property, path = %path, "single binding not found");
            }
        }
    }
    out
}

/// Bind each synthetic `multi_<name>` property to the list of values found at
/// its paths, in path order.
///
/// Values are stored with their structure intact: an array element stays a
/// list and an object stays an object.
///
/// Unresolved paths are dropped from the list; when none resolve the key is
/// not added at all.
pub fn apply_multi_mapping(
    resolver: &PathResolver,
    base: &PropertyBag,
    mapping: &MultiMapping,
    document: &Value,
) -> PropertyBag {
    let mut out = base.clone();
    for (property, paths) in mapping {
        let values: Vec<BoundValue> = paths
            .iter()
            .filter_map(|path| resolver.resolve(document, path))
            .map(|value| BoundValue::from_raw(&value))
            .collect();

        if values.is_empty() {
            tracing::trace!(property = %property, paths = paths.len(), "multi binding not found");
            continue;
        }
        out.insert(multi_property_key(property), BoundValue::List(values));
    }
    out
}

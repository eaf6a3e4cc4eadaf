//! Field catalogue shown in the binding editor.
//!
//! The extracted path list, with the JSON kind found at each path in the
//! sample that produced it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::extract::extract_field_paths;
use crate::path::FieldPath;
use crate::resolver::PathResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl FieldKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => FieldKind::Null,
            Value::Bool(_) => FieldKind::Boolean,
            Value::Number(_) => FieldKind::Number,
            Value::String(_) => FieldKind::String,
            Value::Array(_) => FieldKind::Array,
            Value::Object(_) => FieldKind::Object,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Object => "object",
            FieldKind::Array => "array",
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Null => "null",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub path: FieldPath,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldCatalogue {
    entries: Vec<FieldEntry>,
}

impl FieldCatalogue {
    pub fn from_sample(sample: &Value) -> Self {
        let resolver = PathResolver::new();
        let entries = extract_field_paths(sample)
            .into_iter()
            .filter_map(|path| {
                // Keys containing `.`/`[`/`]`, or made only of digits, are
                // listed by extraction but cannot be addressed.
                let value = resolver.resolve(sample, &path)?;
                let kind = FieldKind::of(&value);
                Some(FieldEntry { path, kind })
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FieldEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &FieldPath> {
        self.entries.iter().map(|entry| &entry.path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|entry| entry.path == path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

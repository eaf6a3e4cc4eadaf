//! `{{label}}` placeholder substitution for free-text component content.
//!
//! Each [`ContentField`] names a placeholder and the path that feeds it.
//! Labels are literal text: [`placeholder_pattern`] escapes them before they
//! reach the regex engine, so a label like `a+b (x)` only ever matches
//! `{{a+b (x)}}`.
//!
//! Substitution is a single pass over the original template. Inserted values
//! are never re-scanned, so a value that itself contains `{{other}}` comes
//! out verbatim.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::path::FieldPath;
use crate::resolver::PathResolver;
use crate::value::display_string;

/// A named placeholder bound to a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentField {
    pub label: String,
    pub api_field: FieldPath,
    /// Display-only note shown next to the field in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<String>,
}

impl ContentField {
    pub fn new(label: impl Into<String>, api_field: impl Into<FieldPath>) -> Self {
        Self {
            label: label.into(),
            api_field: api_field.into(),
            mapping: None,
        }
    }
}

/// Regex source matching exactly the literal placeholder `{{label}}`.
pub fn placeholder_pattern(label: &str) -> String {
    regex::escape(&["{{", label, "}}"].concat())
}

/// Labels referenced by `{{...}}` tokens, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<String> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let token = TOKEN.get_or_init(|| Regex::new(r"\{\{(.*?)\}\}").expect("static regex"));

    let mut out: Vec<String> = Vec::new();
    for caps in token.captures_iter(template) {
        let label = &caps[1];
        if !out.iter().any(|seen| seen == label) {
            out.push(label.to_string());
        }
    }
    out
}

/// Replace every `{{label}}` whose field resolves against `document`.
///
/// Fields are considered in list order and the first resolved field for a
/// label wins. Placeholders of unresolved fields stay in the output.
pub fn substitute(
    resolver: &PathResolver,
    template: &str,
    fields: &[ContentField],
    document: &Value,
) -> String {
    if template.is_empty() || fields.is_empty() {
        return template.to_string();
    }

    let mut resolved: Vec<(&str, String)> = Vec::new();
    for field in fields {
        if resolved.iter().any(|(label, _)| *label == field.label) {
            continue;
        }
        match resolver.resolve(document, &field.api_field) {
            Some(value) => resolved.push((field.label.as_str(), display_string(&value))),
            None => {
                tracing::trace!(label = %field.label, path = %field.api_field, "content field not found");
            }
        }
    }

    if resolved.is_empty() {
        return template.to_string();
    }

    let patterns: Vec<String> = resolved.iter().map(|(label, _)| placeholder_pattern(label)).collect();
    match Regex::new(&patterns.join("|")) {
        Ok(regex) => {
            let values: HashMap<&str, &str> = resolved
                .iter()
                .map(|(label, value)| (*label, value.as_str()))
                .collect();
            regex
                .replace_all(template, |caps: &Captures| {
                    let token = &caps[0];
                    let label = &token[2..token.len() - 2];
                    values.get(label).map_or_else(|| token.to_string(), |value| value.to_string())
                })
                .into_owned()
        }
        Err(err) => {
            tracing::warn!(error = %err, "placeholder pattern rejected; replacing literally");
            replace_literal(template, &resolved)
        }
    }
}

/// Regex-free equivalent of the alternation pass: at each step the earliest
/// placeholder wins, ties going to the earlier field.
fn replace_literal(template: &str, resolved: &[(&str, String)]) -> String {
    let tokens: Vec<(String, &str)> = resolved
        .iter()
        .map(|(label, value)| (["{{", label, "}}"].concat(), value.as_str()))
        .collect();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = tokens
            .iter()
            .filter_map(|(token, value)| rest.find(token.as_str()).map(|at| (at, token.len(), *value)))
            .min_by_key(|(at, _, _)| *at);
        match next {
            Some((at, len, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + len..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Labels referenced by `template` that no field resolves against `document`.
pub fn unresolved_placeholders(
    resolver: &PathResolver,
    template: &str,
    fields: &[ContentField],
    document: &Value,
) -> Vec<String> {
    placeholders(template)
        .into_iter()
        .filter(|label| {
            !fields
                .iter()
                .filter(|field| field.label == *label)
                .any(|field| resolver.resolve(document, &field.api_field).is_some())
        })
        .collect()
}

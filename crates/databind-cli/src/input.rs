//! Reading samples, documents and configurations from disk or stdin.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use databind_core::parse_sample;

pub fn read_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// A user-pasted sample: must be an object or array.
pub fn read_sample(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    parse_sample(&text).with_context(|| format!("parsing sample {}", path.display()))
}

/// A live (or captured) API response: any JSON value.
pub fn read_document(path: &Path) -> Result<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).with_context(|| format!("parsing document {}", path.display()))
}

/// Parse a `--document <api-id>=<file>` argument.
pub fn parse_document_arg(arg: &str) -> Result<(String, PathBuf), String> {
    match arg.split_once('=') {
        Some((api_id, file)) if !api_id.is_empty() && !file.is_empty() => {
            Ok((api_id.to_string(), PathBuf::from(file)))
        }
        _ => Err(format!("expected <api-id>=<file>, got `{arg}`")),
    }
}

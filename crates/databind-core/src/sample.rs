//! Parsing of user-pasted sample responses.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("sample is not valid JSON (line {line}, column {column}): {source}")]
    Malformed {
        line: usize,
        column: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("sample must be a JSON object or array, got {kind}")]
    NotStructured { kind: &'static str },
}

/// Parse a sample response, requiring an object or array at the top level.
pub fn parse_sample(text: &str) -> Result<Value, SampleError> {
    let value: Value = serde_json::from_str(text).map_err(|source| SampleError::Malformed {
        line: source.line(),
        column: source.column(),
        source,
    })?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        Value::Null => Err(SampleError::NotStructured { kind: "null" }),
        Value::Bool(_) => Err(SampleError::NotStructured { kind: "a boolean" }),
        Value::Number(_) => Err(SampleError::NotStructured { kind: "a number" }),
        Value::String(_) => Err(SampleError::NotStructured { kind: "a string" }),
    }
}

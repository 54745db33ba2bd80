//! JSON provider trait and the `serde_json` implementation

use std::fmt;
use std::io::Read;

use serde_json::Value;

use super::charset::Charset;
use crate::error::{JsonPathError, JsonPathResult};

/// Parses documents and serialises them back to text
pub trait JsonProvider: Send + Sync + fmt::Debug {
    /// Parse JSON text into a document
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error for malformed input.
    fn parse(&self, text: &str) -> JsonPathResult<Value>;

    /// Read a stream to the end, decode it with `charset` and parse it
    ///
    /// # Errors
    ///
    /// Returns an `Io` error when reading fails and an `InvalidJson` error for
    /// undecodable or malformed input.
    fn parse_reader(&self, reader: &mut dyn Read, charset: Charset) -> JsonPathResult<Value> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let text = charset.decode(bytes)?;
        self.parse(&text)
    }

    /// Serialise a document to JSON text
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error if the value cannot be serialised.
    fn to_json(&self, value: &Value) -> JsonPathResult<String>;
}

/// Default provider backed by `serde_json`, keeping object member order
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJsonProvider {
    pretty: bool,
}

impl SerdeJsonProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider whose `to_json` output is indented
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonProvider for SerdeJsonProvider {
    fn parse(&self, text: &str) -> JsonPathResult<Value> {
        serde_json::from_str(text).map_err(|e| {
            log::debug!("rejected JSON input: {e}");
            JsonPathError::invalid_json(format!("invalid JSON input: {e}"))
        })
    }

    fn to_json(&self, value: &Value) -> JsonPathResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}

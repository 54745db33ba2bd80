//! Parse contexts

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::{core::DocumentContext, document::Document};
use crate::cache::{PathCache, PathCacheProvider};
use crate::config::Configuration;
use crate::error::{JsonPathError, JsonPathResult};
use crate::provider::Charset;

/// Produces document contexts sharing one configuration and path cache
#[derive(Clone)]
pub struct ParseContext {
    configuration: Configuration,
    cache: Arc<dyn PathCache>,
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}

impl ParseContext {
    /// Parse context using the process-wide path cache
    #[must_use]
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration,
            cache: PathCacheProvider::shared(),
        }
    }

    /// Use `cache` instead of the process-wide one
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn PathCache>) -> Self {
        self.cache = cache;
        self
    }

    #[inline]
    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Parse JSON text
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for blank text and `InvalidJson` for malformed text.
    pub fn parse(&self, json: &str) -> JsonPathResult<DocumentContext> {
        if json.trim().is_empty() {
            return Err(JsonPathError::invalid_argument(
                "json string can not be null or empty",
            ));
        }
        let value = self.configuration.json_provider().parse(json)?;
        Ok(self.parse_value(value))
    }

    /// Wrap an already built document
    #[must_use]
    pub fn parse_value(&self, value: Value) -> DocumentContext {
        self.parse_document(Document::new(value))
    }

    /// Wrap a shared document handle; the new context sees changes made through other handles
    #[must_use]
    pub fn parse_document(&self, document: Document) -> DocumentContext {
        DocumentContext::with_cache(document, self.configuration.clone(), Arc::clone(&self.cache))
    }

    /// Read UTF-8 JSON from a stream
    ///
    /// # Errors
    ///
    /// Returns `Io` when reading fails and `InvalidJson` for malformed input.
    pub fn parse_reader(&self, reader: impl Read) -> JsonPathResult<DocumentContext> {
        self.parse_reader_with_charset(reader, Charset::Utf8)
    }

    /// Read JSON encoded in `charset` from a stream
    ///
    /// # Errors
    ///
    /// Returns `Io` when reading fails and `InvalidJson` for undecodable or
    /// malformed input.
    pub fn parse_reader_with_charset(
        &self,
        mut reader: impl Read,
        charset: Charset,
    ) -> JsonPathResult<DocumentContext> {
        let value = self
            .configuration
            .json_provider()
            .parse_reader(&mut reader, charset)?;
        Ok(self.parse_value(value))
    }

    /// Read a UTF-8 JSON file
    ///
    /// # Errors
    ///
    /// Returns `Io` when the file can not be read and `InvalidJson` for
    /// malformed content.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> JsonPathResult<DocumentContext> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            JsonPathError::io_error(format!("can not open {}: {e}", path.display()))
        })?;
        log::debug!("parsing JSON document from {}", path.display());
        self.parse_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cache::NoopPathCache;
    use crate::error::ErrorKind;

    fn parser() -> ParseContext {
        ParseContext::default().with_cache(Arc::new(NoopPathCache::new()))
    }

    #[test]
    fn blank_and_malformed_input() {
        assert_eq!(parser().parse(" \n").unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(parser().parse("{").unwrap_err().kind(), ErrorKind::InvalidJson);
    }

    #[test]
    fn reader_with_charset() {
        let bytes: &[u8] = &[b'[', b'"', 0xE9, b'"', b']'];
        let ctx = parser()
            .parse_reader_with_charset(bytes, Charset::Iso8859_1)
            .unwrap();
        assert_eq!(ctx.json().unwrap(), json!(["é"]));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = parser().parse_file("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn shared_documents_see_each_other() {
        let document = Document::new(json!({"a": 1}));
        let parser = parser();
        let mut writer = parser.parse_document(document.clone());
        let reader = parser.parse_document(document);
        writer.set("$.a", json!(2)).unwrap();
        assert_eq!(reader.read("$.a").unwrap(), json!(2));
    }
}

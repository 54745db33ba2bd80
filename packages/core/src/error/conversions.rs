//! Conversions from library errors into [`JsonPathError`]

use super::types::{ErrorKind, JsonPathError};

impl From<serde_json::Error> for JsonPathError {
    fn from(error: serde_json::Error) -> Self {
        let kind = if error.is_io() {
            ErrorKind::Io
        } else {
            ErrorKind::InvalidJson
        };
        JsonPathError::new(kind, error.to_string())
    }
}

impl From<std::io::Error> for JsonPathError {
    fn from(error: std::io::Error) -> Self {
        JsonPathError::io_error(error.to_string())
    }
}

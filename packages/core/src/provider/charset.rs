//! Character set decoding for byte input

use std::fmt;
use std::str::FromStr;

use crate::error::{JsonPathError, JsonPathResult};

/// Character sets accepted when parsing byte streams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Charset {
    #[default]
    Utf8,
    UsAscii,
    /// ISO-8859-1 (Latin-1); every byte maps to the code point of the same value
    Iso8859_1,
}

impl Charset {
    /// Decode raw bytes into text
    ///
    /// # Errors
    ///
    /// Returns an `InvalidJson` error when the bytes are not valid in this charset.
    pub fn decode(self, bytes: Vec<u8>) -> JsonPathResult<String> {
        match self {
            Charset::Utf8 => {
                let mut bytes = bytes;
                if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
                    bytes.drain(..3);
                }
                String::from_utf8(bytes).map_err(|e| {
                    JsonPathError::invalid_json(format!("input is not valid UTF-8: {e}"))
                })
            }
            Charset::UsAscii => {
                if let Some(position) = bytes.iter().position(|b| !b.is_ascii()) {
                    return Err(JsonPathError::invalid_json(format!(
                        "input is not valid US-ASCII: byte 0x{:02x} at offset {position}",
                        bytes[position]
                    )));
                }
                String::from_utf8(bytes).map_err(|e| {
                    JsonPathError::invalid_json(format!("input is not valid US-ASCII: {e}"))
                })
            }
            Charset::Iso8859_1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for Charset {
    type Err = JsonPathError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "us-ascii" | "ascii" => Ok(Charset::UsAscii),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Charset::Iso8859_1),
            other => Err(JsonPathError::invalid_argument(format!(
                "unsupported charset '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Charset::Utf8 => "UTF-8",
            Charset::UsAscii => "US-ASCII",
            Charset::Iso8859_1 => "ISO-8859-1",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn latin1_maps_bytes_to_code_points() {
        let text = Charset::Iso8859_1.decode(vec![b'"', 0xE9, b'"']).unwrap();
        assert_eq!(text, "\"é\"");
    }

    #[test]
    fn ascii_rejects_high_bytes() {
        let err = Charset::UsAscii.decode(vec![b'"', 0xE9, b'"']).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
    }

    #[test]
    fn utf8_skips_byte_order_mark() {
        let text = Charset::Utf8.decode(vec![0xEF, 0xBB, 0xBF, b'1']).unwrap();
        assert_eq!(text, "1");
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!("UTF-8".parse::<Charset>().unwrap(), Charset::Utf8);
        assert_eq!("Latin1".parse::<Charset>().unwrap(), Charset::Iso8859_1);
        assert!("ebcdic".parse::<Charset>().is_err());
    }
}

//! Document providers
//!
//! A provider turns JSON text or bytes into an in-memory [`serde_json::Value`]
//! tree and serialises trees back to text.

mod charset;
mod json;

pub use charset::Charset;
pub use json::{JsonProvider, SerdeJsonProvider};

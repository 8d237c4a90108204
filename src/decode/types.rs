//! Decoder types and traits
//!
//! Defines the core decoder abstraction.

use crate::error::Result;
use crate::types::JsonObject;

/// Trait for decoding gateway response bodies into a field mapping
pub trait PayloadDecoder: Send + Sync {
    /// Decode the response body into its fields
    fn decode(&self, body: &str) -> Result<JsonObject>;

    /// Decode a body that may be missing entirely
    fn decode_optional(&self, body: Option<&str>) -> Result<JsonObject> {
        self.decode(body.unwrap_or_default())
    }
}

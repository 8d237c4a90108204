//! Decoder implementations

use super::types::PayloadDecoder;
use crate::error::{Error, Result, NO_RESPONSE_MESSAGE, UNAUTHORIZED_MESSAGE};
use crate::types::{JsonObject, JsonValue};
use tracing::{debug, warn};

// ============================================================================
// JSON Decoder
// ============================================================================

/// JSON decoder for Payeezy response bodies
///
/// Rules, in order:
///
/// 1. An empty or whitespace-only body, or a literal `null`, fails with
///    [`Error::InvalidResponse`] carrying `"No Response"`.
/// 2. A body that is not valid JSON fails with [`Error::InvalidResponse`]
///    carrying the raw body.
/// 3. The bare string `"Unauthorized Request. Bad or missing credentials."`
///    fails with [`Error::Authentication`].
/// 4. A value with no content (`false`, `0`, `""`, `[]`, `{}`) fails with
///    [`Error::InvalidResponse`] carrying the raw body.
/// 5. A populated object is returned as-is.
/// 6. Any other value (`true`, `42`, `"Declined"`, `[1, 2]`) decodes to an
///    empty field mapping, so every lookup on it comes back `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl JsonDecoder {
    /// Create a new JSON decoder
    pub fn new() -> Self {
        Self
    }
}

impl PayloadDecoder for JsonDecoder {
    fn decode(&self, body: &str) -> Result<JsonObject> {
        if body.trim().is_empty() {
            warn!("Gateway returned an empty body");
            return Err(Error::invalid_response(NO_RESPONSE_MESSAGE));
        }

        let value: JsonValue = serde_json::from_str(body).map_err(|e| {
            warn!("Failed to parse gateway response as JSON: {e}");
            Error::invalid_response(body)
        })?;

        match value {
            JsonValue::Null => {
                warn!("Gateway returned a null body");
                Err(Error::invalid_response(NO_RESPONSE_MESSAGE))
            }
            JsonValue::String(s) if s == UNAUTHORIZED_MESSAGE => {
                warn!("Gateway rejected the request credentials");
                Err(Error::authentication(s))
            }
            JsonValue::Object(fields) if !fields.is_empty() => {
                debug!("Decoded gateway response with {} fields", fields.len());
                Ok(fields)
            }
            other if is_loosely_null(&other) => {
                warn!("Gateway returned {} with no content", kind_of(&other));
                Err(Error::invalid_response(body))
            }
            other => {
                warn!(
                    "Gateway returned {} instead of an object, no fields available",
                    kind_of(&other)
                );
                Ok(JsonObject::new())
            }
        }
    }
}

/// Values that carry no response at all: `false`, `0`, `""`, `[]`, `{}`
///
/// Unlike [`is_blank`](super::is_blank), the string `"0"` is not included.
fn is_loosely_null(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !*b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(a) => a.is_empty(),
        JsonValue::Object(o) => o.is_empty(),
    }
}

/// Short description of a JSON value's shape for log lines
fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an empty object",
    }
}

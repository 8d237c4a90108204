//! Response decoder module
//!
//! Turns the raw body returned by the Payeezy gateway into a field mapping.
//!
//! # Overview
//!
//! The gateway normally answers with a flat JSON object. Two degenerate
//! bodies are recognised: the bare JSON string the gateway sends for
//! rejected credentials, and a missing or undecodable body. Both surface
//! as errors; everything else becomes a [`JsonObject`](crate::types::JsonObject).

mod decoders;
mod scalar;
mod types;

pub use decoders::JsonDecoder;
pub use scalar::{is_blank, is_one, render_scalar};
pub use types::PayloadDecoder;

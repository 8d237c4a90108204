//! Payeezy card response
//!
//! The gateway needs both the authorization number and the transaction
//! tag to void or refund a transaction ("tagged" voids and refunds), so
//! [`transaction_reference`](DataItemLookup::transaction_reference) joins
//! the two as `authorization::tag`.

use super::lookup::DataItemLookup;
use super::summary::ResponseSummary;
use crate::decode::{JsonDecoder, PayloadDecoder};
use crate::error::Result;
use crate::request::GatewayRequest;
use crate::types::{JsonObject, JsonValue};
use tracing::{debug, warn};

/// Decoded response to a Payeezy card transaction
///
/// Immutable once built; the field mapping is only reachable through
/// shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct PayeezyResponse {
    request: GatewayRequest,
    data: JsonObject,
}

impl PayeezyResponse {
    /// Decode a gateway response body
    ///
    /// Fails with [`Error::Authentication`](crate::Error::Authentication)
    /// when the gateway rejected the credentials and with
    /// [`Error::InvalidResponse`](crate::Error::InvalidResponse) when the
    /// body is empty, `null` or not a JSON object.
    pub fn new(request: GatewayRequest, body: &str) -> Result<Self> {
        Self::with_decoder(&JsonDecoder::new(), request, Some(body))
    }

    /// Decode a gateway response body that may be missing
    pub fn from_optional(request: GatewayRequest, body: Option<&str>) -> Result<Self> {
        Self::with_decoder(&JsonDecoder::new(), request, body)
    }

    /// Decode a gateway response body with a specific decoder
    pub fn with_decoder<D: PayloadDecoder + ?Sized>(
        decoder: &D,
        request: GatewayRequest,
        body: Option<&str>,
    ) -> Result<Self> {
        match decoder.decode_optional(body) {
            Ok(data) => {
                debug!(request = %request, "Decoded Payeezy response");
                Ok(Self { request, data })
            }
            Err(e) => {
                warn!(request = %request, "Rejected Payeezy response: {e}");
                Err(e)
            }
        }
    }

    /// Request this response answers
    pub fn request(&self) -> &GatewayRequest {
        &self.request
    }

    /// All decoded fields
    pub fn data(&self) -> &JsonObject {
        &self.data
    }

    /// Snapshot of every accessor
    pub fn summary(&self, mask_card_reference: bool) -> ResponseSummary {
        ResponseSummary::from_lookup(self, mask_card_reference)
    }
}

impl DataItemLookup for PayeezyResponse {
    fn data_item(&self, name: &str) -> Option<&JsonValue> {
        self.data.data_item(name)
    }
}

//! Field lookup capability
//!
//! Every accessor is defined in terms of [`DataItemLookup::data_item`].

use crate::decode::{is_blank, is_one, render_scalar};
use crate::reference::TransactionReference;
use crate::types::{JsonObject, JsonValue};
use std::borrow::Cow;

/// Field names used by the Payeezy response body
pub mod fields {
    pub const TRANSACTION_APPROVED: &str = "transaction_approved";
    pub const TRANSACTION_ERROR: &str = "transaction_error";
    pub const TRANSACTION_TYPE: &str = "transaction_type";
    pub const AUTHORIZATION_NUM: &str = "authorization_num";
    pub const TRANSACTION_TAG: &str = "transaction_tag";
    pub const REFERENCE_NO: &str = "reference_no";
    pub const SEQUENCE_NO: &str = "sequence_no";
    pub const TRANSARMOR_TOKEN: &str = "transarmor_token";
    pub const BANK_MESSAGE: &str = "bank_message";
    pub const EXACT_MESSAGE: &str = "exact_message";
    pub const EXACT_RESP_CODE: &str = "exact_resp_code";
    pub const BANK_RESP_CODE: &str = "bank_resp_code";
    pub const CTR: &str = "ctr";
}

/// Read access to the fields of a decoded gateway response
///
/// Implementors provide [`data_item`](Self::data_item); the named
/// accessors come for free. Accessors never fail: a missing field is
/// `None`, never an error.
pub trait DataItemLookup {
    /// Value stored under `name`
    ///
    /// A JSON `null` counts as missing.
    fn data_item(&self, name: &str) -> Option<&JsonValue>;

    /// Value stored under `name`, rendered as text
    fn data_item_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.data_item(name).map(render_scalar)
    }

    /// Whether the gateway approved the transaction
    ///
    /// True when `transaction_approved` is one under [`is_one`]: `1`,
    /// `1.0`, `true`, `"1"` all count.
    fn is_successful(&self) -> bool {
        self.data_item(fields::TRANSACTION_APPROVED).is_some_and(is_one)
    }

    /// Whether the gateway flagged a processing error
    fn is_transaction_error(&self) -> bool {
        self.data_item(fields::TRANSACTION_ERROR).is_some_and(is_one)
    }

    /// Authorization number from the card holder's bank
    fn authorization_number(&self) -> Option<&JsonValue> {
        self.data_item(fields::AUTHORIZATION_NUM)
    }

    /// Gateway transaction tag
    fn transaction_tag(&self) -> Option<&JsonValue> {
        self.data_item(fields::TRANSACTION_TAG)
    }

    /// `authorization::tag`, the reference tagged voids and refunds need
    ///
    /// Missing sides render as empty strings, e.g. `"::902006933"`.
    fn transaction_reference(&self) -> String {
        TransactionReference::from_lookup(self).to_string()
    }

    /// Merchant reference number echoed back by the gateway
    fn transaction_id(&self) -> Option<&JsonValue> {
        self.data_item(fields::REFERENCE_NO)
    }

    /// Sequence number passed through to the financial institution
    fn sequence_no(&self) -> Option<&JsonValue> {
        self.data_item(fields::SEQUENCE_NO)
    }

    /// TransArmor token, present only with TransArmor processing enabled
    fn card_reference(&self) -> Option<&JsonValue> {
        self.data_item(fields::TRANSARMOR_TOKEN)
    }

    /// Bank message if it has content, otherwise the exact message
    fn message(&self) -> Option<&JsonValue> {
        match self.bank_message() {
            Some(message) if !is_blank(message) => Some(message),
            _ => self.exact_message(),
        }
    }

    fn bank_message(&self) -> Option<&JsonValue> {
        self.data_item(fields::BANK_MESSAGE)
    }

    fn exact_message(&self) -> Option<&JsonValue> {
        self.data_item(fields::EXACT_MESSAGE)
    }

    /// Gateway response code; `"00"` means no gateway error
    fn code(&self) -> Option<&JsonValue> {
        self.data_item(fields::EXACT_RESP_CODE)
    }

    /// Response code from the financial institution
    fn bank_code(&self) -> Option<&JsonValue> {
        self.data_item(fields::BANK_RESP_CODE)
    }

    /// Customer receipt text
    fn customer_receipt(&self) -> Option<&JsonValue> {
        self.data_item(fields::CTR)
    }

    /// Transaction type code echoed back by the gateway
    fn transaction_type(&self) -> Option<&JsonValue> {
        self.data_item(fields::TRANSACTION_TYPE)
    }
}

impl DataItemLookup for JsonObject {
    fn data_item(&self, name: &str) -> Option<&JsonValue> {
        self.get(name).filter(|v| !v.is_null())
    }
}

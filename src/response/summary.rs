//! Serializable response snapshot

use super::lookup::DataItemLookup;
use crate::decode::render_scalar;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of trailing characters left visible when masking
const VISIBLE_SUFFIX: usize = 4;

/// Every accessor of a response, captured at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseSummary {
    pub successful: bool,
    pub transaction_error: bool,
    pub transaction_reference: String,
    pub authorization_number: Option<JsonValue>,
    pub transaction_tag: Option<JsonValue>,
    pub transaction_id: Option<JsonValue>,
    pub sequence_no: Option<JsonValue>,
    pub card_reference: Option<JsonValue>,
    pub message: Option<JsonValue>,
    pub bank_message: Option<JsonValue>,
    pub exact_message: Option<JsonValue>,
    pub code: Option<JsonValue>,
    pub bank_code: Option<JsonValue>,
    pub transaction_type: Option<JsonValue>,
    pub customer_receipt: Option<JsonValue>,
}

impl ResponseSummary {
    /// Capture a response, optionally masking the card reference
    pub fn from_lookup<L: DataItemLookup + ?Sized>(lookup: &L, mask: bool) -> Self {
        let card_reference = lookup.card_reference().map(|token| {
            if mask {
                JsonValue::String(mask_card_reference(&render_scalar(token)))
            } else {
                token.clone()
            }
        });

        Self {
            successful: lookup.is_successful(),
            transaction_error: lookup.is_transaction_error(),
            transaction_reference: lookup.transaction_reference(),
            authorization_number: lookup.authorization_number().cloned(),
            transaction_tag: lookup.transaction_tag().cloned(),
            transaction_id: lookup.transaction_id().cloned(),
            sequence_no: lookup.sequence_no().cloned(),
            card_reference,
            message: lookup.message().cloned(),
            bank_message: lookup.bank_message().cloned(),
            exact_message: lookup.exact_message().cloned(),
            code: lookup.code().cloned(),
            bank_code: lookup.bank_code().cloned(),
            transaction_type: lookup.transaction_type().cloned(),
            customer_receipt: lookup.customer_receipt().cloned(),
        }
    }
}

impl fmt::Display for ResponseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = |value: &Option<JsonValue>| {
            value
                .as_ref()
                .map(|v| render_scalar(v).into_owned())
                .unwrap_or_else(|| "-".to_string())
        };

        writeln!(
            f,
            "Status:                {}",
            if self.successful { "APPROVED" } else { "DECLINED" }
        )?;
        writeln!(f, "Message:               {}", text(&self.message))?;
        writeln!(f, "Transaction reference: {}", self.transaction_reference)?;
        writeln!(f, "Transaction ID:        {}", text(&self.transaction_id))?;
        writeln!(f, "Sequence no:           {}", text(&self.sequence_no))?;
        writeln!(f, "Card reference:        {}", text(&self.card_reference))?;
        writeln!(
            f,
            "Exact response:        {} {}",
            text(&self.code),
            text(&self.exact_message)
        )?;
        write!(
            f,
            "Bank response:         {} {}",
            text(&self.bank_code),
            text(&self.bank_message)
        )
    }
}

/// Replace all but the last four characters with `*`
///
/// Tokens of four characters or fewer are masked entirely.
pub fn mask_card_reference(token: &str) -> String {
    let len = token.chars().count();
    if len <= VISIBLE_SUFFIX {
        return "*".repeat(len);
    }
    token
        .chars()
        .enumerate()
        .map(|(i, c)| if i < len - VISIBLE_SUFFIX { '*' } else { c })
        .collect()
}

//! Originating request context
//!
//! A response keeps a reference to the request that produced it. Only the
//! parts needed to describe the call in logs and errors live here; request
//! building and transport belong to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Transaction Type
// ============================================================================

/// Payeezy transaction type codes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// `00` - authorize and capture
    #[default]
    Purchase,
    /// `01` - authorize only
    PreAuthorization,
    /// `02` - complete a pre-authorization by authorization number
    PreAuthorizationCompletion,
    /// `04` - refund by card details
    Refund,
    /// `13` - void by card details
    Void,
    /// `32` - complete a pre-authorization by transaction tag
    TaggedPreAuthorizationCompletion,
    /// `33` - void by authorization number and transaction tag
    TaggedVoid,
    /// `34` - refund by authorization number and transaction tag
    TaggedRefund,
}

impl TransactionType {
    /// Two-digit code sent to the gateway
    pub fn code(self) -> &'static str {
        match self {
            TransactionType::Purchase => "00",
            TransactionType::PreAuthorization => "01",
            TransactionType::PreAuthorizationCompletion => "02",
            TransactionType::Refund => "04",
            TransactionType::Void => "13",
            TransactionType::TaggedPreAuthorizationCompletion => "32",
            TransactionType::TaggedVoid => "33",
            TransactionType::TaggedRefund => "34",
        }
    }

    /// Look up a transaction type by its gateway code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "00" => Some(TransactionType::Purchase),
            "01" => Some(TransactionType::PreAuthorization),
            "02" => Some(TransactionType::PreAuthorizationCompletion),
            "04" => Some(TransactionType::Refund),
            "13" => Some(TransactionType::Void),
            "32" => Some(TransactionType::TaggedPreAuthorizationCompletion),
            "33" => Some(TransactionType::TaggedVoid),
            "34" => Some(TransactionType::TaggedRefund),
            _ => None,
        }
    }

    /// Whether this transaction needs an `authorization::tag` reference
    pub fn is_tagged(self) -> bool {
        matches!(
            self,
            TransactionType::TaggedPreAuthorizationCompletion
                | TransactionType::TaggedVoid
                | TransactionType::TaggedRefund
        )
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionType::Purchase => "purchase",
            TransactionType::PreAuthorization => "pre_authorization",
            TransactionType::PreAuthorizationCompletion => "pre_authorization_completion",
            TransactionType::Refund => "refund",
            TransactionType::Void => "void",
            TransactionType::TaggedPreAuthorizationCompletion => {
                "tagged_pre_authorization_completion"
            }
            TransactionType::TaggedVoid => "tagged_void",
            TransactionType::TaggedRefund => "tagged_refund",
        };
        write!(f, "{name} ({})", self.code())
    }
}

// ============================================================================
// Gateway Request
// ============================================================================

/// Description of the request a response answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRequest {
    /// Kind of transaction that was sent
    #[serde(default)]
    pub transaction_type: TransactionType,

    /// Merchant reference number sent with the request
    #[serde(default)]
    pub reference_no: Option<String>,
}

impl GatewayRequest {
    /// Create a request context for a transaction type
    pub fn new(transaction_type: TransactionType) -> Self {
        Self {
            transaction_type,
            reference_no: None,
        }
    }

    /// Set the merchant reference number
    #[must_use]
    pub fn with_reference_no(mut self, reference_no: impl Into<String>) -> Self {
        self.reference_no = Some(reference_no.into());
        self
    }
}

impl fmt::Display for GatewayRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reference_no {
            Some(reference_no) => write!(f, "{} [{reference_no}]", self.transaction_type),
            None => write!(f, "{}", self.transaction_type),
        }
    }
}

//! Composite transaction references
//!
//! Tagged voids and refunds need both the authorization number and the
//! transaction tag of the original transaction. They travel together as a
//! single string, `authorization::tag`.

use crate::decode::render_scalar;
use crate::error::{Error, Result};
use crate::response::DataItemLookup;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between authorization number and transaction tag
pub const REFERENCE_SEPARATOR: &str = "::";

/// Authorization number and transaction tag of a completed transaction
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionReference {
    /// Authorization number issued by the card holder's bank
    pub authorization_num: String,

    /// Gateway transaction tag
    pub transaction_tag: String,
}

impl TransactionReference {
    /// Create a reference from its two parts
    pub fn new(authorization_num: impl Into<String>, transaction_tag: impl Into<String>) -> Self {
        Self {
            authorization_num: authorization_num.into(),
            transaction_tag: transaction_tag.into(),
        }
    }

    /// Build the reference from a decoded response
    ///
    /// A missing field becomes an empty side; no validation happens here.
    pub fn from_lookup<L: DataItemLookup + ?Sized>(lookup: &L) -> Self {
        Self {
            authorization_num: lookup
                .authorization_number()
                .map(|v| render_scalar(v).into_owned())
                .unwrap_or_default(),
            transaction_tag: lookup
                .transaction_tag()
                .map(|v| render_scalar(v).into_owned())
                .unwrap_or_default(),
        }
    }

    /// Whether both sides are present
    pub fn is_complete(&self) -> bool {
        !self.authorization_num.is_empty() && !self.transaction_tag.is_empty()
    }
}

impl fmt::Display for TransactionReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{REFERENCE_SEPARATOR}{}",
            self.authorization_num, self.transaction_tag
        )
    }
}

impl FromStr for TransactionReference {
    type Err = Error;

    /// Split at the first separator. One-sided references are accepted.
    fn from_str(s: &str) -> Result<Self> {
        let (authorization_num, transaction_tag) = s
            .split_once(REFERENCE_SEPARATOR)
            .ok_or_else(|| Error::invalid_reference(s))?;
        Ok(Self::new(authorization_num, transaction_tag))
    }
}

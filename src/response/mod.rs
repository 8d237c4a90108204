//! Gateway response module
//!
//! Typed access to a decoded Payeezy response.
//!
//! # Overview
//!
//! [`DataItemLookup`] carries every named accessor on top of a single
//! `data_item` lookup, so any response variant only has to say where its
//! fields live. [`PayeezyResponse`] is the card response built from a raw
//! gateway body; [`ResponseSummary`] is a serializable snapshot of it.

mod lookup;
mod payeezy;
mod summary;

pub use lookup::{fields, DataItemLookup};
pub use payeezy::PayeezyResponse;
pub use summary::{mask_card_reference, ResponseSummary};

//! # Payeezy Response
//!
//! Decoding and typed access for responses from the First Data Payeezy
//! card gateway.
//!
//! ## Features
//!
//! - **Strict decoding**: rejected credentials and empty or malformed
//!   bodies surface as distinct errors
//! - **Typed accessors**: authorization number, transaction tag, response
//!   codes and messages through one lookup trait
//! - **Tagged references**: build and split the `authorization::tag`
//!   reference that tagged voids and refunds require
//!
//! ## Quick Start
//!
//! ```rust
//! use payeezy_response::{DataItemLookup, GatewayRequest, PayeezyResponse, TransactionType};
//!
//! let body = r#"{"transaction_approved": 1, "authorization_num": "ET1", "transaction_tag": 77}"#;
//! let response = PayeezyResponse::new(GatewayRequest::new(TransactionType::Purchase), body)?;
//!
//! assert!(response.is_successful());
//! assert_eq!(response.transaction_reference(), "ET1::77");
//! # Ok::<(), payeezy_response::Error>(())
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Response body decoding
pub mod decode;

/// Originating request context
pub mod request;

/// Composite `authorization::tag` references
pub mod reference;

/// Typed response accessors
pub mod response;

/// CLI configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use reference::TransactionReference;
pub use request::{GatewayRequest, TransactionType};
pub use response::{DataItemLookup, PayeezyResponse, ResponseSummary};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! CLI module
//!
//! Command-line interface for inspecting gateway responses.
//!
//! # Commands
//!
//! - `inspect` - Decode a response body and print its fields
//! - `reference` - Split an `authorization::tag` reference

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;

//! CLI commands and argument parsing

use crate::config::OutputFormat;
use crate::request::TransactionType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Payeezy response inspector
#[derive(Parser, Debug)]
#[command(name = "payeezy-response")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Show the TransArmor token unmasked
    #[arg(long, global = true)]
    pub no_mask: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a gateway response body and print its fields
    Inspect {
        /// File holding the response body (stdin when omitted)
        file: Option<PathBuf>,

        /// Transaction type of the originating request (overrides config)
        #[arg(short, long)]
        transaction_type: Option<TransactionType>,

        /// Merchant reference number of the originating request
        #[arg(long)]
        reference_no: Option<String>,
    },

    /// Split an `authorization::tag` transaction reference
    Reference {
        /// Reference to split
        reference: String,
    },
}

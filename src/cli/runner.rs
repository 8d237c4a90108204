//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{load_config, InspectConfig, OutputFormat};
use crate::error::{Result, ResultExt};
use crate::reference::TransactionReference;
use crate::request::{GatewayRequest, TransactionType};
use crate::response::{DataItemLookup, PayeezyResponse};
use crate::types::LogLevel;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: InspectConfig,
}

impl Runner {
    /// Create a new runner, loading the config file if one was given
    pub fn new(cli: Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => load_config(path)?,
            None => InspectConfig::default(),
        };
        Ok(Self::with_config(cli, config))
    }

    /// Create a runner with an already loaded config
    pub fn with_config(cli: Cli, config: InspectConfig) -> Self {
        Self { cli, config }
    }

    /// Log level after applying `--verbose`
    pub fn log_level(&self) -> LogLevel {
        if self.cli.verbose {
            LogLevel::Debug
        } else {
            self.config.log_level
        }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Inspect {
                file,
                transaction_type,
                reference_no,
            } => {
                let body = read_body(file.as_deref())?;
                let request = self.request(*transaction_type, reference_no.as_deref());
                self.inspect(request, &body)?
            }
            Commands::Reference { reference } => self.split_reference(reference)?,
        };
        println!("{output}");
        Ok(())
    }

    /// Decode a body and render its summary
    pub fn inspect(&self, request: GatewayRequest, body: &str) -> Result<String> {
        let response = PayeezyResponse::new(request, body)?;
        tracing::info!(
            "Transaction {} ({})",
            if response.is_successful() {
                "approved"
            } else {
                "declined"
            },
            response.transaction_reference()
        );

        let summary = response.summary(self.mask_card_reference());
        match self.format() {
            OutputFormat::Json => Ok(serde_json::to_string(&summary)?),
            OutputFormat::Pretty => Ok(summary.to_string()),
        }
    }

    /// Split a reference and render both parts
    pub fn split_reference(&self, reference: &str) -> Result<String> {
        let reference: TransactionReference = reference.parse()?;
        if !reference.is_complete() {
            tracing::warn!("Reference '{reference}' is missing one side");
        }

        match self.format() {
            OutputFormat::Json => Ok(json!({
                "authorization_num": reference.authorization_num,
                "transaction_tag": reference.transaction_tag,
                "complete": reference.is_complete(),
            })
            .to_string()),
            OutputFormat::Pretty => Ok(format!(
                "Authorization number: {}\nTransaction tag:      {}",
                reference.authorization_num, reference.transaction_tag
            )),
        }
    }

    /// Request context from config, overridden by flags
    fn request(
        &self,
        transaction_type: Option<TransactionType>,
        reference_no: Option<&str>,
    ) -> GatewayRequest {
        let mut request = self.config.request.clone();
        if let Some(tt) = transaction_type {
            request.transaction_type = tt;
        }
        if let Some(reference_no) = reference_no {
            request.reference_no = Some(reference_no.to_string());
        }
        request
    }

    fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    fn mask_card_reference(&self) -> bool {
        self.config.mask_card_reference && !self.cli.no_mask
    }
}

/// Read the response body from a file, or stdin when no path is given
fn read_body(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file '{}'", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read response from stdin")?;
            Ok(body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    const BODY: &str = r#"{"transaction_approved":"1","authorization_num":"ET1","transaction_tag":"77","transarmor_token":"8938737759041111","bank_message":"Approved"}"#;

    fn runner(args: &[&str]) -> Runner {
        let cli = Cli::parse_from(args);
        Runner::with_config(cli, InspectConfig::default())
    }

    #[test]
    fn test_inspect_json() {
        let runner = runner(&["payeezy-response", "inspect"]);
        let output = runner.inspect(GatewayRequest::default(), BODY).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["successful"], true);
        assert_eq!(value["transaction_reference"], "ET1::77");
        assert_eq!(value["card_reference"], "************1111");
    }

    #[test]
    fn test_inspect_no_mask() {
        let runner = runner(&["payeezy-response", "--no-mask", "inspect"]);
        let output = runner.inspect(GatewayRequest::default(), BODY).unwrap();
        assert!(output.contains("8938737759041111"));
    }

    #[test]
    fn test_inspect_pretty() {
        let runner = runner(&["payeezy-response", "-f", "pretty", "inspect"]);
        let output = runner.inspect(GatewayRequest::default(), BODY).unwrap();
        assert!(output.starts_with("Status:                APPROVED"));
    }

    #[test]
    fn test_inspect_propagates_decode_errors() {
        let runner = runner(&["payeezy-response", "inspect"]);
        let err = runner.inspect(GatewayRequest::default(), "").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse { .. }));
    }

    #[test]
    fn test_split_reference() {
        let runner = runner(&["payeezy-response", "reference", "ET1::77"]);
        let output = runner.split_reference("ET1::77").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["authorization_num"], "ET1");
        assert_eq!(value["transaction_tag"], "77");
        assert_eq!(value["complete"], true);
    }

    #[test]
    fn test_split_reference_invalid() {
        let runner = runner(&["payeezy-response", "reference", "ET1"]);
        let err = runner.split_reference("ET1").unwrap_err();
        assert!(matches!(err, Error::InvalidReference { .. }));
    }

    #[test]
    fn test_request_overrides() {
        let runner = runner(&["payeezy-response", "inspect"]);
        let request = runner.request(Some(TransactionType::TaggedVoid), Some("ORD-5"));
        assert_eq!(request.transaction_type, TransactionType::TaggedVoid);
        assert_eq!(request.reference_no.as_deref(), Some("ORD-5"));
    }

    #[test]
    fn test_verbose_forces_debug() {
        assert_eq!(runner(&["payeezy-response", "-v", "inspect"]).log_level(), LogLevel::Debug);
        assert_eq!(runner(&["payeezy-response", "inspect"]).log_level(), LogLevel::Info);
    }

    #[test]
    fn test_read_body_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        fs::write(&path, BODY).unwrap();
        assert_eq!(read_body(Some(&path)).unwrap(), BODY);
    }

    #[test]
    fn test_read_body_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_body(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read response file"));
    }
}

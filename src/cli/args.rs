//! Command-line argument definitions for the invoice preflight validator
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Column names and the age threshold map directly onto
//! [`ValidationConfig`]; the `--strict` flag selects the gated policy.

use crate::config::{ValidationConfig, ValidationPolicy};
use crate::constants::DEFAULT_MAX_MONTHS_AGE;
use crate::error::{PreflightError, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the invoice preflight validator
///
/// Validates tabular invoice uploads before they enter a data-import
/// pipeline: row counts, duplicate invoice/position keys, date-age checks
/// and a compact dataset signature.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "invoice-preflight",
    version,
    about = "Validate invoice CSV uploads before import",
    long_about = "Validates a tabular invoice file without touching any server: counts data rows, \
                  finds duplicate invoice/position keys, flags dates older than an allowed age \
                  and computes a compact dataset signature for cheap same-upload comparisons."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the full validation over one file and print a report
    Validate(ValidateArgs),
    /// Compute just the dataset signature for one file
    Signature(SignatureArgs),
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// File to validate
    #[arg(value_name = "FILE", help = "Path to the CSV file to validate")]
    pub file: PathBuf,

    /// Apply the gated policy: reject non-.csv names and undelimited
    /// headers outright, and treat empty files and duplicates as errors
    /// instead of informational counts.
    #[arg(long = "strict", help = "Treat structural problems and duplicates as errors")]
    pub strict: bool,

    /// Logical name of the date column
    #[arg(
        long = "date-column",
        value_name = "NAME",
        help = "Logical name of the date column (default: Date)"
    )]
    pub date_column: Option<String>,

    /// Logical name of the measure column; rows with an empty or zero
    /// measure are excluded from the date check and the signature
    #[arg(
        long = "measure-column",
        value_name = "NAME",
        help = "Logical name of the measure column (default: Quantity)"
    )]
    pub measure_column: Option<String>,

    /// Logical name of the invoice number column
    #[arg(
        long = "invoice-column",
        value_name = "NAME",
        help = "Logical name of the invoice number column (default: Invoice_Number)"
    )]
    pub invoice_column: Option<String>,

    /// Logical name of the invoice position column
    #[arg(
        long = "position-column",
        value_name = "NAME",
        help = "Logical name of the invoice position column (default: Invoice_position_number)"
    )]
    pub position_column: Option<String>,

    /// Maximum allowed date age in whole months
    #[arg(
        long = "max-months-age",
        value_name = "MONTHS",
        default_value_t = DEFAULT_MAX_MONTHS_AGE,
        help = "Maximum allowed date age in whole months"
    )]
    pub max_months_age: i32,

    /// Output format for the validation report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the signature command
#[derive(Debug, Clone, Parser)]
pub struct SignatureArgs {
    /// File to summarize
    #[arg(value_name = "FILE", help = "Path to the CSV file to summarize")]
    pub file: PathBuf,

    /// Logical name of the date column
    #[arg(
        long = "date-column",
        value_name = "NAME",
        help = "Logical name of the date column (default: Date)"
    )]
    pub date_column: Option<String>,

    /// Logical name of the measure column
    #[arg(
        long = "measure-column",
        value_name = "NAME",
        help = "Logical name of the measure column (default: Quantity)"
    )]
    pub measure_column: Option<String>,

    /// Output format for the signature
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "json",
        help = "Output format for the signature"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ValidateArgs {
    /// Validate the command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(PreflightError::file_not_found(
                self.file.display().to_string(),
            ));
        }

        if self.max_months_age <= 0 {
            return Err(PreflightError::configuration(
                "--max-months-age must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the engine configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig {
            max_months_age: self.max_months_age,
            ..ValidationConfig::default()
        };

        if let Some(date_column) = &self.date_column {
            config.date_column = date_column.clone();
        }
        if let Some(measure_column) = &self.measure_column {
            config.measure_column = measure_column.clone();
        }
        if let Some(invoice_column) = &self.invoice_column {
            config.invoice_column = invoice_column.clone();
        }
        if let Some(position_column) = &self.position_column {
            config.position_column = position_column.clone();
        }
        if self.strict {
            config.policy = ValidationPolicy::strict();
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl SignatureArgs {
    /// Validate the command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(PreflightError::file_not_found(
                self.file.display().to_string(),
            ));
        }
        Ok(())
    }

    /// Build the engine configuration from defaults plus CLI overrides
    pub fn to_config(&self) -> ValidationConfig {
        let mut config = ValidationConfig::default();

        if let Some(date_column) = &self.date_column {
            config.date_column = date_column.clone();
        }
        if let Some(measure_column) = &self.measure_column {
            config.measure_column = measure_column.clone();
        }

        config
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn validate_args(file: PathBuf) -> ValidateArgs {
        ValidateArgs {
            file,
            strict: false,
            date_column: None,
            measure_column: None,
            invoice_column: None,
            position_column: None,
            max_months_age: 1,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_validate_args_validation() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "a;b").unwrap();

        let args = validate_args(temp_file.path().to_path_buf());
        assert!(args.validate().is_ok());

        // nonexistent file
        let missing = validate_args(PathBuf::from("/nonexistent/upload.csv"));
        assert!(missing.validate().is_err());

        // non-positive age
        let mut bad_age = validate_args(temp_file.path().to_path_buf());
        bad_age.max_months_age = 0;
        assert!(bad_age.validate().is_err());
    }

    #[test]
    fn test_to_config_defaults() {
        let args = validate_args(PathBuf::from("upload.csv"));
        let config = args.to_config();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn test_to_config_overrides() {
        let mut args = validate_args(PathBuf::from("upload.csv"));
        args.date_column = Some("Posting_Date".to_string());
        args.invoice_column = Some("Doc".to_string());
        args.max_months_age = 3;
        args.strict = true;

        let config = args.to_config();
        assert_eq!(config.date_column, "Posting_Date");
        assert_eq!(config.invoice_column, "Doc");
        assert_eq!(config.measure_column, "Quantity");
        assert_eq!(config.max_months_age, 3);
        assert_eq!(config.policy, ValidationPolicy::strict());
    }

    #[test]
    fn test_log_level() {
        let mut args = validate_args(PathBuf::from("upload.csv"));
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}

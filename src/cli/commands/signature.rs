//! Signature command implementation
//!
//! Computes just the `(row_count, min_year_month, max_year_month)` triple
//! for a file, for cheap "is this the same dataset as last time?" checks
//! without generating the full validation error list.

use super::shared::{read_input, setup_logging};
use crate::cli::args::{OutputFormat, SignatureArgs};
use crate::error::{PreflightError, Result};
use crate::models::Signature;
use crate::validator;
use chrono::Local;
use tracing::info;

/// Run the signature command
pub fn run_signature(args: SignatureArgs) -> Result<Signature> {
    setup_logging(args.get_log_level())?;

    args.validate()?;

    let config = args.to_config();
    let (text, file_name) = read_input(&args.file)?;

    let signature = validator::signature(&text, &config, Local::now().date_naive());

    info!(file_name = %file_name, rows = signature.row_count, "signature computed");

    match args.output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string(&signature)
                .map_err(|e| PreflightError::serialization("Failed to serialize signature", e))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!(
                "rows={} min={} max={}",
                signature.row_count, signature.min_year_month, signature.max_year_month
            );
        }
        OutputFormat::Csv => {
            println!("row_count,min_year_month,max_year_month");
            println!(
                "{},{},{}",
                signature.row_count, signature.min_year_month, signature.max_year_month
            );
        }
    }

    Ok(signature)
}

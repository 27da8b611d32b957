//! Validate command implementation
//!
//! Reads the input file, runs the full validation and renders the result
//! in the requested output format. The human report mirrors what the
//! original upload panel showed: row count, duplicate count and either a
//! green all-clear or the accumulated error list.

use super::shared::{read_input, setup_logging};
use crate::cli::args::{OutputFormat, ValidateArgs};
use crate::error::{PreflightError, Result};
use crate::models::ValidationResult;
use crate::validator;
use chrono::Local;
use colored::Colorize;
use tracing::{debug, info};

/// Run the validate command and return the result for exit-code handling
pub fn run_validate(args: ValidateArgs) -> Result<ValidationResult> {
    setup_logging(args.get_log_level())?;

    info!("Starting preflight validation");
    debug!("Validation arguments: {:?}", args);

    args.validate()?;

    let config = args.to_config();
    let (text, file_name) = read_input(&args.file)?;

    let result = validator::validate(&text, &file_name, &config, Local::now().date_naive());

    match args.output_format {
        OutputFormat::Human => print_human_report(&result),
        OutputFormat::Json => print_json_report(&result)?,
        OutputFormat::Csv => print_csv_report(&result),
    }

    Ok(result)
}

/// Human-readable validation report
fn print_human_report(result: &ValidationResult) {
    println!();
    println!("Preflight validation: {}", result.file_name);
    println!("─────────────────────────────────────────────");
    println!("  Rows in file (without header): {}", result.row_count);
    println!(
        "  Duplicates (invoice + position): {}",
        result.duplicate_count
    );

    for duplicate in &result.duplicates {
        println!(
            "    {} appears {} times",
            duplicate.display_key(),
            duplicate.count
        );
    }

    println!(
        "  Signature: rows={} min={} max={}",
        result.signature.row_count,
        result.signature.min_year_month,
        result.signature.max_year_month
    );
    println!();

    if result.is_valid {
        println!(
            "{}",
            format!(
                "CSV detected: {} — {} rows, no errors.",
                result.file_name, result.row_count
            )
            .green()
        );
    } else {
        for error in &result.errors {
            println!("{}", error.red());
        }
        if result.errors.is_empty() {
            // header-only or blank file: invalid without recorded errors
            println!("{}", "File contains no data rows.".red());
        }
    }
    println!();
}

/// JSON validation report (the structured event payload)
fn print_json_report(result: &ValidationResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(|e| {
        PreflightError::serialization("Failed to serialize validation result", e)
    })?;
    println!("{}", json);
    Ok(())
}

/// CSV validation report for data analysis
fn print_csv_report(result: &ValidationResult) {
    println!("metric,value");
    println!("file_name,{}", result.file_name);
    println!("row_count,{}", result.row_count);
    println!("duplicate_count,{}", result.duplicate_count);
    println!("error_count,{}", result.errors.len());
    println!("is_valid,{}", result.is_valid);
    println!("sig_rows,{}", result.signature.row_count);
    println!("sig_min_year_month,{}", result.signature.min_year_month);
    println!("sig_max_year_month,{}", result.signature.max_year_month);
}

//! Validation orchestration.
//!
//! Runs the full preflight sequence over one file's text: structural gates
//! (when the policy requires them), table parsing, the duplicate scan and
//! the date/signature scan, then assembles a [`ValidationResult`]. The
//! whole run is a pure function of `(text, file_name, config, today)` —
//! no I/O, no shared state — so concurrent runs need no coordination.

use crate::config::ValidationConfig;
use crate::constants::{CSV_EXTENSION, MSG_NO_DATA_ROWS, MSG_NO_DELIMITER, MSG_NOT_CSV_FILE};
use crate::models::{Signature, ValidationResult};
use crate::parser;
use crate::scan::{scan_dates, scan_duplicates};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Validate one file's text against the configured checks.
///
/// Structural gates run first when enabled: a wrong extension or a header
/// line without any candidate delimiter yields a single blocking error and
/// no partial result (row count forced to 0, zero signature). Otherwise
/// the table is parsed once and both scanners run over it;
/// `is_valid` holds iff the error list is empty and at least one data row
/// exists.
pub fn validate(
    text: &str,
    file_name: &str,
    config: &ValidationConfig,
    today: NaiveDate,
) -> ValidationResult {
    let policy = config.policy;

    if policy.require_csv_extension && !has_csv_extension(file_name) {
        debug!(file_name, "rejected by extension gate");
        // the original host also drops the file name on this rejection
        return rejected("", MSG_NOT_CSV_FILE);
    }

    if policy.require_delimited_header && !header_has_delimiter(text) {
        debug!(file_name, "rejected by header delimiter gate");
        return rejected(file_name, MSG_NO_DELIMITER);
    }

    let table = parser::parse(text);
    let row_count = table.rows.len();

    let (duplicate_count, duplicates) =
        scan_duplicates(&table, &config.invoice_column, &config.position_column);

    let date_scan = scan_dates(
        &table,
        &config.date_column,
        &config.measure_column,
        config.max_months_age,
        today,
    );

    let mut errors = date_scan.errors;
    if policy.report_empty && row_count == 0 {
        errors.push(MSG_NO_DATA_ROWS.to_string());
    }
    if policy.report_duplicates && duplicate_count > 0 {
        errors.push(format!(
            "Duplicate invoice/position keys found: {}",
            duplicate_count
        ));
    }

    let is_valid = errors.is_empty() && row_count > 0;

    info!(
        file_name,
        row_count,
        duplicate_count,
        errors = errors.len(),
        is_valid,
        "validation complete"
    );

    ValidationResult {
        file_name: file_name.to_string(),
        row_count,
        duplicate_count,
        duplicates,
        errors,
        is_valid,
        signature: Signature {
            row_count,
            min_year_month: date_scan.min_year_month,
            max_year_month: date_scan.max_year_month,
        },
    }
}

/// Compute just the dataset signature for one file's text.
///
/// Independently callable for cheap "same dataset as last time?" checks
/// without generating validation errors.
pub fn signature(text: &str, config: &ValidationConfig, today: NaiveDate) -> Signature {
    let table = parser::parse(text);

    let date_scan = scan_dates(
        &table,
        &config.date_column,
        &config.measure_column,
        config.max_months_age,
        today,
    );

    Signature {
        row_count: table.rows.len(),
        min_year_month: date_scan.min_year_month,
        max_year_month: date_scan.max_year_month,
    }
}

/// Case-insensitive `.csv` extension check on the display name
fn has_csv_extension(file_name: &str) -> bool {
    file_name.to_lowercase().ends_with(CSV_EXTENSION)
}

/// True when the first non-blank line contains any candidate delimiter
fn header_has_delimiter(text: &str) -> bool {
    let lines = parser::split_lines(text);
    match parser::first_content_line(&lines) {
        Some(index) => parser::has_any_delimiter(lines[index]),
        None => false,
    }
}

/// Blocking single-error result produced by the structural gates
fn rejected(file_name: &str, message: &str) -> ValidationResult {
    ValidationResult {
        file_name: file_name.to_string(),
        row_count: 0,
        duplicate_count: 0,
        duplicates: Vec::new(),
        errors: vec![message.to_string()],
        is_valid: false,
        signature: Signature::default(),
    }
}

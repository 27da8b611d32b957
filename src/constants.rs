//! Application constants for the invoice preflight validator
//!
//! This module contains the logical column defaults, delimiter handling
//! constants and user-facing gate messages used throughout the crate.

// =============================================================================
// Logical Column Defaults
// =============================================================================

/// Default logical name of the date column
pub const DEFAULT_DATE_COLUMN: &str = "Date";

/// Default logical name of the measure column (zero/empty excludes a row)
pub const DEFAULT_MEASURE_COLUMN: &str = "Quantity";

/// Default logical name of the invoice number column
pub const DEFAULT_INVOICE_COLUMN: &str = "Invoice_Number";

/// Default logical name of the invoice position column
pub const DEFAULT_POSITION_COLUMN: &str = "Invoice_position_number";

/// Default maximum allowed age of a row's date, in whole months
pub const DEFAULT_MAX_MONTHS_AGE: i32 = 1;

// =============================================================================
// Delimiter Handling
// =============================================================================

/// Candidate delimiters in fixed tie-break priority order.
///
/// The sniffer picks the candidate with the strictly highest occurrence
/// count in the header line; on a tie the earlier candidate wins.
pub const DELIMITER_CANDIDATES: &[char] = &[';', ',', '\t', '|'];

/// Delimiter assumed when the header line is empty or contains no candidate
pub const DEFAULT_DELIMITER: char = ',';

/// File extension accepted by the extension gate (compared case-insensitively)
pub const CSV_EXTENSION: &str = ".csv";

// =============================================================================
// Gate Messages
// =============================================================================

/// Blocking message for the file-extension gate
pub const MSG_NOT_CSV_FILE: &str = "Only CSV files are allowed.";

/// Blocking message for the header-delimiter gate
pub const MSG_NO_DELIMITER: &str =
    "The selected file does not look like CSV (no delimiter detected in header).";

/// Policy message for files with a header but no data rows
pub const MSG_NO_DATA_ROWS: &str = "File contains no data rows.";

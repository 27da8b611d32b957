//! Core data structures for preflight validation.
//!
//! All types are plain value objects: a validation run builds them from
//! scratch and never mutates them afterwards. They serialize with serde so
//! the hosting layer can forward a result as a single structured payload.

use serde::{Deserialize, Serialize};

/// A parsed tabular file: one header row plus data rows in file order.
///
/// Rows are not padded or truncated to the header width; a resolved column
/// index simply reads an absent field as the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names from the first non-blank line, each trimmed
    pub header: Vec<String>,

    /// Data rows (non-blank lines after the header), tokenized with the
    /// same delimiter as the header
    pub rows: Vec<Vec<String>>,

    /// Delimiter the file was tokenized with
    pub delimiter: char,
}

impl Table {
    /// Create an empty table (no non-blank line found in the input)
    pub fn empty() -> Self {
        Self {
            header: Vec::new(),
            rows: Vec::new(),
            delimiter: crate::constants::DEFAULT_DELIMITER,
        }
    }

    /// Read a field from a row by index, treating absent fields as empty
    pub fn field<'a>(row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

/// A composite invoice/position key that occurred more than once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateEntry {
    /// Trimmed invoice number component of the key
    pub invoice_number: String,

    /// Trimmed invoice position component of the key
    pub invoice_position: String,

    /// Number of occurrences, always >= 2
    pub count: usize,
}

impl DuplicateEntry {
    /// Render the composite key as the pipe-joined display form
    pub fn display_key(&self) -> String {
        format!("{}|{}", self.invoice_number, self.invoice_position)
    }
}

/// Compact dataset summary for cheap "same upload?" comparisons.
///
/// Year-months are encoded as `YYYY * 100 + MM` (e.g. 202403 for March
/// 2024). Both bounds are 0 when no row contributed a parseable date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Signature {
    /// Number of non-blank data rows in the file
    pub row_count: usize,

    /// Smallest year-month observed, or 0
    pub min_year_month: u32,

    /// Largest year-month observed, or 0
    pub max_year_month: u32,
}

/// Complete outcome of one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Display name of the validated file
    pub file_name: String,

    /// Number of non-blank data rows
    pub row_count: usize,

    /// Number of distinct duplicate invoice/position keys
    pub duplicate_count: usize,

    /// The duplicate keys with their occurrence counts
    pub duplicates: Vec<DuplicateEntry>,

    /// Accumulated validation errors (date-age failures plus any
    /// policy-level entries)
    pub errors: Vec<String>,

    /// True iff no errors were recorded and at least one data row exists
    pub is_valid: bool,

    /// Dataset signature computed during the same run
    pub signature: Signature,
}

impl ValidationResult {
    /// Newline-joined error text, matching the discrete accessor the
    /// hosting layer exposes
    pub fn errors_text(&self) -> String {
        self.errors.join("\n")
    }
}

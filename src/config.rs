//! Validation configuration.
//!
//! The engine is configured with logical column names, a maximum date age
//! and a policy describing which checks gate or populate the error list.
//! Defaults mirror the invoice-import use case; every field can be
//! overridden through host attributes or CLI flags.

use crate::constants::{
    DEFAULT_DATE_COLUMN, DEFAULT_INVOICE_COLUMN, DEFAULT_MAX_MONTHS_AGE, DEFAULT_MEASURE_COLUMN,
    DEFAULT_POSITION_COLUMN,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Which checks block a result versus stay informational.
///
/// The lenient default surfaces only date-age errors; the strict policy
/// additionally gates on file structure, empty files and duplicates, for
/// hosts that refuse the upload outright.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Reject file names without a `.csv` extension before parsing
    pub require_csv_extension: bool,

    /// Reject files whose first non-blank line has no candidate delimiter
    pub require_delimited_header: bool,

    /// Record an error when the file has zero data rows
    pub report_empty: bool,

    /// Record an error when duplicate invoice/position keys exist
    pub report_duplicates: bool,
}

impl ValidationPolicy {
    /// The gated configuration: every structural and content check blocks
    pub fn strict() -> Self {
        Self {
            require_csv_extension: true,
            require_delimited_header: true,
            report_empty: true,
            report_duplicates: true,
        }
    }
}

/// Full configuration for one validation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Logical name of the date column
    pub date_column: String,

    /// Logical name of the optional measure column
    pub measure_column: String,

    /// Logical name of the invoice number column
    pub invoice_column: String,

    /// Logical name of the invoice position column
    pub position_column: String,

    /// Maximum allowed date age in whole months
    pub max_months_age: i32,

    /// Error policy for this run
    pub policy: ValidationPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            date_column: DEFAULT_DATE_COLUMN.to_string(),
            measure_column: DEFAULT_MEASURE_COLUMN.to_string(),
            invoice_column: DEFAULT_INVOICE_COLUMN.to_string(),
            position_column: DEFAULT_POSITION_COLUMN.to_string(),
            max_months_age: DEFAULT_MAX_MONTHS_AGE,
            policy: ValidationPolicy::default(),
        }
    }
}

impl ValidationConfig {
    /// Build a configuration from host attribute pairs.
    ///
    /// Key names are matched case-insensitively and unknown keys are
    /// ignored, mirroring the attribute system of the original hosting
    /// component (`invoicecol` and `positioncol` are accepted as the short
    /// historical spellings). `maxmonthsage` falls back to the default
    /// when unparsable or not positive.
    pub fn from_attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref().to_lowercase().as_str() {
                "datecolumn" => config.date_column = value.to_string(),
                "measurecolumn" => config.measure_column = value.to_string(),
                "invoicecolumn" | "invoicecol" => config.invoice_column = value.to_string(),
                "positioncolumn" | "positioncol" => config.position_column = value.to_string(),
                "maxmonthsage" => config.max_months_age = parse_max_months_age(value),
                other => warn!(key = other, "ignoring unknown configuration attribute"),
            }
        }

        config
    }
}

/// Parse the age threshold, falling back to the default when the value is
/// unparsable or not positive.
fn parse_max_months_age(value: &str) -> i32 {
    match value.trim().parse::<i32>() {
        Ok(months) if months > 0 => months,
        _ => {
            warn!(value, "invalid maxmonthsage attribute, using default");
            DEFAULT_MAX_MONTHS_AGE
        }
    }
}

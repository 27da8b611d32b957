//! Invoice Preflight Library
//!
//! A Rust library for validating tabular invoice uploads before they enter
//! a downstream data-import pipeline.
//!
//! This library provides tools for:
//! - Parsing CSV-like text with delimiter sniffing and quote-aware tokenizing
//! - Resolving configurable logical column names against real headers
//! - Detecting duplicate invoice/position keys with occurrence counts
//! - Flagging rows whose dates exceed a configurable age in whole months
//! - Computing a compact dataset signature for cheap same-upload checks
//!
//! The engine is pure and synchronous: each run is a function of
//! `(text, file name, configuration, today)` and owns no shared state, so
//! concurrent validations are safe without locking.
//!
//! ```rust
//! use chrono::Local;
//! use invoice_preflight::{ValidationConfig, validate};
//!
//! let text = "Invoice_Number;Invoice_position_number;Date;Quantity\n\
//!             A1;1;20240601;5\n";
//! let result = validate(
//!     text,
//!     "upload.csv",
//!     &ValidationConfig::default(),
//!     Local::now().date_naive(),
//! );
//! println!("{} rows, {} duplicates", result.row_count, result.duplicate_count);
//! ```

pub mod columns;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod scan;
pub mod validator;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::{ValidationConfig, ValidationPolicy};
pub use error::{PreflightError, Result};
pub use models::{DuplicateEntry, Signature, Table, ValidationResult};
pub use validator::{signature, validate};

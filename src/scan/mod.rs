//! Row scanners that run over a parsed table.
//!
//! - [`duplicates`] - composite-key duplicate detection
//! - [`dates`] - date-age checking and signature bounds

pub mod dates;
pub mod duplicates;

pub use dates::{DateScan, scan_dates};
pub use duplicates::scan_duplicates;

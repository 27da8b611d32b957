//! Delimiter detection from the header line.

use crate::constants::{DEFAULT_DELIMITER, DELIMITER_CANDIDATES};
use tracing::debug;

/// Pick the most frequent candidate delimiter in the header line.
///
/// Candidates are checked in the fixed priority order `;` `,` TAB `|`.
/// Only a strictly higher count replaces the current leader, so an equal
/// count keeps the earlier candidate. Falls back to `,` when the line is
/// empty or contains no candidate at all.
pub fn sniff_delimiter(header_line: &str) -> char {
    let mut best = DEFAULT_DELIMITER;
    let mut best_count = 0;

    for &candidate in DELIMITER_CANDIDATES {
        let count = header_line.chars().filter(|&c| c == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }

    debug!(delimiter = ?best, occurrences = best_count, "sniffed delimiter");
    best
}

/// Check whether the header line contains any candidate delimiter at all.
///
/// Used by the structural gate: a first line with no delimiter is rejected
/// before parsing begins.
pub fn has_any_delimiter(header_line: &str) -> bool {
    header_line
        .chars()
        .any(|c| DELIMITER_CANDIDATES.contains(&c))
}

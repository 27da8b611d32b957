//! Logical-to-physical column resolution.
//!
//! Source files spell column names inconsistently (`Invoice_Number`,
//! `invoice number`, `INVOICE NUMBER`). The resolver lets callers configure
//! a logical name and maps it to a physical index by comparing normalized
//! forms.

/// Normalize a column name: lower-case with all whitespace and underscores
/// removed.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a logical column name to a header index.
///
/// Returns the index of the first header cell whose normalized form equals
/// the normalized wanted name, or `None` when no cell matches.
pub fn resolve_column(header: &[String], wanted: &str) -> Option<usize> {
    let wanted = normalize_name(wanted);
    header
        .iter()
        .position(|cell| normalize_name(cell) == wanted)
}

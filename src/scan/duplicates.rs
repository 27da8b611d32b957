//! Duplicate detection over composite invoice/position keys.

use crate::columns::resolve_column;
use crate::models::{DuplicateEntry, Table};
use std::collections::HashMap;
use tracing::debug;

/// Scan all data rows for duplicate invoice/position pairs.
///
/// Both column names resolve through the normalized lookup; when either is
/// missing the scan yields `(0, [])` rather than an error. Rows where both
/// trimmed components are empty are skipped entirely. Keys are counted on
/// the structured `(invoice, position)` pair, so a literal `|` inside a
/// component cannot collide with a different pair. Entries come out in
/// first-seen order of each distinct duplicate key.
pub fn scan_duplicates(
    table: &Table,
    invoice_column: &str,
    position_column: &str,
) -> (usize, Vec<DuplicateEntry>) {
    let Some(invoice_index) = resolve_column(&table.header, invoice_column) else {
        return (0, Vec::new());
    };
    let Some(position_index) = resolve_column(&table.header, position_column) else {
        return (0, Vec::new());
    };

    let mut counts: HashMap<(String, String), usize> = HashMap::new();
    let mut first_seen: Vec<(String, String)> = Vec::new();

    for row in &table.rows {
        let invoice = Table::field(row, invoice_index).trim();
        let position = Table::field(row, position_index).trim();

        if invoice.is_empty() && position.is_empty() {
            continue;
        }

        let key = (invoice.to_string(), position.to_string());
        match counts.get_mut(&key) {
            Some(count) => *count += 1,
            None => {
                counts.insert(key.clone(), 1);
                first_seen.push(key);
            }
        }
    }

    let entries: Vec<DuplicateEntry> = first_seen
        .into_iter()
        .filter_map(|key| {
            let count = counts[&key];
            (count >= 2).then(|| DuplicateEntry {
                invoice_number: key.0,
                invoice_position: key.1,
                count,
            })
        })
        .collect();

    debug!(
        rows = table.rows.len(),
        duplicate_keys = entries.len(),
        "duplicate scan complete"
    );

    (entries.len(), entries)
}

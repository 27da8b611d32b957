//! Tabular text parsing for preflight validation.
//!
//! The parser composes three small pieces:
//! - [`lines`] - logical line splitting across CR / LF / CRLF
//! - [`delimiter`] - delimiter sniffing from the header line
//! - [`tokenizer`] - quote-aware field tokenization
//!
//! and assembles them into a [`Table`]: a trimmed header plus data rows in
//! original file order, with blank lines skipped.

pub mod delimiter;
pub mod lines;
pub mod tokenizer;

pub use delimiter::{has_any_delimiter, sniff_delimiter};
pub use lines::{first_content_line, split_lines};
pub use tokenizer::tokenize;

use crate::models::Table;
use tracing::debug;

/// Parse raw file text into a table.
///
/// The first non-blank line is sniffed for a delimiter and tokenized as the
/// header (each cell trimmed); every subsequent non-blank line becomes a
/// data row. Returns an empty table when the input has no non-blank line.
pub fn parse(text: &str) -> Table {
    let lines = split_lines(text);

    let Some(header_index) = first_content_line(&lines) else {
        return Table::empty();
    };

    let header_line = lines[header_index];
    let delimiter = sniff_delimiter(header_line);

    let header: Vec<String> = tokenize(header_line, delimiter)
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect();

    let rows: Vec<Vec<String>> = lines[header_index + 1..]
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| tokenize(line, delimiter))
        .collect();

    debug!(
        columns = header.len(),
        rows = rows.len(),
        "parsed table"
    );

    Table {
        header,
        rows,
        delimiter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_table() {
        let table = parse("Invoice_Number;Date\nA1;20240101\nA2;20240102\n");
        assert_eq!(table.delimiter, ';');
        assert_eq!(table.header, vec!["Invoice_Number", "Date"]);
        assert_eq!(
            table.rows,
            vec![vec!["A1", "20240101"], vec!["A2", "20240102"]]
        );
    }

    #[test]
    fn test_parse_trims_header_cells_only() {
        let table = parse(" Invoice Number ; Date \n a1 ; 20240101");
        assert_eq!(table.header, vec!["Invoice Number", "Date"]);
        // data fields stay untrimmed
        assert_eq!(table.rows[0], vec![" a1 ", " 20240101"]);
    }

    #[test]
    fn test_parse_skips_leading_blank_lines() {
        let table = parse("\n  \na,b\n1,2");
        assert_eq!(table.header, vec!["a", "b"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_parse_skips_blank_data_lines() {
        let table = parse("a,b\n1,2\n\n   \n3,4\n");
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn test_parse_blank_input_returns_empty_table() {
        let table = parse("\n \n\t\n");
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_parse_ragged_rows_kept_as_is() {
        let table = parse("a,b,c\n1,2\n1,2,3,4");
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn test_parse_quoted_fields_with_sniffed_delimiter() {
        let table = parse("name,note\nx,\"hello, world\"");
        assert_eq!(table.delimiter, ',');
        assert_eq!(table.rows[0], vec!["x", "hello, world"]);
    }
}

//! Date-age checking and signature bounds.
//!
//! Walks the data rows once, skipping rows whose measure value is empty or
//! numerically zero, and for the rest parses the date field, flags rows
//! older than the configured number of whole months, and tracks the
//! min/max year-month for the dataset signature.

use crate::columns::resolve_column;
use crate::models::Table;
use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Outcome of one date scan: age errors plus the signature bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateScan {
    /// One entry per row whose date exceeds the allowed age
    pub errors: Vec<String>,

    /// Smallest `YYYY * 100 + MM` observed, or 0 when nothing parsed
    pub min_year_month: u32,

    /// Largest `YYYY * 100 + MM` observed, or 0 when nothing parsed
    pub max_year_month: u32,
}

/// A date in one of the two accepted textual shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowDate {
    year: u32,
    month: u32,
    day: u32,
}

impl RowDate {
    fn year_month(&self) -> u32 {
        self.year * 100 + self.month
    }

    fn months(&self) -> i64 {
        self.year as i64 * 12 + self.month as i64
    }
}

/// Scan data rows for too-old dates and compute signature bounds.
///
/// The date column is required; when it does not resolve the scan returns
/// an empty result (no errors, zero bounds). The measure column is
/// optional: when resolved, rows with an empty or numerically-zero measure
/// are skipped outright and contribute neither errors nor bounds. Rows
/// whose date has an unrecognized shape are silently skipped.
pub fn scan_dates(
    table: &Table,
    date_column: &str,
    measure_column: &str,
    max_months_age: i32,
    today: NaiveDate,
) -> DateScan {
    let mut scan = DateScan::default();

    if table.header.is_empty() {
        return scan;
    }

    let Some(date_index) = resolve_column(&table.header, date_column) else {
        debug!(column = date_column, "date column not found, skipping scan");
        return scan;
    };
    let measure_index = resolve_column(&table.header, measure_column);

    let today_months = today.year() as i64 * 12 + today.month() as i64;

    let mut min_ym = u32::MAX;
    let mut max_ym = 0u32;

    for (row_index, row) in table.rows.iter().enumerate() {
        if let Some(measure_index) = measure_index {
            let measure = Table::field(row, measure_index).trim();
            if measure.is_empty() || parses_as_zero(measure) {
                continue;
            }
        }

        let raw = Table::field(row, date_index).trim();
        let Some(date) = parse_row_date(raw) else {
            continue;
        };

        let age_in_months = today_months - date.months();
        if age_in_months > max_months_age as i64 {
            // +2: 1-based data row plus the header line
            scan.errors.push(format!(
                "Date error ({}-{:02}-{:02}) in row {}",
                date.year,
                date.month,
                date.day,
                row_index + 2
            ));
        }

        let ym = date.year_month();
        min_ym = min_ym.min(ym);
        max_ym = max_ym.max(ym);
    }

    scan.min_year_month = if min_ym == u32::MAX { 0 } else { min_ym };
    scan.max_year_month = max_ym;

    debug!(
        errors = scan.errors.len(),
        min_year_month = scan.min_year_month,
        max_year_month = scan.max_year_month,
        "date scan complete"
    );

    scan
}

/// True when the trimmed measure value parses as the number zero.
///
/// Decimal comma is accepted as a decimal separator; unparsable values are
/// not zero, so the row still participates in the date check.
fn parses_as_zero(value: &str) -> bool {
    value
        .replace(',', ".")
        .parse::<f64>()
        .map(|v| v == 0.0)
        .unwrap_or(false)
}

/// Parse a date in one of the two accepted shapes: eight consecutive
/// digits (`YYYYMMDD`) or `YYYY-MM-DD`. Anything else is `None`.
fn parse_row_date(raw: &str) -> Option<RowDate> {
    let bytes = raw.as_bytes();

    let (year, month, day) = match bytes.len() {
        8 if bytes.iter().all(u8::is_ascii_digit) => (&raw[0..4], &raw[4..6], &raw[6..8]),
        10 if bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit()) =>
        {
            (&raw[0..4], &raw[5..7], &raw[8..10])
        }
        _ => return None,
    };

    Some(RowDate {
        year: year.parse().ok()?,
        month: month.parse().ok()?,
        day: day.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_parse_row_date_compact() {
        assert_eq!(
            parse_row_date("20240305"),
            Some(RowDate {
                year: 2024,
                month: 3,
                day: 5
            })
        );
    }

    #[test]
    fn test_parse_row_date_dashed() {
        assert_eq!(
            parse_row_date("2024-03-05"),
            Some(RowDate {
                year: 2024,
                month: 3,
                day: 5
            })
        );
    }

    #[test]
    fn test_parse_row_date_rejects_other_shapes() {
        assert_eq!(parse_row_date("05.03.2024"), None);
        assert_eq!(parse_row_date("2024/03/05"), None);
        assert_eq!(parse_row_date("202403"), None);
        assert_eq!(parse_row_date("2024030a"), None);
        assert_eq!(parse_row_date(""), None);
    }

    #[test]
    fn test_parses_as_zero() {
        assert!(parses_as_zero("0"));
        assert!(parses_as_zero("0,0"));
        assert!(parses_as_zero("0.00"));
        assert!(!parses_as_zero("1"));
        assert!(!parses_as_zero("0,5"));
        assert!(!parses_as_zero("abc"));
    }

    #[test]
    fn test_age_at_threshold_is_not_an_error() {
        // exactly one month old with max_months_age = 1
        let table = parse("Date,Quantity\n20240501,2\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert!(scan.errors.is_empty());
        assert_eq!(scan.min_year_month, 202405);
        assert_eq!(scan.max_year_month, 202405);
    }

    #[test]
    fn test_age_past_threshold_reports_row_number() {
        // two months old with max_months_age = 1; data row 1 reports as row 2
        let table = parse("Date,Quantity\n20240401,2\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert_eq!(scan.errors, vec!["Date error (2024-04-01) in row 2"]);
    }

    #[test]
    fn test_error_date_zero_padded() {
        let table = parse("Date,Quantity\n2023-02-03,1\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert_eq!(scan.errors, vec!["Date error (2023-02-03) in row 2"]);
    }

    #[test]
    fn test_zero_measure_row_skipped_entirely() {
        // old date, but quantity is zero (plain or decimal-comma form):
        // no error, no signature contribution
        let table = parse("Date;Quantity\n20200101;0\n20200101;0,0\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert!(scan.errors.is_empty());
        assert_eq!(scan.min_year_month, 0);
        assert_eq!(scan.max_year_month, 0);
    }

    #[test]
    fn test_empty_measure_row_skipped() {
        let table = parse("Date,Quantity\n20200101,\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert!(scan.errors.is_empty());
        assert_eq!(scan.max_year_month, 0);
    }

    #[test]
    fn test_unparsable_measure_keeps_row() {
        let table = parse("Date,Quantity\n20200101,n/a\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert_eq!(scan.errors.len(), 1);
    }

    #[test]
    fn test_missing_measure_column_checks_every_row() {
        let table = parse("Date\n20200101\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert_eq!(scan.errors.len(), 1);
    }

    #[test]
    fn test_missing_date_column_yields_empty_scan() {
        let table = parse("Foo,Quantity\n20200101,1\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert_eq!(scan, DateScan::default());
    }

    #[test]
    fn test_malformed_dates_silently_skipped() {
        let table = parse("Date,Quantity\nnot-a-date,1\n20240601,1\n");
        let scan = scan_dates(&table, "Date", "Quantity", 1, today());
        assert!(scan.errors.is_empty());
        assert_eq!(scan.min_year_month, 202406);
        assert_eq!(scan.max_year_month, 202406);
    }

    #[test]
    fn test_min_max_bounds_across_rows() {
        let table = parse(
            "Date,Quantity\n\
             20240601,1\n\
             2024-03-15,1\n\
             20240510,1\n",
        );
        let scan = scan_dates(&table, "Date", "Quantity", 12, today());
        assert!(scan.errors.is_empty());
        assert_eq!(scan.min_year_month, 202403);
        assert_eq!(scan.max_year_month, 202406);
    }

    #[test]
    fn test_age_spans_year_boundary() {
        // December 2023 is six months before June 2024
        let table = parse("Date,Quantity\n20231201,1\n");
        let scan = scan_dates(&table, "Date", "Quantity", 6, today());
        assert!(scan.errors.is_empty());

        let scan = scan_dates(&table, "Date", "Quantity", 5, today());
        assert_eq!(scan.errors.len(), 1);
    }
}

//! CSV scanner for the published sheet export.
//!
//! The scanner is a single left-to-right pass with one character of
//! lookahead. It never fails: unbalanced quotes leave the scanner in quoted
//! mode and whatever is buffered at end of input is flushed as a final row.

use log::debug;

use super::record::MaintenanceRecord;

/// Parses sheet CSV text into records.
///
/// The first row is always treated as the header and discarded. Rows whose
/// item column is blank are dropped without being reported.
pub fn parse(text: &str) -> Vec<MaintenanceRecord> {
    let rows = split_rows(text);
    let data_rows = rows.len().saturating_sub(1);

    let records: Vec<MaintenanceRecord> = rows
        .iter()
        .skip(1)
        .enumerate()
        .filter_map(|(position, cells)| MaintenanceRecord::from_cells(position, cells))
        .collect();

    debug!(
        "Parsed {} records from {} data rows ({} dropped)",
        records.len(),
        data_rows,
        data_rows - records.len()
    );

    records
}

/// Splits CSV text into rows of raw (untrimmed) cells.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => row.push(std::mem::take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if !row.is_empty() || !field.is_empty() {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            _ => field.push(ch),
        }
    }

    if !row.is_empty() || !field.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Serializes one row, quoting fields that contain a delimiter, a quote or
/// a line break. Embedded quotes are doubled.
pub fn to_csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| {
            if field.contains([',', '"', '\r', '\n']) {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                (*field).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

//! Full-text search over the record table.

use crate::sheet::MaintenanceRecord;

/// Returns the records where any attribute contains `query`, ignoring case.
///
/// An empty query returns every record. Order is always preserved.
pub fn filter<'a>(records: &'a [MaintenanceRecord], query: &str) -> Vec<&'a MaintenanceRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches(record, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn matches(record: &MaintenanceRecord, needle: &str) -> bool {
    record
        .attribute_values()
        .any(|value| value.to_lowercase().contains(needle))
}

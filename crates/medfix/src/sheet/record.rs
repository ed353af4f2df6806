use serde::{Deserialize, Serialize};

/// Room name used when column A of a row is blank.
pub const NO_ROOM_PLACEHOLDER: &str = "Tanpa Ruangan";

/// Number of positional columns mapped into a record.
pub const COLUMN_COUNT: usize = 9;

/// Column index of the item name; rows with a blank item are dropped.
pub const ITEM_COLUMN: usize = 1;

/// One maintenance-complaint log entry from the sheet.
///
/// Columns are positional (A..I) and never reordered. `status`,
/// `obstacles_header` and `technician_notes` are carried through as-is and
/// only take part in full-text search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    /// `row-{n}` where `n` is the sheet row number. Unique within one parse.
    pub id: String,
    /// Column A.
    pub room_name: String,
    /// Column B.
    pub item_name: String,
    /// Column C.
    pub complaint_type: String,
    /// Column D. Kept as text, never parsed into a date.
    pub complaint_date: String,
    /// Column E.
    pub status: String,
    /// Column F. Empty (per `stats::is_empty`) means the repair is unfinished.
    pub repair_date: String,
    /// Column G.
    pub obstacles_header: String,
    /// Column H. Main source for obstacle statistics.
    pub obstacles_main: String,
    /// Column I.
    pub technician_notes: String,
}

impl MaintenanceRecord {
    /// Builds a record from raw row cells.
    ///
    /// `position` is the zero-based index of the row among the data rows that
    /// follow the header, before any filtering. Returns `None` when the item
    /// column is missing or blank.
    pub fn from_cells(position: usize, cells: &[String]) -> Option<Self> {
        let cell = |idx: usize| cells.get(idx).map(|c| c.trim()).unwrap_or("");

        let item_name = cell(ITEM_COLUMN);
        if item_name.is_empty() {
            return None;
        }

        let room_name = match cell(0) {
            "" => NO_ROOM_PLACEHOLDER,
            room => room,
        };

        Some(Self {
            // +1 for the header row, +1 for 1-based sheet numbering
            id: format!("row-{}", position + 2),
            room_name: room_name.to_string(),
            item_name: item_name.to_string(),
            complaint_type: cell(2).to_string(),
            complaint_date: cell(3).to_string(),
            status: cell(4).to_string(),
            repair_date: cell(5).to_string(),
            obstacles_header: cell(6).to_string(),
            obstacles_main: cell(7).to_string(),
            technician_notes: cell(8).to_string(),
        })
    }

    /// The nine sheet columns in positional order (A..I).
    pub fn columns(&self) -> [&str; COLUMN_COUNT] {
        [
            self.room_name.as_str(),
            self.item_name.as_str(),
            self.complaint_type.as_str(),
            self.complaint_date.as_str(),
            self.status.as_str(),
            self.repair_date.as_str(),
            self.obstacles_header.as_str(),
            self.obstacles_main.as_str(),
            self.technician_notes.as_str(),
        ]
    }

    /// Every attribute value, id included, as searched by the table filter.
    pub fn attribute_values(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.id.as_str()).chain(self.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_from_cells_maps_columns_in_order() {
        let record = MaintenanceRecord::from_cells(
            0,
            &cells(&[
                "ICU", "Bed", "Broken rail", "2024-01-02", "Open", "2024-01-05", "-",
                "No part", "Ordered",
            ]),
        )
        .unwrap();

        assert_eq!(record.id, "row-2");
        assert_eq!(record.room_name, "ICU");
        assert_eq!(record.item_name, "Bed");
        assert_eq!(record.complaint_type, "Broken rail");
        assert_eq!(record.complaint_date, "2024-01-02");
        assert_eq!(record.status, "Open");
        assert_eq!(record.repair_date, "2024-01-05");
        assert_eq!(record.obstacles_header, "-");
        assert_eq!(record.obstacles_main, "No part");
        assert_eq!(record.technician_notes, "Ordered");
    }

    #[test]
    fn test_from_cells_trims_and_defaults_missing_columns() {
        let record = MaintenanceRecord::from_cells(3, &cells(&["  ", "  Chair  "])).unwrap();

        assert_eq!(record.id, "row-5");
        assert_eq!(record.room_name, NO_ROOM_PLACEHOLDER);
        assert_eq!(record.item_name, "Chair");
        assert_eq!(record.complaint_type, "");
        assert_eq!(record.technician_notes, "");
    }

    #[test]
    fn test_from_cells_rejects_blank_item() {
        assert!(MaintenanceRecord::from_cells(0, &cells(&["ICU", "   ", "Leak"])).is_none());
        assert!(MaintenanceRecord::from_cells(0, &cells(&["ICU"])).is_none());
        assert!(MaintenanceRecord::from_cells(0, &[]).is_none());
    }

    #[test]
    fn test_attribute_values_include_id() {
        let record = MaintenanceRecord::from_cells(0, &cells(&["ICU", "Bed"])).unwrap();
        let values: Vec<&str> = record.attribute_values().collect();
        assert_eq!(values.len(), COLUMN_COUNT + 1);
        assert_eq!(values[0], "row-2");
        assert_eq!(values[2], "Bed");
    }

    #[test]
    fn test_serializes_camel_case() {
        let record = MaintenanceRecord::from_cells(0, &cells(&["ICU", "Bed"])).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["roomName"], "ICU");
        assert_eq!(json["itemName"], "Bed");
        assert!(json.get("obstaclesMain").is_some());
    }
}

//! Sheet export parsing: CSV scanning and the record data model.

pub mod parser;
pub mod record;

pub use parser::{parse, split_rows, to_csv_row};
pub use record::{MaintenanceRecord, COLUMN_COUNT, NO_ROOM_PLACEHOLDER};

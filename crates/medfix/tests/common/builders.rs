//! Builders for sheet rows and CSV exports.

#![allow(dead_code)]

use medfix::sheet::to_csv_row;

pub const HEADER: [&str; 9] = [
    "Nama Ruangan",
    "Nama Barang",
    "Jenis Komplain",
    "Tanggal Komplain",
    "Status",
    "Tanggal Perbaikan",
    "Kendala",
    "Kendala Utama",
    "Catatan Teknisi",
];

/// One sheet row, columns A..I.
#[derive(Debug, Clone)]
pub struct RowBuilder {
    cells: [String; 9],
}

impl RowBuilder {
    pub fn new(room: &str, item: &str) -> Self {
        let mut cells: [String; 9] = Default::default();
        cells[0] = room.to_string();
        cells[1] = item.to_string();
        Self { cells }
    }

    pub fn complaint(mut self, value: &str) -> Self {
        self.cells[2] = value.to_string();
        self
    }

    pub fn complaint_date(mut self, value: &str) -> Self {
        self.cells[3] = value.to_string();
        self
    }

    pub fn status(mut self, value: &str) -> Self {
        self.cells[4] = value.to_string();
        self
    }

    pub fn repaired_on(mut self, value: &str) -> Self {
        self.cells[5] = value.to_string();
        self
    }

    pub fn obstacle(mut self, header: &str, main: &str) -> Self {
        self.cells[6] = header.to_string();
        self.cells[7] = main.to_string();
        self
    }

    pub fn notes(mut self, value: &str) -> Self {
        self.cells[8] = value.to_string();
        self
    }

    pub fn to_line(&self) -> String {
        let fields: Vec<&str> = self.cells.iter().map(String::as_str).collect();
        to_csv_row(&fields)
    }
}

/// Assembles a full export: header plus rows.
#[derive(Debug, Clone)]
pub struct CsvBuilder {
    lines: Vec<String>,
    terminator: &'static str,
}

impl CsvBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec![to_csv_row(&HEADER)],
            terminator: "\n",
        }
    }

    /// Use `\r\n` between rows.
    pub fn crlf(mut self) -> Self {
        self.terminator = "\r\n";
        self
    }

    pub fn row(mut self, row: RowBuilder) -> Self {
        self.lines.push(row.to_line());
        self
    }

    /// Appends a raw line as-is.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join(self.terminator);
        text.push_str(self.terminator);
        text
    }
}

impl Default for CsvBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small but realistic export used across tests.
pub fn sample_export() -> String {
    CsvBuilder::new()
        .row(
            RowBuilder::new("ICU", "Ventilator")
                .complaint("Alarm mati")
                .complaint_date("01/03/2025")
                .status("Baru"),
        )
        .row(
            RowBuilder::new("Laboratorium", "Wastafel")
                .complaint("Bocor")
                .complaint_date("02/03/2025")
                .status("Selesai")
                .repaired_on("03/03/2025"),
        )
        .row(
            RowBuilder::new("IGD", "AC Split")
                .complaint("Bocor")
                .complaint_date("03/03/2025")
                .status("Proses")
                .obstacle("Ya", "Menunggu sparepart"),
        )
        .row(RowBuilder::new("Poli Anak", "").complaint("Baris tanpa barang"))
        .row(
            RowBuilder::new("", "Kursi Roda")
                .complaint("Roda macet, susah didorong")
                .status("Baru")
                .repaired_on("-"),
        )
        .row(
            RowBuilder::new("Radiologi", "AC Split")
                .complaint("-")
                .repaired_on("05/03/2025")
                .notes("Sudah \"dibersihkan\" filter"),
        )
        .build()
}

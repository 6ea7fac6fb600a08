//! CSV serialization of a [`Table`].
//!
//! [`CsvChunks`] yields the table as a sequence of CSV byte chunks (header first, then
//! `rows_per_chunk` rows at a time), so a transport can send it incrementally.

use std::sync::Arc;

use crate::types::{Table, Value};

/// Rows serialized per chunk by default.
pub const DEFAULT_ROWS_PER_CHUNK: usize = 1024;

/// Iterator over CSV byte chunks of a shared table.
#[derive(Debug)]
pub struct CsvChunks {
    table: Arc<Table>,
    next_row: usize,
    rows_per_chunk: usize,
    header_written: bool,
}

impl CsvChunks {
    /// A `rows_per_chunk` of zero is treated as one.
    pub fn new(table: Arc<Table>, rows_per_chunk: usize) -> Self {
        Self {
            table,
            next_row: 0,
            rows_per_chunk: rows_per_chunk.max(1),
            header_written: false,
        }
    }

    fn write_chunk(&mut self) -> Result<Vec<u8>, csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        if !self.header_written {
            wtr.write_record(&self.table.columns)?;
            self.header_written = true;
        }

        let end = (self.next_row + self.rows_per_chunk).min(self.table.row_count());
        for row in &self.table.rows[self.next_row..end] {
            wtr.write_record(row.iter().map(format_cell))?;
        }
        self.next_row = end;

        wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))
    }
}

impl Iterator for CsvChunks {
    type Item = Result<Vec<u8>, csv::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.header_written && self.next_row >= self.table.row_count() {
            return None;
        }
        Some(self.write_chunk())
    }
}

/// Serialize the whole table into one CSV buffer.
pub fn to_csv_bytes(table: &Arc<Table>) -> Result<Vec<u8>, csv::Error> {
    let mut out = Vec::new();
    for chunk in CsvChunks::new(Arc::clone(table), DEFAULT_ROWS_PER_CHUNK) {
        out.extend(chunk?);
    }
    Ok(out)
}

/// Render one cell. Null is an empty field; integral floats keep a `.0` so they re-read
/// as floats.
fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Int64(v) => v.to_string(),
        Value::Float64(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Value::Float64(v) => v.to_string(),
        Value::Utf8(s) => s.clone(),
    }
}

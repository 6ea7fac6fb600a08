//! CSV ingestion for a single file.

use std::path::Path;

use crate::error::{LoadError, LoadResult};
use crate::types::{Table, Value};

/// Cell strings read as missing values.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns `true` if `raw` denotes a missing value.
pub fn is_na(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

/// Inferred storage type of one column within one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int64,
    Float64,
    Utf8,
}

/// Ingest a CSV file into an in-memory [`Table`].
///
/// Rules:
///
/// - The first record is the header row; a file without one is [`LoadError::EmptyFile`].
/// - Duplicate header names are suffixed `.1`, `.2`, ... in order of appearance.
/// - Short records are padded with [`Value::Null`]; long records are an error.
/// - Each column is typed independently: integers if every non-null cell is an `i64`,
///   floats if every non-null cell is an `f64`, strings otherwise.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> LoadResult<Table> {
    let mut rdr = reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// The reader configuration used for every source file.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

/// Ingest CSV data from an existing CSV reader.
///
/// The reader must be built with `flexible(true)` for short records to be padded rather
/// than rejected by the `csv` crate itself.
pub fn ingest_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> LoadResult<Table> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::EmptyFile);
    }
    let columns = dedupe_headers(headers.iter());
    let width = columns.len();

    // First pass keeps raw cells so each column can be typed from all of its values.
    let mut raw_rows: Vec<Vec<Option<String>>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() > width {
            return Err(LoadError::TooManyFields {
                line: record.position().map(|p| p.line()).unwrap_or_default(),
                expected: width,
                found: record.len(),
            });
        }
        let mut row = Vec::with_capacity(width);
        for idx in 0..width {
            let cell = record.get(idx).unwrap_or("");
            row.push((!is_na(cell)).then(|| cell.to_owned()));
        }
        raw_rows.push(row);
    }

    let kinds: Vec<ColumnKind> = (0..width)
        .map(|idx| infer_kind(raw_rows.iter().filter_map(|row| row[idx].as_deref())))
        .collect();

    let rows = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&kinds)
                .map(|(cell, kind)| match cell {
                    None => Value::Null,
                    Some(raw) => typed_value(raw, *kind),
                })
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

fn dedupe_headers<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for name in headers {
        let mut candidate = name.to_owned();
        let mut suffix = 1;
        while out.contains(&candidate) {
            candidate = format!("{name}.{suffix}");
            suffix += 1;
        }
        out.push(candidate);
    }
    out
}

fn infer_kind<'a>(mut cells: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
    if cells.clone().all(|c| c.trim().parse::<i64>().is_ok()) {
        ColumnKind::Int64
    } else if cells.all(|c| c.trim().parse::<f64>().is_ok()) {
        ColumnKind::Float64
    } else {
        ColumnKind::Utf8
    }
}

fn typed_value(raw: String, kind: ColumnKind) -> Value {
    // Kinds were inferred from these same cells, so the numeric parses succeed.
    match kind {
        ColumnKind::Int64 => raw.trim().parse().map(Value::Int64).unwrap_or(Value::Utf8(raw)),
        // Any NaN spelling the float parser accepts is a missing value.
        ColumnKind::Float64 => match raw.trim().parse::<f64>() {
            Ok(v) if v.is_nan() => Value::Null,
            Ok(v) => Value::Float64(v),
            Err(_) => Value::Utf8(raw),
        },
        ColumnKind::Utf8 => Value::Utf8(raw),
    }
}

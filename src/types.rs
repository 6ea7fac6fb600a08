//! Core data model: the unified in-memory [`Table`] and its dynamic [`Value`] cells.
//!
//! Rows are stored row-major as `Vec<Value>` aligned with [`Table::columns`]. A row
//! serializes as a JSON object whose keys follow the column order (see [`RowRef`]).

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single scalar cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_none(),
            Value::Int64(v) => serializer.serialize_i64(*v),
            // JSON has no NaN/Infinity
            Value::Float64(v) if !v.is_finite() => serializer.serialize_none(),
            Value::Float64(v) => serializer.serialize_f64(*v),
            Value::Utf8(s) => serializer.serialize_str(s),
        }
    }
}

/// In-memory table assembled from one or more CSV files.
///
/// Invariant: every row has exactly `columns.len()` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from columns and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row length differs from the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        for (idx, row) in rows.iter().enumerate() {
            assert!(
                row.len() == columns.len(),
                "row {idx} has {} values but table has {} columns",
                row.len(),
                columns.len()
            );
        }
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Borrow a row as a name-addressable view.
    pub fn row(&self, idx: usize) -> Option<RowRef<'_>> {
        self.rows.get(idx).map(|values| RowRef {
            columns: &self.columns,
            values,
        })
    }

    /// Borrow the rows in `range` (clamped to the table length) as a serializable slice.
    pub fn slice(&self, start: usize, end: usize) -> RowsRef<'_> {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        RowsRef {
            columns: &self.columns,
            rows: &self.rows[start..end],
        }
    }
}

/// Borrowed view over one row, serialized as an ordered `{column: value}` object.
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    columns: &'a [String],
    values: &'a [Value],
}

impl<'a> RowRef<'a> {
    /// Value of `column` in this row, if the column exists.
    pub fn get(&self, column: &str) -> Option<&'a Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values.get(idx))
    }
}

impl Serialize for RowRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, value) in self.columns.iter().zip(self.values) {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Borrowed contiguous run of rows, serialized as a JSON array of row objects.
#[derive(Debug, Clone, Copy)]
pub struct RowsRef<'a> {
    columns: &'a [String],
    rows: &'a [Vec<Value>],
}

impl<'a> RowsRef<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = RowRef<'a>> + 'a {
        let columns = self.columns;
        self.rows.iter().map(move |values| RowRef { columns, values })
    }
}

impl Serialize for RowsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.iter() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

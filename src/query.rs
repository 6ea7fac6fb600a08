//! Read operations over the published table.
//!
//! Every operation first resolves the [`TableState`]; an unset state yields
//! [`QueryError::NoDataLoaded`] rather than a failure.

use std::sync::Arc;

use serde::Serialize;

use crate::error::QueryError;
use crate::export::{CsvChunks, DEFAULT_ROWS_PER_CHUNK};
use crate::processing::{Page, PageRequest, paginate};
use crate::state::TableState;
use crate::types::{RowsRef, Table};

/// Number of rows returned in [`Summary::sample`].
pub const SUMMARY_SAMPLE_ROWS: usize = 5;

/// Overview of the published table.
#[derive(Debug, Clone, Serialize)]
pub struct Summary<'a> {
    pub total_records: usize,
    pub columns: &'a [String],
    pub sample: RowsRef<'a>,
}

/// Read-only query service over a [`TableState`].
#[derive(Debug, Clone, Default)]
pub struct QueryService {
    state: TableState,
}

impl QueryService {
    pub fn new(state: TableState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Rows of one page plus pagination metadata.
    pub fn fetch_page(&self, req: PageRequest) -> Result<Page<'_>, QueryError> {
        let table = self.state.table()?;
        paginate(table, req)
    }

    /// The whole table as a stream of CSV chunks, header first.
    pub fn fetch_all(&self) -> Result<CsvChunks, QueryError> {
        self.fetch_all_chunked(DEFAULT_ROWS_PER_CHUNK)
    }

    /// Like [`Self::fetch_all`] with an explicit chunk size.
    pub fn fetch_all_chunked(&self, rows_per_chunk: usize) -> Result<CsvChunks, QueryError> {
        let table = self.state.table()?;
        Ok(CsvChunks::new(Arc::clone(table), rows_per_chunk))
    }

    /// Row count, column names and the first few rows.
    pub fn fetch_summary(&self) -> Result<Summary<'_>, QueryError> {
        let table: &Table = self.state.table()?;
        Ok(Summary {
            total_records: table.row_count(),
            columns: &table.columns,
            sample: table.slice(0, SUMMARY_SAMPLE_ROWS),
        })
    }
}

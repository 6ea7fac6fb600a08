//! Process-wide table state.

use std::sync::Arc;

use crate::error::QueryError;
use crate::types::Table;

/// The table published at startup, or nothing if loading found no data.
///
/// Built once before the server starts and cloned cheaply into every handler.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    table: Option<Arc<Table>>,
}

impl TableState {
    /// State with no published table.
    pub fn unset() -> Self {
        Self { table: None }
    }

    /// State publishing `table`.
    pub fn loaded(table: Table) -> Self {
        Self {
            table: Some(Arc::new(table)),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.table.is_some()
    }

    /// The published table, or [`QueryError::NoDataLoaded`].
    pub fn table(&self) -> Result<&Arc<Table>, QueryError> {
        self.table.as_ref().ok_or(QueryError::NoDataLoaded)
    }
}

//! Directory loader: every `*.csv` file in a directory, concatenated into one table.
//!
//! Most callers should use [`load_table_state`], which never fails: errors are logged and
//! collapse into an unset [`TableState`]. [`load_directory`] is the strict variant that
//! surfaces the first [`LoadError`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{LoadError, LoadResult};
use crate::processing::concat;
use crate::state::TableState;
use crate::types::Table;

use super::csv;
use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver};

/// Options controlling directory loading.
#[derive(Clone)]
pub struct LoadOptions {
    /// Observer notified of each file's outcome.
    pub observer: Arc<dyn LoadObserver>,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions").finish_non_exhaustive()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            observer: Arc::new(TracingObserver),
        }
    }
}

/// Result of a successful directory scan.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The directory contained no `*.csv` files.
    NoFiles,
    /// All files parsed and were concatenated.
    Loaded { table: Table, files: usize },
}

/// List the `*.csv` files directly inside `dir`, in lexicographic path order.
///
/// Subdirectories are not traversed and non-file entries are skipped. A missing
/// directory is an [`LoadError::Io`] error.
pub fn list_csv_files(dir: impl AsRef<Path>) -> LoadResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    // `glob` silently yields nothing for a missing directory.
    if !std::fs::metadata(dir)?.is_dir() {
        return Err(LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotADirectory,
            format!("{} is not a directory", dir.display()),
        )));
    }

    let dir_str = dir.to_str().ok_or_else(|| {
        LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("non UTF-8 directory path: {}", dir.display()),
        ))
    })?;
    let pattern = format!("{}/*.csv", glob::Pattern::escape(dir_str));

    let mut files = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every `*.csv` file in `dir` and concatenate them.
///
/// Files are read in [`list_csv_files`] order. The first failing file aborts the load.
pub fn load_directory(dir: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<LoadOutcome> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Ok(LoadOutcome::NoFiles);
    }

    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        let ctx = LoadContext { path: path.clone() };
        match csv::ingest_csv_from_path(path) {
            Ok(table) => {
                options.observer.on_success(
                    &ctx,
                    LoadStats {
                        rows: table.row_count(),
                        columns: table.columns.len(),
                    },
                );
                tables.push(table);
            }
            Err(err) => {
                options
                    .observer
                    .on_failure(&ctx, LoadSeverity::for_error(&err), &err);
                return Err(err);
            }
        }
    }

    Ok(LoadOutcome::Loaded {
        table: concat(tables),
        files: files.len(),
    })
}

/// Load `dir` into the process-wide [`TableState`].
///
/// - no files → logged at info level, state unset
/// - any error → logged at error level, state unset
#[tracing::instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn load_table_state(dir: impl AsRef<Path>, options: &LoadOptions) -> TableState {
    let dir = dir.as_ref();
    match load_directory(dir, options) {
        Ok(LoadOutcome::Loaded { table, files }) => {
            tracing::info!(
                records = table.row_count(),
                files,
                "loaded {} records from {} CSV files",
                table.row_count(),
                files
            );
            TableState::loaded(table)
        }
        Ok(LoadOutcome::NoFiles) => {
            tracing::info!("no CSV files found in {}", dir.display());
            TableState::unset()
        }
        Err(err) => {
            tracing::error!(error = %err, "error loading CSV files");
            TableState::unset()
        }
    }
}

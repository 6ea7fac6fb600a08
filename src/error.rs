use thiserror::Error;

/// Convenience result type for table loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned while loading CSV files into a [`crate::types::Table`].
///
/// Any of these aborts the whole load; no partial table is ever published.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. directory missing, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax or read error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The data directory could not be turned into a file pattern.
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read while listing files.
    #[error("failed to list files: {0}")]
    Glob(#[from] glob::GlobError),

    /// The file has no header row.
    #[error("no columns to parse from file")]
    EmptyFile,

    /// A record carries more fields than the header declares.
    #[error("expected {expected} fields in line {line}, saw {found}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

/// Outcome of a read operation that did not produce data.
///
/// `NoDataLoaded` and `PageOutOfRange` are ordinary results that callers render as
/// structured responses; `InvalidPageRequest` is a rejection of caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No table was published at startup.
    #[error("No CSV files found or loaded.")]
    NoDataLoaded,

    /// The requested page starts at or beyond the last row.
    #[error("Page number out of range.")]
    PageOutOfRange,

    /// `page` or `page_size` is outside its accepted range.
    #[error("invalid page request: {message}")]
    InvalidPageRequest { message: String },
}

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::LoadError;

/// Severity classification used for observer callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadSeverity {
    /// Content error (malformed CSV, too many fields, empty file).
    Error,
    /// Infrastructure error (typically I/O).
    Critical,
}

impl LoadSeverity {
    /// Classify a load error.
    pub fn for_error(e: &LoadError) -> Self {
        match e {
            LoadError::Io(_) | LoadError::Glob(_) => LoadSeverity::Critical,
            LoadError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => LoadSeverity::Critical,
                _ => LoadSeverity::Error,
            },
            LoadError::Pattern(_) | LoadError::EmptyFile | LoadError::TooManyFields { .. } => {
                LoadSeverity::Error
            }
        }
    }
}

/// Context about one file being loaded.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The CSV file path.
    pub path: PathBuf,
}

/// Stats reported for a successfully parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of rows in the file.
    pub rows: usize,
    /// Number of columns in the file header.
    pub columns: usize,
}

/// Observer interface for per-file load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a file parses successfully.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a file fails to load. The whole load is aborted afterwards.
    fn on_failure(&self, _ctx: &LoadContext, _severity: LoadSeverity, _error: &LoadError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }
}

/// Logs load events through `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl LoadObserver for TracingObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        tracing::debug!(
            path = %ctx.path.display(),
            rows = stats.rows,
            columns = stats.columns,
            "parsed csv file"
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: LoadSeverity, error: &LoadError) {
        match severity {
            LoadSeverity::Critical => tracing::error!(
                path = %ctx.path.display(),
                severity = ?severity,
                error = %error,
                "failed to read csv file"
            ),
            LoadSeverity::Error => tracing::warn!(
                path = %ctx.path.display(),
                severity = ?severity,
                error = %error,
                "failed to parse csv file"
            ),
        }
    }
}

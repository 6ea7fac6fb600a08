//! Table loading.
//!
//! Most callers should use [`load_table_state`] (from [`directory`]) which:
//!
//! - lists the `*.csv` files of a directory
//! - parses each one into a [`crate::types::Table`] (see [`csv`])
//! - concatenates them with a union of columns
//! - reports each file's outcome to a [`LoadObserver`]

pub mod csv;
pub mod directory;
pub mod observability;

pub use directory::{LoadOptions, LoadOutcome, list_csv_files, load_directory, load_table_state};
pub use observability::{
    CompositeObserver, LoadContext, LoadObserver, LoadSeverity, LoadStats, TracingObserver,
};

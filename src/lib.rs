//! `csv-data-service` loads every CSV file of a directory into one in-memory
//! [`types::Table`] at startup and serves it read-only over HTTP.
//!
//! ## Loading
//!
//! [`ingestion::load_table_state`] lists `*.csv` files (non-recursive, lexicographic
//! order), parses each with a header row, and concatenates them. The resulting columns are
//! the union of all file headers in first-seen order; rows from a file lacking a column
//! get [`types::Value::Null`] there. Any failing file aborts the whole load and leaves the
//! state unset.
//!
//! Cells are typed per file column: integers, then floats, then strings. Empty cells and
//! the usual NA markers (`NA`, `NaN`, `null`, ...) become [`types::Value::Null`].
//!
//! ## Querying
//!
//! [`query::QueryService`] offers three reads over the published table:
//!
//! - [`query::QueryService::fetch_page`]: one page plus pagination metadata
//! - [`query::QueryService::fetch_all`]: the whole table as CSV chunks
//! - [`query::QueryService::fetch_summary`]: row count, columns and a five-row sample
//!
//! ```no_run
//! use csv_data_service::ingestion::{LoadOptions, load_table_state};
//! use csv_data_service::processing::PageRequest;
//! use csv_data_service::query::QueryService;
//!
//! let service = QueryService::new(load_table_state("csv_files", &LoadOptions::default()));
//! match service.fetch_page(PageRequest::new(1, 10).unwrap()) {
//!     Ok(page) => println!("{} of {} pages", page.page, page.total_pages),
//!     Err(err) => println!("{err}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: directory listing, CSV parsing, load observers
//! - [`types`]: table and value types
//! - [`processing`]: concatenation and pagination
//! - [`export`]: CSV serialization
//! - [`query`]: the read operations
//! - [`server`]: the axum router and HTTP error rendering
//! - [`config`], [`logging`]: process setup

pub mod config;
pub mod error;
pub mod export;
pub mod ingestion;
pub mod logging;
pub mod processing;
pub mod query;
pub mod server;
pub mod state;
pub mod types;

pub use error::{LoadError, LoadResult, QueryError};

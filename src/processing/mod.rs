//! In-memory table transformations.
//!
//! Currently implemented:
//!
//! - [`concat()`]: row-wise union of several tables, null-padding missing columns
//! - [`paginate()`]: page arithmetic and row slicing
//!
//! ## Example: concat → paginate
//!
//! ```rust
//! use csv_data_service::processing::{PageRequest, concat, paginate};
//! use csv_data_service::types::{Table, Value};
//!
//! let a = Table::new(
//!     vec!["x".to_string(), "y".to_string()],
//!     vec![vec![Value::Int64(1), Value::Int64(2)]],
//! );
//! let b = Table::new(
//!     vec!["y".to_string(), "z".to_string()],
//!     vec![vec![Value::Int64(3), Value::Int64(4)]],
//! );
//!
//! let table = concat([a, b]);
//! assert_eq!(table.columns, vec!["x", "y", "z"]);
//!
//! let page = paginate(&table, PageRequest::new(1, 1).unwrap()).unwrap();
//! assert_eq!(page.total_pages, 2);
//! assert_eq!(page.data.len(), 1);
//! ```

pub mod concat;
pub mod page;

pub use concat::concat;
pub use page::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Page, PageRequest, paginate};

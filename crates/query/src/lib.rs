//! Row filtering and sorting engine for data grids.
//!
//! # Overview
//!
//! This crate evaluates filter and sort clause lists over in-memory
//! collections of loosely typed rows (`serde_json::Value` objects). The
//! two entry points are [`apply_filters`] and [`apply_sort`]; both are
//! pure — they never mutate their inputs and always return a new
//! collection — and neither can fail: degenerate input degrades to no-op
//! clauses or missing values, never to an error.
//!
//! Column definitions can supply a nested field path (resolved through
//! [`sg_grid_field_path`]), a computed accessor for virtual columns, and
//! per-column filter/sort hook overrides that bypass the built-in
//! operator library.
//!
//! # Example
//!
//! ```
//! use sg_grid_query::{apply_filters, apply_sort, FilterClause, FilterOptions, SortClause};
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"id": 1, "name": "Alice", "age": 30}),
//!     json!({"id": 2, "name": "Bob", "age": 25}),
//!     json!({"id": 3, "name": "Carol", "age": null}),
//! ];
//!
//! let filter = vec![FilterClause::new("age", "gte", json!(25))];
//! let adults = apply_filters(&rows, Some(&filter), None, &FilterOptions::default());
//! assert_eq!(adults.len(), 2);
//!
//! let sorted = apply_sort(&adults, Some(&[SortClause::desc("age")]), None);
//! assert_eq!(sorted[0]["name"], json!("Alice"));
//! ```

pub mod coerce;
pub mod diagnostics;
pub mod filter;
pub mod operators;
pub mod sort;
pub mod types;
pub mod visible;

mod resolve;

// Re-export the core public API
pub use coerce::{coerce_if_numeric, is_missing, stringify, try_coerce_number, Coerced};
pub use diagnostics::{ClauseWarning, DiagnosticSink, NoopSink};
pub use filter::apply_filters;
pub use operators::{
    op_between, op_contains, op_ends_with, op_eq, op_in, op_ne, op_relational, op_starts_with,
    FilterOperator, Relation,
};
pub use sort::apply_sort;
pub use types::{
    ColumnDef, Columns, Field, FilterClause, FilterOptions, PageRequest, Row, SortClause,
    SortDirection,
};
pub use visible::{visible_rows, FilterMode};

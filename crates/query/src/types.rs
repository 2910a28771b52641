//! Clause, column, and request types forming the grid's data boundary.

use crate::diagnostics::DiagnosticSink;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A row is any JSON value; in practice an object mapping column keys to
/// cell values. Rows are supplied fresh on every call and never mutated.
pub type Row = Value;

/// A single filter directive: retain rows whose `column` cell satisfies
/// `operator` against `value`. A clause list is implicitly ANDed.
///
/// The operator is carried as a string so that clause lists arriving from
/// the UI (or a wire format) round-trip unchanged; an unrecognized name
/// degrades to a no-op clause with a diagnostic, it is never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub operator: String,
    #[serde(default)]
    pub value: Value,
}

impl FilterClause {
    pub fn new(column: &str, operator: &str, value: Value) -> Self {
        Self {
            column: column.to_string(),
            operator: operator.to_string(),
            value,
        }
    }
}

/// Sort direction for a [`SortClause`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A single sort directive. The first clause in a list is the primary
/// key; later clauses break ties in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortClause {
    pub column: String,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn asc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: &str) -> Self {
        Self {
            column: column.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Computed-column accessor: derives a cell value from the whole row.
pub type FieldFn = dyn Fn(&Row) -> Value;

/// Column-level filter override. Receives the resolved cell value (absent
/// as `None`), the clause value, the row, and the clause; its boolean
/// decides the clause outcome, bypassing the built-in operators.
pub type FilterFn = dyn Fn(Option<&Value>, &Value, &Row, &FilterClause) -> bool;

/// Column-level sort override. Receives both cell values (never missing;
/// missing cells are ordered before the override runs) and both rows.
/// Only the sign of the result is used; zero falls through to the next
/// sort clause.
pub type SortFn = dyn Fn(&Value, &Value, &Row, &Row) -> f64;

/// How a column reaches into a row for its cell value.
pub enum Field {
    /// A dotted/bracketed field path, resolved non-throwingly.
    Path(String),
    /// A computed accessor for virtual columns.
    Computed(Box<FieldFn>),
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Path(p) => f.debug_tuple("Path").field(p).finish(),
            Field::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A logical column: a lookup `key` matched against clause column names,
/// a [`Field`] locating the cell value, and optional filter/sort hook
/// overrides.
pub struct ColumnDef {
    pub key: String,
    pub field: Field,
    pub filter_function: Option<Box<FilterFn>>,
    pub sort_function: Option<Box<SortFn>>,
}

impl ColumnDef {
    /// Column backed by a field path.
    pub fn new(key: &str, field: &str) -> Self {
        Self {
            key: key.to_string(),
            field: Field::Path(field.to_string()),
            filter_function: None,
            sort_function: None,
        }
    }

    /// Column backed by a computed accessor.
    pub fn computed(key: &str, field: impl Fn(&Row) -> Value + 'static) -> Self {
        Self {
            key: key.to_string(),
            field: Field::Computed(Box::new(field)),
            filter_function: None,
            sort_function: None,
        }
    }

    pub fn with_filter_function(
        mut self,
        f: impl Fn(Option<&Value>, &Value, &Row, &FilterClause) -> bool + 'static,
    ) -> Self {
        self.filter_function = Some(Box::new(f));
        self
    }

    pub fn with_sort_function(
        mut self,
        f: impl Fn(&Value, &Value, &Row, &Row) -> f64 + 'static,
    ) -> Self {
        self.sort_function = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("field", &self.field)
            .field("filter_function", &self.filter_function.is_some())
            .field("sort_function", &self.sort_function.is_some())
            .finish()
    }
}

/// Column definitions as the evaluators consume them: either an ordered
/// list scanned by key, or a key→definition map.
pub enum Columns<'a> {
    List(&'a [ColumnDef]),
    Map(&'a HashMap<String, ColumnDef>),
}

impl Columns<'_> {
    /// Find the definition whose `key` matches a clause's column name.
    pub fn find(&self, key: &str) -> Option<&ColumnDef> {
        match self {
            Columns::List(cols) => cols.iter().find(|c| c.key == key),
            Columns::Map(map) => map.get(key),
        }
    }
}

impl<'a> From<&'a [ColumnDef]> for Columns<'a> {
    fn from(cols: &'a [ColumnDef]) -> Self {
        Columns::List(cols)
    }
}

impl<'a> From<&'a HashMap<String, ColumnDef>> for Columns<'a> {
    fn from(map: &'a HashMap<String, ColumnDef>) -> Self {
        Columns::Map(map)
    }
}

/// Options for [`apply_filters`](crate::apply_filters).
///
/// `diagnostics` replaces a global dev-console side channel: warnings
/// about degenerate clauses go to the sink if one is supplied, otherwise
/// nowhere.
#[derive(Default)]
pub struct FilterOptions<'a> {
    pub case_sensitive: bool,
    pub diagnostics: Option<&'a dyn DiagnosticSink>,
}

/// Server-side page request descriptor.
///
/// In server-side mode the grid does not evaluate clauses locally; it
/// forwards them, along with the requested page window, to an external
/// request handler in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
    #[serde(default)]
    pub sort: Vec<SortClause>,
    #[serde(default)]
    pub filter: Vec<FilterClause>,
}

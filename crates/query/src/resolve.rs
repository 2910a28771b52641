//! Cell-value resolution shared by the filter and sort evaluators.

use crate::types::{Columns, Field, Row};
use serde_json::Value;
use sg_grid_field_path::resolve_field_path;

/// Resolve the cell value a clause refers to.
///
/// When a column definition matches the clause's column by key, its
/// [`Field`] locates the value: path fields go through the non-throwing
/// path resolver, computed fields invoke the accessor. Without a match
/// the column name is a flat key lookup on the row object. `None` means
/// absent.
pub(crate) fn resolve_cell(row: &Row, column: &str, columns: Option<&Columns>) -> Option<Value> {
    if let Some(col) = columns.and_then(|c| c.find(column)) {
        return match &col.field {
            Field::Path(path) => resolve_field_path(row, path).cloned(),
            Field::Computed(f) => Some(f(row)),
        };
    }
    row.as_object().and_then(|map| map.get(column)).cloned()
}

//! Row filtering.
//!
//! [`apply_filters`] applies an ordered clause list (implicit AND) to a
//! row collection and returns a new collection. It never mutates its
//! inputs and never fails: degenerate clauses (unknown operator names,
//! malformed `between` ranges) degrade to no-ops with a warning on the
//! diagnostics sink, and an absent or `null` cell simply follows the
//! per-operator missing-value rules.

use crate::diagnostics::ClauseWarning;
use crate::operators::FilterOperator;
use crate::resolve::resolve_cell;
use crate::types::{Columns, FilterClause, FilterOptions, Row};
use serde_json::Value;

/// Filter `rows` down to those satisfying every clause.
///
/// A `None` or empty clause list returns a shallow copy of `rows`
/// unchanged. A column definition matching a clause's column supplies the
/// field path (or computed accessor) for cell resolution, and its
/// `filter_function`, when present, decides the clause outcome instead of
/// the built-in operators.
///
/// # Example
///
/// ```
/// use sg_grid_query::{apply_filters, FilterClause, FilterOptions};
/// use serde_json::json;
///
/// let rows = vec![json!({"name": "Alice"}), json!({"name": "Bob"})];
/// let filter = vec![FilterClause::new("name", "contains", json!("ali"))];
/// let out = apply_filters(&rows, Some(&filter), None, &FilterOptions::default());
/// assert_eq!(out, vec![json!({"name": "Alice"})]);
/// ```
pub fn apply_filters(
    rows: &[Row],
    filter: Option<&[FilterClause]>,
    columns: Option<&Columns>,
    options: &FilterOptions,
) -> Vec<Row> {
    let clauses = match filter {
        Some(clauses) if !clauses.is_empty() => clauses,
        _ => return rows.to_vec(),
    };

    rows.iter()
        .filter(|row| row_passes(row, clauses, columns, options))
        .cloned()
        .collect()
}

fn row_passes(
    row: &Row,
    clauses: &[FilterClause],
    columns: Option<&Columns>,
    options: &FilterOptions,
) -> bool {
    for clause in clauses {
        let cell = resolve_cell(row, &clause.column, columns);

        // column-level override bypasses the built-in operators entirely
        if let Some(col) = columns.and_then(|c| c.find(&clause.column)) {
            if let Some(filter_fn) = &col.filter_function {
                if !filter_fn(cell.as_ref(), &clause.value, row, clause) {
                    return false;
                }
                continue;
            }
        }

        let op = match FilterOperator::from_name(&clause.operator) {
            Some(op) => op,
            None => {
                warn(
                    options,
                    ClauseWarning::UnknownOperator {
                        operator: clause.operator.clone(),
                        column: clause.column.clone(),
                    },
                );
                continue;
            }
        };

        if op == FilterOperator::Between && !is_two_element_array(&clause.value) {
            warn(
                options,
                ClauseWarning::MalformedBetween {
                    column: clause.column.clone(),
                },
            );
            continue;
        }

        if !op.evaluate(cell.as_ref(), &clause.value, options.case_sensitive) {
            return false;
        }
    }
    true
}

fn is_two_element_array(value: &Value) -> bool {
    matches!(value, Value::Array(arr) if arr.len() == 2)
}

fn warn(options: &FilterOptions, warning: ClauseWarning) {
    if let Some(sink) = options.diagnostics {
        sink.warn(warning);
    }
}

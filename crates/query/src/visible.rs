//! Visible-rows composition.
//!
//! A thin layer above [`apply_filters`] and [`apply_sort`] for grid
//! consumers: it adds a fast-path shallow copy when nothing is
//! configured, and OR-combination of independently evaluated filter
//! clauses on top of the evaluators' native AND.

use crate::filter::apply_filters;
use crate::sort::apply_sort;
use crate::types::{Columns, FilterClause, FilterOptions, Row, SortClause};
use std::collections::HashSet;

/// How a multi-clause filter combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every clause must pass (the evaluators' native behavior).
    #[default]
    And,
    /// Union of the rows passing each clause individually.
    Or,
}

/// Compute the rows a grid should render: filter, then sort.
///
/// With no filter and no sort this is a shallow copy of `rows`. In
/// [`FilterMode::Or`] each clause is evaluated independently over the
/// base rows and the results are unioned in first-occurrence order,
/// deduplicated by the row's `id` field when present (else by the row's
/// JSON text).
pub fn visible_rows(
    rows: &[Row],
    filter: Option<&[FilterClause]>,
    sort: Option<&[SortClause]>,
    columns: Option<&Columns>,
    mode: FilterMode,
    options: &FilterOptions,
) -> Vec<Row> {
    let no_filter = filter.map_or(true, |f| f.is_empty());
    let no_sort = sort.map_or(true, |s| s.is_empty());
    if no_filter && no_sort {
        return rows.to_vec();
    }

    let filtered = if no_filter {
        rows.to_vec()
    } else {
        match mode {
            FilterMode::And => apply_filters(rows, filter, columns, options),
            FilterMode::Or => union_of_clauses(rows, filter.unwrap_or(&[]), columns, options),
        }
    };

    if no_sort {
        filtered
    } else {
        apply_sort(&filtered, sort, columns)
    }
}

fn union_of_clauses(
    rows: &[Row],
    clauses: &[FilterClause],
    columns: Option<&Columns>,
    options: &FilterOptions,
) -> Vec<Row> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut union = Vec::new();
    for clause in clauses {
        let matched = apply_filters(rows, Some(std::slice::from_ref(clause)), columns, options);
        for row in matched {
            if seen.insert(row_key(&row)) {
                union.push(row);
            }
        }
    }
    union
}

/// Dedup key for the OR union: a stable `id` when the row carries one,
/// else the full JSON text.
fn row_key(row: &Row) -> String {
    match row.get("id") {
        Some(id) => id.to_string(),
        None => row.to_string(),
    }
}

//! Row sorting.
//!
//! [`apply_sort`] copies the row collection and stable-sorts it by an
//! ordered clause chain: the first clause is the primary key, later
//! clauses break ties, and rows tying through the whole chain keep their
//! input order.

use crate::coerce::{is_missing, stringify, try_coerce_number};
use crate::resolve::resolve_cell;
use crate::types::{Columns, Row, SortClause, SortDirection};
use std::cmp::Ordering;

/// Sort `rows` by the clause chain, returning a new collection.
///
/// A `None` or empty clause list returns a shallow copy in input order.
/// Per clause: a missing cell sorts before any present value regardless
/// of direction; a column-level `sort_function` replaces the built-in
/// comparison (its sign, direction-adjusted, decides; zero falls through
/// to the next clause); otherwise values compare numerically when both
/// sides coerce to numbers and lexicographically by codepoint otherwise.
///
/// # Example
///
/// ```
/// use sg_grid_query::{apply_sort, SortClause};
/// use serde_json::json;
///
/// let rows = vec![json!({"n": 10}), json!({"n": 2})];
/// let sorted = apply_sort(&rows, Some(&[SortClause::asc("n")]), None);
/// assert_eq!(sorted, vec![json!({"n": 2}), json!({"n": 10})]);
/// ```
pub fn apply_sort(rows: &[Row], sort: Option<&[SortClause]>, columns: Option<&Columns>) -> Vec<Row> {
    let clauses = match sort {
        Some(clauses) if !clauses.is_empty() => clauses,
        _ => return rows.to_vec(),
    };

    let mut sorted = rows.to_vec();
    // Vec::sort_by is stable: full-chain ties keep input order
    sorted.sort_by(|a, b| compare_rows(a, b, clauses, columns));
    sorted
}

fn compare_rows(a: &Row, b: &Row, clauses: &[SortClause], columns: Option<&Columns>) -> Ordering {
    for clause in clauses {
        // fold explicit null into absent so one match orders the
        // missing combinations and binds the present values
        let av = resolve_cell(a, &clause.column, columns).filter(|v| !is_missing(Some(v)));
        let bv = resolve_cell(b, &clause.column, columns).filter(|v| !is_missing(Some(v)));

        let (av, bv) = match (av, bv) {
            (None, None) => continue,
            // missing precedes present in both directions
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(av), Some(bv)) => (av, bv),
        };

        if let Some(col) = columns.and_then(|c| c.find(&clause.column)) {
            if let Some(sort_fn) = &col.sort_function {
                let cmp = sort_fn(&av, &bv, a, b);
                let ord = if cmp < 0.0 {
                    Ordering::Less
                } else if cmp > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                };
                if ord != Ordering::Equal {
                    return apply_direction(clause.direction, ord);
                }
                continue;
            }
        }

        let ord = match (try_coerce_number(Some(&av)), try_coerce_number(Some(&bv))) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => stringify(&av).cmp(&stringify(&bv)),
        };
        if ord != Ordering::Equal {
            return apply_direction(clause.direction, ord);
        }
    }
    Ordering::Equal
}

fn apply_direction(direction: SortDirection, ord: Ordering) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

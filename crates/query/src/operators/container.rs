//! Membership operator: `in`.

use super::comparison::op_eq;
use crate::coerce::is_missing;
use serde_json::Value;

/// `in`: with an array clause value, true iff any element `eq`-matches
/// the cell (numeric coercion included). With anything else the clause
/// value is treated as a single value and compared exactly like `eq`.
/// A missing value on either side never matches.
pub fn op_in(cell: Option<&Value>, clause_value: &Value) -> bool {
    if is_missing(cell) || clause_value.is_null() {
        return false;
    }
    match clause_value {
        Value::Array(items) => items.iter().any(|item| op_eq(cell, item)),
        single => op_eq(cell, single),
    }
}

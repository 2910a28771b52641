//! Substring operators: `contains`, `startsWith`, `endsWith`.
//!
//! Both sides are stringified (numbers render as their display form, see
//! [`crate::coerce::stringify`]) and compared case-insensitively unless
//! the caller asks for case sensitivity. A missing value on either side
//! never matches.

use crate::coerce::{is_missing, stringify};
use serde_json::Value;

fn string_pair(
    cell: Option<&Value>,
    clause_value: &Value,
    case_sensitive: bool,
) -> Option<(String, String)> {
    if is_missing(cell) || clause_value.is_null() {
        return None;
    }
    let cell = cell?;
    let a = stringify(cell);
    let b = stringify(clause_value);
    if case_sensitive {
        Some((a, b))
    } else {
        Some((a.to_lowercase(), b.to_lowercase()))
    }
}

pub fn op_contains(cell: Option<&Value>, clause_value: &Value, case_sensitive: bool) -> bool {
    match string_pair(cell, clause_value, case_sensitive) {
        Some((a, b)) => a.contains(&b),
        None => false,
    }
}

pub fn op_starts_with(cell: Option<&Value>, clause_value: &Value, case_sensitive: bool) -> bool {
    match string_pair(cell, clause_value, case_sensitive) {
        Some((a, b)) => a.starts_with(&b),
        None => false,
    }
}

pub fn op_ends_with(cell: Option<&Value>, clause_value: &Value, case_sensitive: bool) -> bool {
    match string_pair(cell, clause_value, case_sensitive) {
        Some((a, b)) => a.ends_with(&b),
        None => false,
    }
}

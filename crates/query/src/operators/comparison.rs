//! Equality, relational, and range operators.

use crate::coerce::{coerce_if_numeric, is_missing, try_coerce_number, Coerced};
use serde_json::Value;

/// `eq`: numeric comparison when both sides coerce to numbers, strict
/// value equality otherwise.
///
/// A missing cell never matches — not even against a missing clause
/// value, so `eq(null, null)` is false.
pub fn op_eq(cell: Option<&Value>, clause_value: &Value) -> bool {
    if is_missing(cell) {
        return false;
    }
    match (coerce_if_numeric(cell), coerce_if_numeric(Some(clause_value))) {
        (Coerced::Number(a), Coerced::Number(b)) => a == b,
        (Coerced::Other(a), Coerced::Other(b)) => a == b,
        // missing clause value, or a number against a non-number
        _ => false,
    }
}

/// `ne`: negation of `eq`'s comparison, except that a missing cell (and a
/// missing clause value) always satisfies `ne`.
pub fn op_ne(cell: Option<&Value>, clause_value: &Value) -> bool {
    if is_missing(cell) {
        return true;
    }
    match (coerce_if_numeric(cell), coerce_if_numeric(Some(clause_value))) {
        (Coerced::Number(a), Coerced::Number(b)) => a != b,
        (Coerced::Other(a), Coerced::Other(b)) => a != b,
        _ => true,
    }
}

/// Relational comparison kind for [`op_relational`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Lt,
    Lte,
    Gt,
    Gte,
}

/// `lt`/`lte`/`gt`/`gte`: both sides must coerce to numbers, else no
/// match. A missing cell never matches.
pub fn op_relational(cell: Option<&Value>, clause_value: &Value, relation: Relation) -> bool {
    let a = match try_coerce_number(cell) {
        Some(n) => n,
        None => return false,
    };
    let b = match try_coerce_number(Some(clause_value)) {
        Some(n) => n,
        None => return false,
    };
    match relation {
        Relation::Lt => a < b,
        Relation::Lte => a <= b,
        Relation::Gt => a > b,
        Relation::Gte => a >= b,
    }
}

/// `between`: clause value must be a two-element `[low, high]` array and
/// all three operands must coerce to numbers; inclusive on both ends.
pub fn op_between(cell: Option<&Value>, clause_value: &Value) -> bool {
    if is_missing(cell) || clause_value.is_null() {
        return false;
    }
    let range = match clause_value {
        Value::Array(arr) if arr.len() == 2 => arr,
        _ => return false,
    };
    let a = match try_coerce_number(cell) {
        Some(n) => n,
        None => return false,
    };
    let low = match try_coerce_number(Some(&range[0])) {
        Some(n) => n,
        None => return false,
    };
    let high = match try_coerce_number(Some(&range[1])) {
        Some(n) => n,
        None => return false,
    };
    a >= low && a <= high
}

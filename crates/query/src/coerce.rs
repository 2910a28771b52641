//! Value classification and coercion.
//!
//! A cell value is `Option<&Value>`: `None` for an absent key or failed
//! path resolution, `Some` for anything present. "Missing" unifies absent
//! and explicit `null` — JSON has no NaN, and `serde_json` folds
//! non-finite floats into `null`, so the whole null/undefined/NaN family
//! lands in one class.
//!
//! Two numeric coercions exist on purpose. [`coerce_if_numeric`] is the
//! equality coercion: best-effort, preserving non-numeric values so they
//! can still compare strictly. [`try_coerce_number`] is the strict
//! coercion used by relational operators and sorting: number-or-bust.

use serde_json::Value;

/// True for absent values and explicit `null`.
pub fn is_missing(v: Option<&Value>) -> bool {
    matches!(v, None | Some(Value::Null))
}

/// Result of the equality-oriented coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<'a> {
    /// Absent or `null`.
    Missing,
    /// A number, or a string that round-trips to a finite number.
    Number(f64),
    /// Anything else, unchanged.
    Other(&'a Value),
}

/// Best-effort numeric coercion.
///
/// Missing → [`Coerced::Missing`]. A number → itself. A string whose
/// trimmed form parses to a finite number → that number. Any other value
/// (including non-numeric strings) passes through unchanged for strict
/// comparison downstream.
pub fn coerce_if_numeric(v: Option<&Value>) -> Coerced<'_> {
    let v = match v {
        None | Some(Value::Null) => return Coerced::Missing,
        Some(v) => v,
    };
    match v {
        Value::Number(n) => match n.as_f64() {
            Some(f) => Coerced::Number(f),
            None => Coerced::Other(v),
        },
        Value::String(s) => match parse_finite(s) {
            Some(f) => Coerced::Number(f),
            None => Coerced::Other(v),
        },
        _ => Coerced::Other(v),
    }
}

/// Strict numeric-only coercion: number or numeric string → `Some`,
/// everything else (missing included) → `None`.
pub fn try_coerce_number(v: Option<&Value>) -> Option<f64> {
    match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_finite(s),
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    let n: f64 = trimmed.parse().ok()?;
    // "NaN" and "inf" parse in Rust; only finite strings count as numeric
    n.is_finite().then_some(n)
}

/// Display coercion used by the string operators and lexicographic
/// sorting. Whole-valued floats render without a trailing `.0` so `10.0`
/// and `10` stringify identically.
pub fn stringify(v: &Value) -> String {
    match v {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return i.to_string();
            }
            if let Some(u) = n.as_u64() {
                return u.to_string();
            }
            match n.as_f64() {
                // exact below 2^53
                Some(f) if f.fract() == 0.0 && f.abs() < 9.007_199_254_740_992e15 => {
                    format!("{}", f as i64)
                }
                _ => n.to_string(),
            }
        }
        Value::String(s) => s.clone(),
        // arrays and objects render as their JSON text
        _ => v.to_string(),
    }
}

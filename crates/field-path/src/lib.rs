//! Nested field-path resolution for grid rows.
//!
//! Column definitions address row data with path strings like
//! `"address[0].country.code"` or `"address['home'].street"`. This crate
//! parses such paths into steps and resolves them against a
//! [`serde_json::Value`] row.
//!
//! Resolution is non-throwing by contract: any miss — an absent key, an
//! out-of-range or non-numeric array index, a scalar in the middle of the
//! path, an empty path — yields `None` ("absent"). Downstream code treats
//! absent the same way it treats an explicit `null`.
//!
//! # Example
//!
//! ```
//! use sg_grid_field_path::resolve_field_path;
//! use serde_json::json;
//!
//! let row = json!({"address": [{"country": {"code": "US"}}]});
//! let code = resolve_field_path(&row, "address[0].country.code");
//! assert_eq!(code, Some(&json!("US")));
//!
//! // Misses resolve to absent, never an error
//! assert_eq!(resolve_field_path(&row, "address[9].country.code"), None);
//! ```

use serde_json::Value;

/// Parse a field-path string into lookup steps.
///
/// Supported syntax:
/// - dot-separated segments: `a.b.c` → `["a", "b", "c"]`
/// - numeric brackets: `a[0].b` → `["a", "0", "b"]`
/// - quoted brackets for keys containing dots or other special
///   characters: `a['x.y'].b` and `a["x.y"].b` → `["a", "x.y", "b"]`
///
/// The parser is infallible. Malformed input (an unterminated bracket or
/// quote) degrades to best-effort steps; an explicit empty segment such as
/// the one in `"a..b"` is kept and will simply fail to resolve.
///
/// # Example
///
/// ```
/// use sg_grid_field_path::parse_field_path;
///
/// assert_eq!(parse_field_path("a.b[0].c"), vec!["a", "b", "0", "c"]);
/// assert_eq!(parse_field_path("a['b.c'].d"), vec!["a", "b.c", "d"]);
/// assert_eq!(parse_field_path(""), Vec::<String>::new());
/// ```
pub fn parse_field_path(path: &str) -> Vec<String> {
    let chars: Vec<char> = path.chars().collect();
    let n = chars.len();
    let mut steps = Vec::new();
    let mut i = 0;

    while i < n {
        if chars[i] == '[' {
            i += 1;
            let mut step = String::new();
            if i < n && (chars[i] == '\'' || chars[i] == '"') {
                let quote = chars[i];
                i += 1;
                while i < n && chars[i] != quote {
                    step.push(chars[i]);
                    i += 1;
                }
                // closing quote, then anything up to the closing bracket
                i += 1;
                while i < n && chars[i] != ']' {
                    i += 1;
                }
            } else {
                while i < n && chars[i] != ']' {
                    step.push(chars[i]);
                    i += 1;
                }
            }
            // closing bracket
            i += 1;
            steps.push(step);
        } else {
            let mut step = String::new();
            while i < n && chars[i] != '.' && chars[i] != '[' {
                step.push(chars[i]);
                i += 1;
            }
            steps.push(step);
        }
        // a dot after a segment or bracket separates the next segment
        if i < n && chars[i] == '.' {
            i += 1;
            // trailing dot ends in an empty segment, same as "a..b"
            if i == n {
                steps.push(String::new());
            }
        }
    }

    steps
}

/// Resolve parsed steps against a row.
///
/// Objects are stepped by key; arrays by parsing the step as a `usize`
/// index. An empty step list resolves to absent — a field path always
/// names something inside the row, never the row itself.
///
/// # Example
///
/// ```
/// use sg_grid_field_path::get;
/// use serde_json::json;
///
/// let row = json!({"a": {"b": [1, 2, 3]}});
/// let steps = vec!["a".to_string(), "b".to_string(), "1".to_string()];
/// assert_eq!(get(&row, &steps), Some(&json!(2)));
/// assert_eq!(get(&row, &[]), None);
/// ```
pub fn get<'a>(row: &'a Value, steps: &[String]) -> Option<&'a Value> {
    if steps.is_empty() {
        return None;
    }
    let mut current = row;
    for step in steps {
        match current {
            Value::Object(map) => {
                current = map.get(step.as_str())?;
            }
            Value::Array(arr) => {
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Parse and resolve a field-path string in one call.
///
/// Returns `None` for an empty path or a `null` row.
pub fn resolve_field_path<'a>(row: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() || row.is_null() {
        return None;
    }
    get(row, &parse_field_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_dots() {
        assert_eq!(parse_field_path("a"), vec!["a"]);
        assert_eq!(parse_field_path("a.b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_numeric_brackets() {
        assert_eq!(parse_field_path("a[0]"), vec!["a", "0"]);
        assert_eq!(parse_field_path("a[0].b"), vec!["a", "0", "b"]);
        assert_eq!(parse_field_path("[0].a"), vec!["0", "a"]);
        assert_eq!(parse_field_path("a[12][3]"), vec!["a", "12", "3"]);
    }

    #[test]
    fn test_parse_quoted_brackets() {
        assert_eq!(parse_field_path("a['b']"), vec!["a", "b"]);
        assert_eq!(parse_field_path("a[\"b\"]"), vec!["a", "b"]);
        assert_eq!(parse_field_path("a['b.c'].d"), vec!["a", "b.c", "d"]);
        assert_eq!(parse_field_path("a['x[y]'].b"), vec!["a", "x[y]", "b"]);
    }

    #[test]
    fn test_parse_empty_segments() {
        assert_eq!(parse_field_path(""), Vec::<String>::new());
        assert_eq!(parse_field_path("a..b"), vec!["a", "", "b"]);
        assert_eq!(parse_field_path("a."), vec!["a", ""]);
        assert_eq!(parse_field_path("."), vec!["", ""]);
    }

    #[test]
    fn test_parse_malformed_never_panics() {
        // unterminated bracket
        assert_eq!(parse_field_path("a[0"), vec!["a", "0"]);
        // unterminated quote
        assert_eq!(parse_field_path("a['b"), vec!["a", "b"]);
        assert_eq!(parse_field_path("["), vec![""]);
    }

    #[test]
    fn test_get_object_and_array() {
        let row = json!({"a": {"b": [10, 20]}});
        assert_eq!(
            get(&row, &["a".into(), "b".into(), "0".into()]),
            Some(&json!(10))
        );
        assert_eq!(get(&row, &["a".into(), "missing".into()]), None);
        assert_eq!(get(&row, &["a".into(), "b".into(), "9".into()]), None);
        assert_eq!(get(&row, &["a".into(), "b".into(), "x".into()]), None);
    }

    #[test]
    fn test_get_scalar_in_the_middle() {
        let row = json!({"a": 5});
        assert_eq!(get(&row, &["a".into(), "b".into()]), None);
    }

    #[test]
    fn test_get_empty_steps_is_absent() {
        let row = json!({"a": 1});
        assert_eq!(get(&row, &[]), None);
    }
}

//! Integration tests for field-path resolution over realistic row shapes.

use serde_json::json;
use sg_grid_field_path::{parse_field_path, resolve_field_path};

#[test]
fn test_nested_array_and_object_path() {
    let row = json!({"address": [{"country": {"code": "US"}}]});
    assert_eq!(
        resolve_field_path(&row, "address[0].country.code"),
        Some(&json!("US"))
    );
}

#[test]
fn test_miss_on_empty_array_is_absent() {
    let row = json!({"address": []});
    assert_eq!(resolve_field_path(&row, "address[0].country.code"), None);
}

#[test]
fn test_quoted_bracket_key() {
    let row = json!({"address": {"home": {"street": "A Lane"}}});
    assert_eq!(
        resolve_field_path(&row, "address['home'].street"),
        Some(&json!("A Lane"))
    );
    assert_eq!(
        resolve_field_path(&row, "address[\"home\"].street"),
        Some(&json!("A Lane"))
    );
}

#[test]
fn test_quoted_key_containing_dot() {
    let row = json!({"a": {"b.c": 7}});
    assert_eq!(resolve_field_path(&row, "a['b.c']"), Some(&json!(7)));
    // the unquoted form names two plain segments instead
    assert_eq!(resolve_field_path(&row, "a.b.c"), None);
}

#[test]
fn test_numeric_bracket_on_object_key() {
    // numeric brackets address object keys too when the container is an object
    let row = json!({"phones": {"0": "555-0100"}});
    assert_eq!(resolve_field_path(&row, "phones[0]"), Some(&json!("555-0100")));
}

#[test]
fn test_empty_path_and_null_row() {
    let row = json!({"a": 1});
    assert_eq!(resolve_field_path(&row, ""), None);
    assert_eq!(resolve_field_path(&json!(null), "a"), None);
}

#[test]
fn test_explicit_null_resolves_to_null() {
    // an explicit null is found; classifying it as missing is the
    // caller's concern
    let row = json!({"a": {"b": null}});
    assert_eq!(resolve_field_path(&row, "a.b"), Some(&json!(null)));
}

#[test]
fn test_malformed_paths_resolve_to_absent() {
    let row = json!({"a": {"b": 1}});
    assert_eq!(resolve_field_path(&row, "a["), None);
    assert_eq!(resolve_field_path(&row, "a..b"), None);
}

#[test]
fn test_unterminated_quote_recovers_to_named_key() {
    // best-effort recovery closes the quote at end of input, so the
    // steps are ["a", "b"] and resolution proceeds normally
    let row = json!({"a": {"b": 1}});
    assert_eq!(resolve_field_path(&row, "a.['b"), Some(&json!(1)));
    // the recovered key still has to exist
    let row = json!({"a": {"c": 1}});
    assert_eq!(resolve_field_path(&row, "a.['b"), None);
}

#[test]
fn test_deep_mixed_path() {
    let row = json!({
        "orders": [
            {"lines": [{"sku": "X1"}, {"sku": "X2"}]},
            {"lines": [{"sku": "Y1"}]}
        ]
    });
    assert_eq!(
        resolve_field_path(&row, "orders[1].lines[0].sku"),
        Some(&json!("Y1"))
    );
    assert_eq!(resolve_field_path(&row, "orders[2].lines[0].sku"), None);
}

#[test]
fn test_parse_is_reused_across_rows() {
    let steps = parse_field_path("items[0].name");
    let a = json!({"items": [{"name": "hammer"}]});
    let b = json!({"items": [{"name": "wrench"}]});
    assert_eq!(sg_grid_field_path::get(&a, &steps), Some(&json!("hammer")));
    assert_eq!(sg_grid_field_path::get(&b, &steps), Some(&json!("wrench")));
}

//! Wire shapes: clause lists and the server-side page request round-trip
//! through the same JSON the grid UI emits.

use serde_json::json;
use sg_grid_query::{FilterClause, PageRequest, SortClause, SortDirection};

#[test]
fn test_filter_clause_round_trip() {
    let clause: FilterClause =
        serde_json::from_value(json!({"column": "age", "operator": "between", "value": [18, 65]}))
            .unwrap();
    assert_eq!(clause, FilterClause::new("age", "between", json!([18, 65])));
    assert_eq!(
        serde_json::to_value(&clause).unwrap(),
        json!({"column": "age", "operator": "between", "value": [18, 65]})
    );
}

#[test]
fn test_filter_clause_value_defaults_to_null() {
    let clause: FilterClause =
        serde_json::from_value(json!({"column": "age", "operator": "ne"})).unwrap();
    assert_eq!(clause.value, json!(null));
}

#[test]
fn test_sort_clause_direction_strings() {
    let clause: SortClause =
        serde_json::from_value(json!({"column": "name", "direction": "asc"})).unwrap();
    assert_eq!(clause.direction, SortDirection::Asc);
    let clause: SortClause =
        serde_json::from_value(json!({"column": "name", "direction": "desc"})).unwrap();
    assert_eq!(clause.direction, SortDirection::Desc);
    assert_eq!(
        serde_json::to_value(&clause).unwrap(),
        json!({"column": "name", "direction": "desc"})
    );
}

#[test]
fn test_page_request_shape() {
    let req = PageRequest {
        page: 2,
        page_size: 50,
        sort: vec![SortClause::asc("name")],
        filter: vec![FilterClause::new("age", "gte", json!(18))],
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        json!({
            "page": 2,
            "pageSize": 50,
            "sort": [{"column": "name", "direction": "asc"}],
            "filter": [{"column": "age", "operator": "gte", "value": 18}],
        })
    );
}

#[test]
fn test_page_request_clause_lists_default_empty() {
    let req: PageRequest = serde_json::from_value(json!({"page": 0, "pageSize": 25})).unwrap();
    assert!(req.sort.is_empty());
    assert!(req.filter.is_empty());
}

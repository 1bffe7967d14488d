//! Identity-based deduplication, first-occurrence ordering,
//! first-write-wins, determinism.

use tests::*;

use pretty_assertions::assert_eq;
use serde_json::json;
use unjoin::schema::{EntityMap, Schema};
use unjoin::{map, map_one, Value};

#[test]
fn equal_identities_merge_into_one_entity() {
    let schema = Schema::new([EntityMap::new("userMap").field("name")]);
    let result_set = rows(json!([
        {"id": 1, "name": "Elvis"},
        {"id": 1, "name": "Elvis"},
        {"id": 1, "name": "Elvis"},
    ]));

    let mapped = map(&result_set, &schema, "userMap", None).unwrap();

    assert_eq!(to_json(&mapped), json!([{"id": 1, "name": "Elvis"}]));
}

#[test]
fn first_occurrence_order_is_preserved() {
    let schema = Schema::new([EntityMap::new("userMap").field("name")]);
    let result_set = rows(json!([
        {"id": 3, "name": "c"},
        {"id": 1, "name": "a"},
        {"id": 3, "name": "c"},
        {"id": 2, "name": "b"},
        {"id": 1, "name": "a"},
    ]));

    let mapped = map(&result_set, &schema, "userMap", None).unwrap();

    let ids: Vec<i64> = mapped
        .iter()
        .map(|entity| entity.value("id").unwrap().as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn interleaved_rows_still_deduplicate_children() {
    let schema = maps::customer_orders();
    let result_set = rows(json!([
        {"customer_id": 1, "customer_name": "Elvis", "order_id": 10, "order_total": 100},
        {"customer_id": 2, "customer_name": "John", "order_id": 20, "order_total": 200},
        {"customer_id": 1, "customer_name": "Elvis", "order_id": 11, "order_total": 110},
        {"customer_id": 2, "customer_name": "John", "order_id": 20, "order_total": 200},
    ]));

    let mapped = map(&result_set, &schema, "customerMap", Some("customer_")).unwrap();

    assert_eq!(
        to_json(&mapped),
        json!([
            {"id": 1, "name": "Elvis", "orders": [
                {"id": 10, "total": 100},
                {"id": 11, "total": 110},
            ]},
            {"id": 2, "name": "John", "orders": [
                {"id": 20, "total": 200},
            ]},
        ])
    );
}

#[test]
fn composite_identity_distinguishes_entities() {
    let schema = Schema::new([EntityMap::new("lineItemMap")
        .identity_composite(["orderId", "lineNo"])
        .field("sku")]);
    let result_set = rows(json!([
        {"orderId": 1, "lineNo": 1, "sku": "A"},
        {"orderId": 1, "lineNo": 2, "sku": "B"},
        {"orderId": 2, "lineNo": 1, "sku": "C"},
        {"orderId": 1, "lineNo": 1, "sku": "A"},
    ]));

    let mapped = map(&result_set, &schema, "lineItemMap", None).unwrap();

    assert_eq!(
        to_json(&mapped),
        json!([
            {"orderId": 1, "lineNo": 1, "sku": "A"},
            {"orderId": 1, "lineNo": 2, "sku": "B"},
            {"orderId": 2, "lineNo": 1, "sku": "C"},
        ])
    );
}

#[test]
fn identity_values_compare_by_type() {
    // 1 and "1" are different identities
    let schema = Schema::new([EntityMap::new("userMap")]);
    let result_set = rows(json!([
        {"id": 1},
        {"id": "1"},
    ]));

    let mapped = map(&result_set, &schema, "userMap", None).unwrap();

    assert_eq!(to_json(&mapped), json!([{"id": 1}, {"id": "1"}]));
}

#[test]
fn contradictory_later_rows_do_not_overwrite() {
    let schema = Schema::new([EntityMap::new("userMap").field("name")]);
    let result_set = rows(json!([
        {"id": 1, "name": "Elvis"},
        {"id": 1, "name": "Aron"},
    ]));

    let mapped = map_one(&result_set, &schema, "userMap", None).unwrap();

    assert_eq!(mapped.value("name"), Some(&Value::from("Elvis")));
}

#[test]
fn zero_and_empty_string_count_as_written() {
    // Falsy-but-defined first values survive later rows.
    let schema = Schema::new([EntityMap::new("accountMap").field("balance").field("note")]);
    let result_set = rows(json!([
        {"id": 1, "balance": 0, "note": ""},
        {"id": 1, "balance": 500, "note": "funded"},
    ]));

    let mapped = map_one(&result_set, &schema, "accountMap", None).unwrap();

    assert_eq!(to_json(&mapped), json!({"id": 1, "balance": 0, "note": ""}));
}

#[test]
fn null_field_is_set_and_stays_null() {
    let schema = Schema::new([EntityMap::new("userMap").field("email")]);
    let result_set = rows(json!([
        {"id": 1, "email": null},
        {"id": 1, "email": "late@example.com"},
    ]));

    let mapped = map_one(&result_set, &schema, "userMap", None).unwrap();

    assert_eq!(to_json(&mapped), json!({"id": 1, "email": null}));
}

#[test]
fn unset_field_accepts_a_later_value() {
    // The first row does not carry the column at all, so the second row's
    // value is the first write.
    let schema = Schema::new([EntityMap::new("userMap").field("email")]);
    let result_set = rows(json!([
        {"id": 1},
        {"id": 1, "email": "late@example.com"},
    ]));

    let mapped = map_one(&result_set, &schema, "userMap", None).unwrap();

    assert_eq!(
        to_json(&mapped),
        json!({"id": 1, "email": "late@example.com"})
    );
}

#[test]
fn mapping_is_deterministic() {
    let schema = maps::team_projects_tasks();
    let result_set = rows(json!([
        {"team_id": 1, "team_name": "Core", "project_id": 11, "project_name": "Engine",
         "task_id": 111, "task_title": "Parse"},
        {"team_id": 2, "team_name": "Tools", "project_id": 21, "project_name": "CLI",
         "task_id": 211, "task_title": "Flags"},
        {"team_id": 1, "team_name": "Core", "project_id": 11, "project_name": "Engine",
         "task_id": 112, "task_title": "Plan"},
    ]));

    let first = map(&result_set, &schema, "teamMap", Some("team_")).unwrap();
    let second = map(&result_set, &schema, "teamMap", Some("team_")).unwrap();

    assert_eq!(first, second);
    assert_eq!(to_json(&first), to_json(&second));
}

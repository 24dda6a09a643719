use super::*;

fn visit(fqn: &str, timestamp: i64) -> VisitedEntityRecord {
    VisitedEntityRecord {
        entity_type: "table".to_owned(),
        fqn: fqn.to_owned(),
        id: fqn.to_owned(),
        timestamp,
        ..VisitedEntityRecord::default()
    }
}

fn fqns(records: &[VisitedEntityRecord]) -> Vec<&str> {
    records.iter().map(|r| r.fqn.as_str()).collect()
}

// =============================================================
// push_visit
// =============================================================

#[test]
fn push_visit_puts_newest_first() {
    let mut history = vec![visit("a", 1)];
    push_visit(&mut history, visit("b", 2), 8);
    assert_eq!(fqns(&history), vec!["b", "a"]);
}

#[test]
fn push_visit_dedupes_by_fqn() {
    let mut history = vec![visit("b", 2), visit("a", 1)];
    push_visit(&mut history, visit("a", 3), 8);
    assert_eq!(fqns(&history), vec!["a", "b"]);
    assert_eq!(history[0].timestamp, 3);
}

#[test]
fn push_visit_caps_at_capacity() {
    let mut history = Vec::new();
    for i in 0..10 {
        push_visit(&mut history, visit(&format!("t{i}"), i), 3);
    }
    assert_eq!(fqns(&history), vec!["t9", "t8", "t7"]);
}

#[test]
fn push_visit_reorders_existing_by_timestamp() {
    let mut history = vec![visit("old", 1), visit("new", 5)];
    push_visit(&mut history, visit("x", 9), 8);
    assert_eq!(fqns(&history), vec!["x", "new", "old"]);
}

// =============================================================
// Envelope codec
// =============================================================

#[test]
fn decode_history_reads_camel_case_envelope() {
    let raw = r#"{"data":[{"entityType":"table","fqn":"db.schema.orders","displayName":"Orders","serviceType":"Mysql","id":"1","timestamp":42}]}"#;
    let records = decode_history(raw).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].entity_type, "table");
    assert_eq!(records[0].display_name.as_deref(), Some("Orders"));
    assert_eq!(records[0].service_type.as_deref(), Some("Mysql"));
    assert_eq!(records[0].timestamp, 42);
}

#[test]
fn decode_history_defaults_missing_fields() {
    let records = decode_history(r#"{"data":[{"fqn":"x.y"}]}"#).unwrap();
    assert_eq!(records[0].entity_type, "");
    assert_eq!(records[0].display_name, None);
    assert_eq!(records[0].timestamp, 0);
}

#[test]
fn decode_history_rejects_garbage() {
    assert!(matches!(decode_history("not json"), Err(StoreError::Decode(_))));
}

#[test]
fn encode_history_wraps_in_data_envelope() {
    let raw = encode_history(&[visit("a", 1)]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["data"][0]["entityType"], "table");
    assert_eq!(value["data"][0]["fqn"], "a");
}

// =============================================================
// Stores
// =============================================================

#[test]
fn memory_store_records_visits_with_policy() {
    let store = MemoryStore::new(2);
    store.record_visit(visit("a", 1));
    store.record_visit(visit("b", 2));
    store.record_visit(visit("a", 3));
    store.record_visit(visit("c", 4));
    assert_eq!(fqns(&store.read()), vec!["c", "a"]);
}

#[test]
fn memory_store_with_records_keeps_given_order() {
    let store = MemoryStore::with_records(vec![visit("z", 1), visit("y", 9)]);
    assert_eq!(fqns(&store.read()), vec!["z", "y"]);
}

#[test]
fn local_storage_store_is_empty_outside_browser() {
    let store = LocalStorageStore::default();
    store.record_visit(visit("a", 1));
    assert!(store.read().is_empty());
}

#[test]
fn store_handle_shares_one_store() {
    let handle = StoreHandle::new(MemoryStore::default());
    let clone = handle.clone();
    handle.0.record_visit(visit("a", 1));
    assert_eq!(fqns(&clone.0.read()), vec!["a"]);
}

//! Tests for Record
//!
//! These tests verify:
//! - Id access and stamping
//! - Type-sensitive field matching
//! - Transparent JSON form

use serde_json::{json, Value};
use tabula::Record;

// =============================================================================
// Helper Functions
// =============================================================================

fn record_from(value: Value) -> Record {
    serde_json::from_value(value).unwrap()
}

// =============================================================================
// Id Tests
// =============================================================================

#[test]
fn test_new_record_is_empty() {
    let record = Record::new();
    assert!(record.is_empty());
    assert_eq!(record.len(), 0);
    assert_eq!(record.id(), None);
}

#[test]
fn test_id_reads_integer_field() {
    let record = record_from(json!({"id": 7, "name": "x"}));
    assert_eq!(record.id(), Some(7));
}

#[test]
fn test_id_ignores_non_integer_field() {
    let record = record_from(json!({"id": "7"}));
    assert_eq!(record.id(), None);
}

#[test]
fn test_with_id_puts_id_first() {
    let record = record_from(json!({"name": "a", "num": 1})).with_id(3);

    let keys: Vec<&String> = record.fields().map(|(k, _)| k).collect();
    assert_eq!(keys, ["id", "name", "num"]);
    assert_eq!(record.id(), Some(3));
}

#[test]
fn test_with_id_replaces_existing_id() {
    let record = record_from(json!({"name": "a", "id": 1})).with_id(9);

    assert_eq!(record.len(), 2);
    assert_eq!(record.id(), Some(9));
}

#[test]
fn test_set_id_and_insert() {
    let mut record = Record::new();
    record.insert("name", "b");
    record.set_id(4);

    assert_eq!(record.get("name"), Some(&json!("b")));
    assert_eq!(record.id(), Some(4));
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test]
fn test_matches_is_type_sensitive() {
    let record = record_from(json!({"id": 1, "code": "1"}));

    assert!(record.matches("id", &json!(1)));
    assert!(!record.matches("id", &json!("1")));
    assert!(record.matches("code", &json!("1")));
    assert!(!record.matches("code", &json!(1)));
}

#[test]
fn test_matches_missing_field() {
    let record = record_from(json!({"id": 1}));
    assert!(!record.matches("name", &json!(null)));
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_serializes_as_plain_object() {
    let record = record_from(json!({"id": 1, "name": "a"}));
    let text = serde_json::to_string(&record).unwrap();
    assert_eq!(text, r#"{"id":1,"name":"a"}"#);
}

#[test]
fn test_rejects_non_object() {
    let result: Result<Record, _> = serde_json::from_str("[1, 2]");
    assert!(result.is_err());
}

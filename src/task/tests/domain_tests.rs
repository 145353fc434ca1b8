//! Domain-focused tests for task identity and payload behaviour.

use crate::task::domain::{Task, TaskDomainError, TaskId, TaskPayload, UserId};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
fn task_id_accepts_and_trims_caller_supplied_values() {
    let id = TaskId::new("  t1  ").expect("valid task id");
    assert_eq!(id.as_str(), "t1");
}

#[rstest]
#[case("")]
#[case("   ")]
fn task_id_rejects_blank_values(#[case] raw: &str) {
    let result = TaskId::new(raw);
    assert_eq!(result, Err(TaskDomainError::EmptyTaskId));
}

#[rstest]
fn task_id_generate_yields_distinct_non_empty_ids() {
    let first = TaskId::generate();
    let second = TaskId::generate();

    assert!(!first.as_str().is_empty());
    assert_ne!(first, second);
}

#[rstest]
#[case("")]
#[case("   ")]
fn user_id_rejects_blank_values(#[case] raw: &str) {
    let result = UserId::new(raw);
    assert_eq!(result, Err(TaskDomainError::EmptyUserId));
}

#[rstest]
#[case("id")]
#[case("userId")]
fn with_field_rejects_reserved_names(#[case] reserved: &str) {
    let task = Task::new(
        TaskId::new("t1").expect("valid id"),
        UserId::new("alice").expect("valid owner"),
    );

    let result = task.with_field(reserved, json!("shadowed"));
    assert_eq!(
        result,
        Err(TaskDomainError::ReservedPayloadField(reserved.to_owned()))
    );
}

#[rstest]
fn with_payload_rejects_reserved_keys() {
    let mut payload = TaskPayload::new();
    payload.insert("title".to_owned(), json!("a"));
    payload.insert("userId".to_owned(), json!("mallory"));

    let task = Task::new(
        TaskId::new("t1").expect("valid id"),
        UserId::new("alice").expect("valid owner"),
    );

    let result = task.with_payload(payload);
    assert_eq!(
        result,
        Err(TaskDomainError::ReservedPayloadField("userId".to_owned()))
    );
}

#[rstest]
fn task_serializes_as_flat_document() {
    let task = Task::new(
        TaskId::new("t1").expect("valid id"),
        UserId::new("alice").expect("valid owner"),
    )
    .with_field("title", json!("write the report"))
    .expect("payload field")
    .with_field("status", json!("open"))
    .expect("payload field");

    let document = serde_json::to_value(&task).expect("serializable task");
    assert_eq!(
        document,
        json!({
            "id": "t1",
            "userId": "alice",
            "title": "write the report",
            "status": "open",
        })
    );
}

#[rstest]
fn task_deserializes_from_flat_document() {
    let document = json!({
        "id": "t1",
        "userId": "alice",
        "title": "write the report",
        "tags": ["work", "urgent"],
    });

    let task: Task = serde_json::from_value(document).expect("valid document");

    assert_eq!(task.id().as_str(), "t1");
    assert_eq!(task.owner().as_str(), "alice");
    assert_eq!(task.field("title"), Some(&Value::from("write the report")));
    assert_eq!(task.field("tags"), Some(&json!(["work", "urgent"])));
    assert_eq!(task.field("missing"), None);
}

#[rstest]
fn task_deserialization_enforces_identity_invariants() {
    let document = json!({
        "id": "",
        "userId": "alice",
        "title": "orphaned",
    });

    let result = serde_json::from_value::<Task>(document);
    assert!(result.is_err(), "blank id must not deserialize");
}

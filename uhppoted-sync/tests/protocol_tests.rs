use pretty_assertions::assert_eq;
use uhppoted_sync::{
    CommitBatch, FetchRange, FetchRequest, NEW_SENTINEL, Response, Update, collection_path,
};
use uhppoted_types::EntityKind;

// ── Inbound ──────────────────────────────────────────────────────

#[test]
fn response_decodes_system_objects() {
    let json = r#"{"system":{"objects":[{"OID":"0.3.1","value":"new"},{"OID":"0.3.1.1","value":"Alice"}]}}"#;
    let updates = Response::from_json(json).unwrap().into_updates();

    assert_eq!(
        updates,
        vec![Update::new("0.3.1", "new"), Update::new("0.3.1.1", "Alice")]
    );
}

#[test]
fn lowercase_oid_key_is_accepted() {
    let json = r#"{"system":{"objects":[{"oid":"0.4.1","value":"ok"}]}}"#;
    let updates = Response::from_json(json).unwrap().into_updates();
    assert_eq!(updates, vec![Update::new("0.4.1", "ok")]);
}

#[test]
fn response_without_objects_is_empty() {
    assert!(Response::from_json("{}").unwrap().into_updates().is_empty());
    assert!(
        Response::from_json(r#"{"system":{}}"#)
            .unwrap()
            .into_updates()
            .is_empty()
    );
}

#[test]
fn malformed_response_is_an_error() {
    assert!(Response::from_json("not json").is_err());
}

// ── Outbound ─────────────────────────────────────────────────────

#[test]
fn commit_batch_uses_lowercase_oid() {
    let batch = CommitBatch::new(&[Update::new("0.3.1.1", "Bob")]);
    assert_eq!(
        batch.to_json().unwrap(),
        r#"{"objects":[{"oid":"0.3.1.1","value":"Bob"}]}"#
    );
    assert!(!batch.is_create());
}

#[test]
fn create_batch_is_the_sentinel_pair() {
    let batch = CommitBatch::create();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.objects[0].oid, NEW_SENTINEL);
    assert_eq!(batch.objects[0].value, "");
    assert!(batch.is_create());
}

// ── Fetch requests ───────────────────────────────────────────────

#[test]
fn paginated_initial_fetch_requests_a_page() {
    let request = FetchRequest::initial(EntityKind::Event, 15);
    assert_eq!(request.range, FetchRange::Initial { count: 15 });
    assert_eq!(request.range_param().as_deref(), Some("0,15"));
    assert_eq!(request.path(), "/events?range=0%2C15");
}

#[test]
fn more_requests_relative_range() {
    let request = FetchRequest::more(EntityKind::LogEntry, 30, 15);
    assert_eq!(request.range_param().as_deref(), Some("30,+15"));
    assert_eq!(request.to_string(), "/logs?range=30%2C%2B15");
}

#[test]
fn non_paginated_fetch_has_no_range() {
    let request = FetchRequest::initial(EntityKind::Card, 15);
    assert_eq!(request.range, FetchRange::All);
    assert_eq!(request.path(), "/cards");
}

#[test]
fn interfaces_and_controllers_share_system_page() {
    assert_eq!(collection_path(EntityKind::Interface), "/system");
    assert_eq!(collection_path(EntityKind::Controller), "/system");
    assert_eq!(collection_path(EntityKind::Door), "/doors");
    assert_eq!(collection_path(EntityKind::Group), "/groups");
}

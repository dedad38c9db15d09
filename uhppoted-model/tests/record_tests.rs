use pretty_assertions::assert_eq;
use uhppoted_model::{Card, Controller, Door, Event, Group, Interface, LogEntry, Record};
use uhppoted_types::{EntityKind, Oid, Status};

fn oid(s: &str) -> Oid {
    Oid::parse(s).unwrap()
}

fn make_card(status: &str) -> Card {
    Card::new(oid("0.3.1"), Status::from(status))
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_record_defaults_every_field() {
    let c = make_card("new");
    assert_eq!(c.oid(), &oid("0.3.1"));
    assert_eq!(c.status(), &Status::New);
    assert_eq!(c.mark(), 0);
    assert_eq!(c.name, "");
    assert_eq!(c.number, "");
    assert!(c.groups.is_empty());
}

#[test]
fn controller_composite_statuses_default_to_unknown() {
    let c = Controller::new(oid("0.1.1.2.1"), Status::from("ok"));
    assert_eq!(c.address.status, Status::Unknown);
    assert_eq!(c.datetime.status, Status::Unknown);
    assert_eq!(c.cards.status, Status::Unknown);
    assert_eq!(c.events.status, Status::Unknown);
    assert_eq!(c.doors, [String::new(), String::new(), String::new(), String::new()]);
}

#[test]
fn kinds_match_their_records() {
    assert_eq!(Interface::KIND, EntityKind::Interface);
    assert_eq!(Controller::KIND, EntityKind::Controller);
    assert_eq!(Door::KIND, EntityKind::Door);
    assert_eq!(Card::KIND, EntityKind::Card);
    assert_eq!(Group::KIND, EntityKind::Group);
    assert_eq!(Event::KIND, EntityKind::Event);
    assert_eq!(LogEntry::KIND, EntityKind::LogEntry);
}

// ── Field writes ─────────────────────────────────────────────────

#[test]
fn card_field_table() {
    let mut c = make_card("ok");
    assert!(c.write_field(&[0, 1], "2023-01-01 12:00:00"));
    assert!(c.write_field(&[1], "Alice"));
    assert!(c.write_field(&[2], "10058400"));
    assert!(c.write_field(&[3], "2023-01-01"));
    assert!(c.write_field(&[4], "2023-12-31"));

    assert_eq!(c.created, "2023-01-01 12:00:00");
    assert_eq!(c.name, "Alice");
    assert_eq!(c.number, "10058400");
    assert_eq!(c.from, "2023-01-01");
    assert_eq!(c.to, "2023-12-31");
}

#[test]
fn controller_composite_fields() {
    let mut c = Controller::new(oid("0.1.1.2.3"), Status::from("ok"));
    assert!(c.write_field(&[3], "192.168.1.100"));
    assert!(c.write_field(&[3, 1], "192.168.1.101"));
    assert!(c.write_field(&[3, 2], "uncertain"));
    assert!(c.write_field(&[4, 1], "2023-06-01 10:00:00"));
    assert!(c.write_field(&[5, 1], "ok"));
    assert!(c.write_field(&[10], "0.2.4"));

    assert_eq!(c.address.value, "192.168.1.100");
    assert_eq!(c.address.configured, "192.168.1.101");
    assert_eq!(c.address.status, Status::Other("uncertain".into()));
    assert_eq!(c.datetime.configured, "2023-06-01 10:00:00");
    assert_eq!(c.cards.status, Status::Other("ok".into()));
    assert_eq!(c.doors[3], "0.2.4");
}

#[test]
fn door_nested_controller_fields() {
    let mut d = Door::new(oid("0.2.7"), Status::from("ok"));
    assert!(d.write_field(&[0, 2, 2], "Alpha"));
    assert!(d.write_field(&[0, 2, 3], "405419896"));
    assert!(d.write_field(&[0, 2, 4], "3"));
    assert!(d.write_field(&[2], "5"));
    assert!(d.write_field(&[2, 2], "7"));
    assert!(d.write_field(&[3, 3], "mode mismatch"));
    assert!(d.write_field(&[4], "12"));

    assert_eq!(d.controller, "Alpha");
    assert_eq!(d.device_id, "405419896");
    assert_eq!(d.door, "3");
    assert_eq!(d.delay.value, "5");
    assert_eq!(d.delay.configured, "7");
    assert_eq!(d.mode.error, "mode mismatch");
    assert_eq!(d.index, 12);
}

#[test]
fn log_entry_details_field() {
    let mut l = LogEntry::new(oid("0.6.3"), Status::from("ok"));
    assert!(l.write_field(&[3], "card"));
    assert!(l.write_field(&[7], "updated name"));
    assert_eq!(l.module.module_type, "card");
    assert_eq!(l.details, "updated name");
}

#[test]
fn event_access_flag() {
    let mut e = Event::new(oid("0.5.9"), Status::from("ok"));
    assert_eq!(e.access(), None);
    assert!(e.write_field(&[8], "true"));
    assert_eq!(e.access(), Some(true));
    assert!(e.write_field(&[8], "false"));
    assert_eq!(e.access(), Some(false));
}

#[test]
fn unrecognised_suffix_is_ignored() {
    let mut c = make_card("ok");
    c.header.mark = 4;
    let before = c.clone();

    assert!(!c.write_field(&[99], "x"));
    assert!(!c.write_field(&[1, 7], "x"));
    assert!(!c.write_field(&[], "x"));
    assert_eq!(c, before);
}

#[test]
fn unrecognised_suffix_still_ends_new_status() {
    let mut c = make_card("new");
    c.header.mark = 4;

    assert!(!c.write_field(&[99], "x"));
    assert_eq!(c.status(), &Status::Unknown);
    assert_eq!(c.mark(), 4);
    assert_eq!(c.name, "");
}

#[test]
fn landed_write_resets_mark() {
    let mut c = make_card("ok");
    c.header.mark = 12;
    assert!(c.write_field(&[1], "Bob"));
    assert_eq!(c.mark(), 0);
}

#[test]
fn landed_write_moves_new_to_unknown() {
    let mut c = make_card("new");
    assert!(c.write_field(&[1], "Alice"));
    assert_eq!(c.status(), &Status::Unknown);
    assert_eq!(c.name, "Alice");
}

#[test]
fn landed_write_keeps_server_status() {
    let mut c = make_card("ok");
    assert!(c.write_field(&[1], "Alice"));
    assert_eq!(c.status(), &Status::Other("ok".into()));
}

#[test]
fn write_status_replaces_status_and_resets_mark() {
    let mut c = make_card("ok");
    c.header.mark = 3;
    c.write_status(Status::Deleted);
    assert_eq!(c.status(), &Status::Deleted);
    assert_eq!(c.mark(), 0);
}

#[test]
fn malformed_index_leaves_value_unchanged() {
    let mut g = Group::new(oid("0.4.1"), Status::from("ok"));
    assert!(g.write_field(&[3], "7"));
    assert!(g.write_field(&[3], "seven"));
    assert_eq!(g.index, 7);
}

#[test]
fn repeated_write_is_idempotent() {
    let mut once = make_card("new");
    once.write_field(&[2], "123");

    let mut twice = make_card("new");
    twice.write_field(&[2], "123");
    twice.write_field(&[2], "123");

    assert_eq!(once, twice);
}

// ── Projections ──────────────────────────────────────────────────

#[test]
fn card_field_values_include_group_flags() {
    let mut c = make_card("ok");
    c.write_field(&[1], "Alice");
    c.write_field(&[5, 2], "true");
    c.write_field(&[5, 3, 1], "G3");

    let fields: Vec<(String, String)> = c
        .field_values()
        .into_iter()
        .map(|f| (f.oid.to_string(), f.value))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("0.3.1.1".to_string(), "Alice".to_string()),
            ("0.3.1.2".to_string(), String::new()),
            ("0.3.1.3".to_string(), String::new()),
            ("0.3.1.4".to_string(), String::new()),
            ("0.3.1.5.2".to_string(), "true".to_string()),
            ("0.3.1.5.3".to_string(), "false".to_string()),
        ]
    );
}

#[test]
fn controller_field_values_cover_door_slots() {
    let c = Controller::new(oid("0.1.1.2.1"), Status::Unknown);
    let oids: Vec<String> = c.field_values().iter().map(|f| f.oid.to_string()).collect();
    assert_eq!(oids.len(), 10);
    assert_eq!(oids[6], "0.1.1.2.1.7");
    assert_eq!(oids[9], "0.1.1.2.1.10");
}

#[test]
fn events_and_logs_are_read_only() {
    assert!(Event::new(oid("0.5.1"), Status::Unknown).field_values().is_empty());
    assert!(LogEntry::new(oid("0.6.1"), Status::Unknown).field_values().is_empty());
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn cards_order_by_created() {
    let mut a = Card::new(oid("0.3.9"), Status::Unknown);
    let mut b = Card::new(oid("0.3.2"), Status::Unknown);
    a.created = "2023-01-01".into();
    b.created = "2023-02-01".into();
    assert_eq!(a.display_order(&b), std::cmp::Ordering::Less);
}

#[test]
fn groups_order_by_index() {
    let mut a = Group::new(oid("0.4.1"), Status::Unknown);
    let mut b = Group::new(oid("0.4.2"), Status::Unknown);
    a.index = 5;
    b.index = 2;
    assert_eq!(a.display_order(&b), std::cmp::Ordering::Greater);
}

#[test]
fn events_order_newest_first() {
    let mut a = Event::new(oid("0.5.1"), Status::Unknown);
    let mut b = Event::new(oid("0.5.2"), Status::Unknown);
    a.timestamp = "2023-01-01 10:00:00".into();
    b.timestamp = "2023-01-01 11:00:00".into();
    assert_eq!(a.display_order(&b), std::cmp::Ordering::Greater);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn record_serializes_with_flattened_header() {
    let mut c = make_card("ok");
    c.write_field(&[5, 2], "true");
    let json = serde_json::to_value(&c).unwrap();
    assert_eq!(json["OID"], "0.3.1");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["mark"], 0);
    assert_eq!(json["groups"]["0.3.1.5.2"]["member"], true);
}

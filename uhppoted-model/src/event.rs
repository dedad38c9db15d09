use crate::record::{FieldSpec, Record, RecordHeader, parse_index};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// A controller event (`0.5.N`). Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub timestamp: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub index: u32,
    pub event_type: String,
    pub door: String,
    pub direction: String,
    pub card: String,
    pub granted: String,
    pub reason: String,
    pub device_name: String,
    pub door_name: String,
    pub card_name: String,
}

static FIELDS: &[FieldSpec<Event>] = &[
    FieldSpec { suffix: &[1], write: |r, v| r.timestamp = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.device_id = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| parse_index(&mut r.index, v) },
    FieldSpec { suffix: &[4], write: |r, v| r.event_type = v.to_string() },
    FieldSpec { suffix: &[5], write: |r, v| r.door = v.to_string() },
    FieldSpec { suffix: &[6], write: |r, v| r.direction = v.to_string() },
    FieldSpec { suffix: &[7], write: |r, v| r.card = v.to_string() },
    FieldSpec { suffix: &[8], write: |r, v| r.granted = v.to_string() },
    FieldSpec { suffix: &[9], write: |r, v| r.reason = v.to_string() },
    FieldSpec { suffix: &[10], write: |r, v| r.device_name = v.to_string() },
    FieldSpec { suffix: &[11], write: |r, v| r.door_name = v.to_string() },
    FieldSpec { suffix: &[12], write: |r, v| r.card_name = v.to_string() },
];

impl Event {
    /// `Some(true)` for granted, `Some(false)` for denied.
    pub fn access(&self) -> Option<bool> {
        match self.granted.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl Record for Event {
    const KIND: EntityKind = EntityKind::Event;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            timestamp: String::new(),
            device_id: String::new(),
            index: 0,
            event_type: String::new(),
            door: String::new(),
            direction: String::new(),
            card: String::new(),
            granted: String::new(),
            reason: String::new(),
            device_name: String::new(),
            door_name: String::new(),
            card_name: String::new(),
        }
    }

    fn header(&self) -> &RecordHeader {
        &self.header
    }

    fn header_mut(&mut self) -> &mut RecordHeader {
        &mut self.header
    }

    fn fields() -> &'static [FieldSpec<Self>] {
        FIELDS
    }

    /// Newest first.
    fn display_order(&self, other: &Self) -> Ordering {
        other
            .timestamp
            .cmp(&self.timestamp)
            .then_with(|| self.header.oid.cmp(&other.header.oid))
    }
}

use crate::record::{FieldSpec, FieldValue, Record, RecordHeader, parse_index};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// A configurable door setting (delay, control mode).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoorSetting {
    pub value: String,
    pub configured: String,
    pub status: Status,
    #[serde(rename = "err")]
    pub error: String,
}

/// A door (`0.2.N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub created: String,
    pub controller: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub door: String,
    pub name: String,
    pub delay: DoorSetting,
    pub mode: DoorSetting,
    pub index: u32,
}

static FIELDS: &[FieldSpec<Door>] = &[
    FieldSpec { suffix: &[0, 1], write: |r, v| r.created = v.to_string() },
    FieldSpec { suffix: &[0, 2, 2], write: |r, v| r.controller = v.to_string() },
    FieldSpec { suffix: &[0, 2, 3], write: |r, v| r.device_id = v.to_string() },
    FieldSpec { suffix: &[0, 2, 4], write: |r, v| r.door = v.to_string() },
    FieldSpec { suffix: &[1], write: |r, v| r.name = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.delay.value = v.to_string() },
    FieldSpec { suffix: &[2, 1], write: |r, v| r.delay.status = Status::from(v) },
    FieldSpec { suffix: &[2, 2], write: |r, v| r.delay.configured = v.to_string() },
    FieldSpec { suffix: &[2, 3], write: |r, v| r.delay.error = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| r.mode.value = v.to_string() },
    FieldSpec { suffix: &[3, 1], write: |r, v| r.mode.status = Status::from(v) },
    FieldSpec { suffix: &[3, 2], write: |r, v| r.mode.configured = v.to_string() },
    FieldSpec { suffix: &[3, 3], write: |r, v| r.mode.error = v.to_string() },
    FieldSpec { suffix: &[4], write: |r, v| parse_index(&mut r.index, v) },
];

impl Record for Door {
    const KIND: EntityKind = EntityKind::Door;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            created: String::new(),
            controller: String::new(),
            device_id: String::new(),
            door: String::new(),
            name: String::new(),
            delay: DoorSetting::default(),
            mode: DoorSetting::default(),
            index: 0,
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

    fn field_values(&self) -> Vec<FieldValue> {
        let oid = &self.header.oid;
        vec![
            FieldValue::new(oid.child(1), &self.name),
            FieldValue::new(oid.join(&[0, 2, 2]), &self.controller),
            FieldValue::new(oid.join(&[0, 2, 3]), &self.device_id),
            FieldValue::new(oid.join(&[0, 2, 4]), &self.door),
            FieldValue::new(oid.child(2), &self.delay.value),
            FieldValue::new(oid.child(3), &self.mode.value),
        ]
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.created
            .cmp(&other.created)
            .then_with(|| self.header.oid.cmp(&other.header.oid))
    }
}

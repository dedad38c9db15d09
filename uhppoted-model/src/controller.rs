use crate::record::{FieldSpec, FieldValue, Record, RecordHeader};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// A device-reported value alongside the value last configured for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reconciled {
    pub value: String,
    pub configured: String,
    pub status: Status,
}

/// A device-reported value with its own reconciliation status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracked {
    pub value: String,
    pub status: Status,
}

/// An access controller (`0.1.1.2.N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controller {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub created: String,
    pub name: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub address: Reconciled,
    pub datetime: Reconciled,
    pub cards: Tracked,
    pub events: Tracked,
    /// Door OIDs assigned to the controller's four door slots.
    pub doors: [String; 4],
}

static FIELDS: &[FieldSpec<Controller>] = &[
    FieldSpec { suffix: &[0, 1], write: |r, v| r.created = v.to_string() },
    FieldSpec { suffix: &[1], write: |r, v| r.name = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.device_id = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| r.address.value = v.to_string() },
    FieldSpec { suffix: &[3, 1], write: |r, v| r.address.configured = v.to_string() },
    FieldSpec { suffix: &[3, 2], write: |r, v| r.address.status = Status::from(v) },
    FieldSpec { suffix: &[4], write: |r, v| r.datetime.value = v.to_string() },
    FieldSpec { suffix: &[4, 1], write: |r, v| r.datetime.configured = v.to_string() },
    FieldSpec { suffix: &[4, 2], write: |r, v| r.datetime.status = Status::from(v) },
    FieldSpec { suffix: &[5], write: |r, v| r.cards.value = v.to_string() },
    FieldSpec { suffix: &[5, 1], write: |r, v| r.cards.status = Status::from(v) },
    FieldSpec { suffix: &[6], write: |r, v| r.events.value = v.to_string() },
    FieldSpec { suffix: &[6, 1], write: |r, v| r.events.status = Status::from(v) },
    FieldSpec { suffix: &[7], write: |r, v| r.doors[0] = v.to_string() },
    FieldSpec { suffix: &[8], write: |r, v| r.doors[1] = v.to_string() },
    FieldSpec { suffix: &[9], write: |r, v| r.doors[2] = v.to_string() },
    FieldSpec { suffix: &[10], write: |r, v| r.doors[3] = v.to_string() },
];

impl Record for Controller {
    const KIND: EntityKind = EntityKind::Controller;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            created: String::new(),
            name: String::new(),
            device_id: String::new(),
            address: Reconciled::default(),
            datetime: Reconciled::default(),
            cards: Tracked::default(),
            events: Tracked::default(),
            doors: Default::default(),
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
        let mut fields = vec![
            FieldValue::new(oid.child(1), &self.name),
            FieldValue::new(oid.child(2), &self.device_id),
            FieldValue::new(oid.child(3), &self.address.value),
            FieldValue::new(oid.child(4), &self.datetime.value),
            FieldValue::new(oid.child(5), &self.cards.value),
            FieldValue::new(oid.child(6), &self.events.value),
        ];
        fields.extend(
            self.doors
                .iter()
                .zip(7..)
                .map(|(door, slot)| FieldValue::new(oid.child(slot), door)),
        );
        fields
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.created
            .cmp(&other.created)
            .then_with(|| self.header.oid.cmp(&other.header.oid))
    }
}

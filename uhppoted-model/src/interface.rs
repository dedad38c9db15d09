use crate::record::{FieldSpec, FieldValue, Record, RecordHeader};
use serde::{Deserialize, Serialize};
use uhppoted_types::{EntityKind, Oid, Status};

/// A host network interface (`0.1.1.1.N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    #[serde(flatten)]
    pub header: RecordHeader,
    #[serde(rename = "type")]
    pub interface_type: String,
    pub name: String,
    pub bind: String,
    pub broadcast: String,
    pub listen: String,
}

static FIELDS: &[FieldSpec<Interface>] = &[
    FieldSpec { suffix: &[0], write: |r, v| r.interface_type = v.to_string() },
    FieldSpec { suffix: &[1], write: |r, v| r.name = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.bind = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| r.broadcast = v.to_string() },
    FieldSpec { suffix: &[4], write: |r, v| r.listen = v.to_string() },
];

impl Record for Interface {
    const KIND: EntityKind = EntityKind::Interface;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            interface_type: String::new(),
            name: String::new(),
            bind: String::new(),
            broadcast: String::new(),
            listen: String::new(),
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
            FieldValue::new(oid.child(2), &self.bind),
            FieldValue::new(oid.child(3), &self.broadcast),
            FieldValue::new(oid.child(4), &self.listen),
        ]
    }
}

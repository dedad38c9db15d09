use crate::membership::{Member, Membership};
use crate::record::{FieldSpec, FieldValue, Record, RecordHeader, parse_index};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// Sub-collection segment for group → door permissions.
const DOORS: u32 = 2;

/// A group's permission for one door.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDoor {
    pub door: String,
    pub allowed: bool,
}

impl Member for GroupDoor {
    fn set_flag(&mut self, flag: bool) {
        self.allowed = flag;
    }

    fn set_reference(&mut self, reference: &str) {
        self.door = reference.to_string();
    }

    fn flag(&self) -> bool {
        self.allowed
    }
}

/// An access group (`0.4.N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub created: String,
    pub name: String,
    pub doors: Membership<GroupDoor>,
    pub index: u32,
}

static FIELDS: &[FieldSpec<Group>] = &[
    FieldSpec { suffix: &[0, 1], write: |r, v| r.created = v.to_string() },
    FieldSpec { suffix: &[1], write: |r, v| r.name = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| parse_index(&mut r.index, v) },
];

impl Record for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            created: String::new(),
            name: String::new(),
            doors: Membership::default(),
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

    fn decode_collection(&mut self, suffix: &[u32], value: &str) -> bool {
        self.doors.decode(&self.header.oid, DOORS, suffix, value)
    }

    fn field_values(&self) -> Vec<FieldValue> {
        let mut fields = vec![FieldValue::new(self.header.oid.child(1), &self.name)];
        fields.extend(
            self.doors
                .iter()
                .map(|(sub, d)| FieldValue::new(sub.clone(), d.flag().to_string())),
        );
        fields
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| self.header.oid.cmp(&other.header.oid))
    }
}

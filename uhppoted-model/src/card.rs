use crate::membership::{Member, Membership};
use crate::record::{FieldSpec, FieldValue, Record, RecordHeader};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// Sub-collection segment for card → group membership.
const GROUPS: u32 = 5;

/// A card's membership of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardGroup {
    pub group: String,
    pub member: bool,
}

impl Member for CardGroup {
    fn set_flag(&mut self, flag: bool) {
        self.member = flag;
    }

    fn set_reference(&mut self, reference: &str) {
        self.group = reference.to_string();
    }

    fn flag(&self) -> bool {
        self.member
    }
}

/// An access card (`0.3.N`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub created: String,
    pub name: String,
    pub number: String,
    pub from: String,
    pub to: String,
    pub groups: Membership<CardGroup>,
}

static FIELDS: &[FieldSpec<Card>] = &[
    FieldSpec { suffix: &[0, 1], write: |r, v| r.created = v.to_string() },
    FieldSpec { suffix: &[1], write: |r, v| r.name = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.number = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| r.from = v.to_string() },
    FieldSpec { suffix: &[4], write: |r, v| r.to = v.to_string() },
];

impl Record for Card {
    const KIND: EntityKind = EntityKind::Card;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            created: String::new(),
            name: String::new(),
            number: String::new(),
            from: String::new(),
            to: String::new(),
            groups: Membership::default(),
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
        self.groups.decode(&self.header.oid, GROUPS, suffix, value)
    }

    fn field_values(&self) -> Vec<FieldValue> {
        let oid = &self.header.oid;
        let mut fields = vec![
            FieldValue::new(oid.child(1), &self.name),
            FieldValue::new(oid.child(2), &self.number),
            FieldValue::new(oid.child(3), &self.from),
            FieldValue::new(oid.child(4), &self.to),
        ];
        fields.extend(
            self.groups
                .iter()
                .map(|(sub, g)| FieldValue::new(sub.clone(), g.flag().to_string())),
        );
        fields
    }

    fn display_order(&self, other: &Self) -> Ordering {
        self.created
            .cmp(&other.created)
            .then_with(|| self.header.oid.cmp(&other.header.oid))
    }
}

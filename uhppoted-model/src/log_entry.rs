use crate::record::{FieldSpec, Record, RecordHeader};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uhppoted_types::{EntityKind, Oid, Status};

/// The object an audit log entry refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogModule {
    #[serde(rename = "type")]
    pub module_type: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub field: String,
}

/// An audit log entry (`0.6.N`). Read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(flatten)]
    pub header: RecordHeader,
    pub timestamp: String,
    pub uid: String,
    pub module: LogModule,
    pub details: String,
}

static FIELDS: &[FieldSpec<LogEntry>] = &[
    FieldSpec { suffix: &[1], write: |r, v| r.timestamp = v.to_string() },
    FieldSpec { suffix: &[2], write: |r, v| r.uid = v.to_string() },
    FieldSpec { suffix: &[3], write: |r, v| r.module.module_type = v.to_string() },
    FieldSpec { suffix: &[4], write: |r, v| r.module.id = v.to_string() },
    FieldSpec { suffix: &[5], write: |r, v| r.module.name = v.to_string() },
    FieldSpec { suffix: &[6], write: |r, v| r.module.field = v.to_string() },
    FieldSpec { suffix: &[7], write: |r, v| r.details = v.to_string() },
];

impl Record for LogEntry {
    const KIND: EntityKind = EntityKind::LogEntry;

    fn new(oid: Oid, status: Status) -> Self {
        Self {
            header: RecordHeader::new(oid, status),
            timestamp: String::new(),
            uid: String::new(),
            module: LogModule::default(),
            details: String::new(),
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

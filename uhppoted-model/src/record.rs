use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;
use uhppoted_types::{EntityKind, Oid, Status};

/// Writes a decoded value into one field of a record.
pub type FieldWriter<R> = fn(&mut R, &str);

/// One entry of a per-kind decode table: the OID suffix (relative to the
/// entity root) and the writer for the field it addresses.
pub struct FieldSpec<R: 'static> {
    pub suffix: &'static [u32],
    pub write: FieldWriter<R>,
}

/// Identity and bookkeeping shared by every record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHeader {
    #[serde(rename = "OID")]
    pub oid: Oid,
    pub status: Status,
    /// Refresh cycles since the record was last touched.
    pub mark: u32,
}

impl RecordHeader {
    pub fn new(oid: Oid, status: Status) -> Self {
        Self {
            oid,
            status,
            mark: 0,
        }
    }
}

/// An editable field projected out of a record: its OID and current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub oid: Oid,
    pub value: String,
}

impl FieldValue {
    pub fn new(oid: Oid, value: impl Into<String>) -> Self {
        Self {
            oid,
            value: value.into(),
        }
    }
}

/// A cached entity of one [`EntityKind`].
pub trait Record: Sized + 'static {
    const KIND: EntityKind;

    /// Creates a record with every field defaulted.
    fn new(oid: Oid, status: Status) -> Self;

    fn header(&self) -> &RecordHeader;

    fn header_mut(&mut self) -> &mut RecordHeader;

    /// The decode table for this kind.
    fn fields() -> &'static [FieldSpec<Self>];

    /// Decodes a sub-collection suffix. Returns true if it landed.
    fn decode_collection(&mut self, suffix: &[u32], value: &str) -> bool {
        let _ = (suffix, value);
        false
    }

    /// The editable fields of this record, as rendered.
    fn field_values(&self) -> Vec<FieldValue> {
        Vec::new()
    }

    /// Presentation order. Defaults to OID order.
    fn display_order(&self, other: &Self) -> Ordering {
        self.oid().cmp(other.oid())
    }

    fn oid(&self) -> &Oid {
        &self.header().oid
    }

    fn status(&self) -> &Status {
        &self.header().status
    }

    fn mark(&self) -> u32 {
        self.header().mark
    }

    /// Applies a status write to the entity root. Resets the mark.
    fn write_status(&mut self, status: Status) {
        let header = self.header_mut();
        header.status = status;
        header.mark = 0;
    }

    /// Applies a field write addressed by `suffix`.
    ///
    /// Any field write moves a `new` record to `unknown`, recognised suffix
    /// or not. A write that lands also resets the mark. Returns false for
    /// unrecognised suffixes, which leave the fields untouched.
    fn write_field(&mut self, suffix: &[u32], value: &str) -> bool {
        let header = self.header_mut();
        if header.status.is_new() {
            header.status = Status::Unknown;
        }

        let landed = match Self::fields().iter().find(|f| f.suffix == suffix) {
            Some(spec) => {
                (spec.write)(self, value);
                true
            }
            None => self.decode_collection(suffix, value),
        };

        if landed {
            self.header_mut().mark = 0;
        }

        landed
    }
}

/// Parses a numeric index field. A malformed value leaves `target`
/// unchanged.
pub fn parse_index(target: &mut u32, value: &str) {
    match value.trim().parse::<u32>() {
        Ok(v) => *target = v,
        Err(e) => warn!("ignoring malformed index {value:?}: {e}"),
    }
}

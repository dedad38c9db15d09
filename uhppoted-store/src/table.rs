use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use uhppoted_model::{FieldValue, Record};
use uhppoted_types::{EntityKind, Oid, Status};

/// `first`/`last` markers pushed by the server for a paginated table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub first: Option<String>,
    pub last: Option<String>,
}

/// The records of one kind, keyed by entity root OID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<R> {
    records: BTreeMap<Oid, R>,
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }
}

impl<R: Record> Table<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, oid: &Oid) -> Option<&R> {
        self.records.get(oid)
    }

    pub fn get_mut(&mut self, oid: &Oid) -> Option<&mut R> {
        self.records.get_mut(oid)
    }

    pub fn contains(&self, oid: &Oid) -> bool {
        self.records.contains_key(oid)
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in presentation order.
    pub fn ordered(&self) -> Vec<&R> {
        let mut list: Vec<&R> = self.records.values().collect();
        list.sort_by(|a, b| a.display_order(b));
        list
    }

    /// Applies a write to an entity root. Returns true if a record was
    /// created.
    pub fn write_root(&mut self, root: &Oid, value: &str) -> bool {
        match self.records.get_mut(root) {
            Some(record) => {
                record.write_status(Status::from(value));
                false
            }
            None => {
                self.records
                    .insert(root.clone(), R::new(root.clone(), Status::from(value)));
                true
            }
        }
    }

    /// Applies a field write below `root`. Returns true if it landed.
    pub fn write_field(&mut self, root: &Oid, suffix: &[u32], value: &str) -> bool {
        match self.records.get_mut(root) {
            Some(record) => {
                let landed = record.write_field(suffix, value);
                if !landed {
                    debug!("ignoring unrecognised {} field {root}.{suffix:?}", R::KIND);
                }
                landed
            }
            None => {
                debug!("ignoring field write for unregistered {} {root}", R::KIND);
                false
            }
        }
    }
}

/// Kind-erased view of a [`Table`], used where every table is scanned
/// uniformly (retention, status lookups, local deletes).
pub trait RecordTable {
    fn kind(&self) -> EntityKind;

    fn status_of(&self, oid: &Oid) -> Option<&Status>;

    fn record_count(&self) -> usize;

    /// Root OIDs in presentation order.
    fn ordered_oids(&self) -> Vec<Oid>;

    /// Editable field projection of `oid`, if present.
    fn field_values(&self, oid: &Oid) -> Option<Vec<FieldValue>>;

    /// Marks `oid` deleted as the server would. Returns false if absent.
    fn mark_deleted(&mut self, oid: &Oid) -> bool;

    /// Physically removes `oid`. Returns false if absent.
    fn remove(&mut self, oid: &Oid) -> bool;

    /// Increments the mark of every record.
    fn bump_marks(&mut self);

    /// Removes tombstones whose mark has reached `threshold`, returning
    /// their OIDs.
    fn sweep(&mut self, threshold: u32) -> Vec<Oid>;
}

impl<R: Record> RecordTable for Table<R> {
    fn kind(&self) -> EntityKind {
        R::KIND
    }

    fn status_of(&self, oid: &Oid) -> Option<&Status> {
        self.records.get(oid).map(|r| r.status())
    }

    fn record_count(&self) -> usize {
        self.records.len()
    }

    fn ordered_oids(&self) -> Vec<Oid> {
        self.ordered().into_iter().map(|r| r.oid().clone()).collect()
    }

    fn field_values(&self, oid: &Oid) -> Option<Vec<FieldValue>> {
        self.records.get(oid).map(|r| r.field_values())
    }

    fn mark_deleted(&mut self, oid: &Oid) -> bool {
        match self.records.get_mut(oid) {
            Some(record) => {
                record.write_status(Status::Deleted);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, oid: &Oid) -> bool {
        self.records.remove(oid).is_some()
    }

    fn bump_marks(&mut self) {
        for record in self.records.values_mut() {
            let header = record.header_mut();
            header.mark = header.mark.saturating_add(1);
        }
    }

    fn sweep(&mut self, threshold: u32) -> Vec<Oid> {
        let expired: Vec<Oid> = self
            .records
            .values()
            .filter(|r| r.status().is_deleted() && r.mark() >= threshold)
            .map(|r| r.oid().clone())
            .collect();

        for oid in &expired {
            self.records.remove(oid);
        }

        expired
    }
}

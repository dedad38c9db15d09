//! Per-field optimistic edit state.
//!
//! Every rendered field carries the last server value (`original`), the
//! locally held value and a [`FieldFlags`] set. Server updates are fed
//! through [`EditState::receive_update`]; user input through
//! [`EditState::set`]. Commits move `modified` fields to `pending` until
//! the response settles.

use crate::field::{FieldFlags, FieldState};
use crate::percolate::{DirtyIndicator, Percolator};
use crate::protocol::Update;
use std::collections::BTreeMap;
use tracing::debug;
use uhppoted_types::Oid;

/// Fields submitted by one commit, awaiting its response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    /// The submitted fields, in OID order.
    pub fields: Vec<Oid>,
    /// The outbound `(path, value)` pairs.
    pub records: Vec<Update>,
}

impl PendingCommit {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Edit state of every rendered field plus the derived dirty indicators.
#[derive(Debug, Clone, Default)]
pub struct EditState {
    fields: BTreeMap<Oid, FieldState>,
    percolator: Percolator,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, oid: &Oid) -> Option<&FieldState> {
        self.fields.get(oid)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields strictly below `root`.
    pub fn fields_under<'a>(&'a self, root: &'a Oid) -> impl Iterator<Item = &'a FieldState> {
        self.fields
            .values()
            .filter(move |f| f.oid.is_descendant_of(root))
    }

    /// True if any field below `root` is `modified`.
    pub fn is_modified(&self, root: &Oid) -> bool {
        self.fields_under(root).any(FieldState::is_modified)
    }

    pub fn indicator(&self, oid: &Oid) -> DirtyIndicator {
        self.percolator.indicator(oid)
    }

    /// User input. Returns false if the field has not been rendered.
    pub fn set(&mut self, oid: &Oid, value: &str) -> bool {
        let Some(field) = self.fields.get_mut(oid) else {
            debug!("ignoring edit of unrendered field {oid}");
            return false;
        };

        field.value = value.to_string();
        field.reconcile();
        self.percolate(oid);
        true
    }

    /// Marks `oid` as under (or no longer under) active user input.
    pub fn focus(&mut self, oid: &Oid, focused: bool) -> bool {
        match self.fields.get_mut(oid) {
            Some(field) => {
                field.focused = focused;
                true
            }
            None => false,
        }
    }

    /// A server value for `oid`. The first update for a field creates its
    /// edit state.
    pub fn receive_update(&mut self, oid: &Oid, server: &str) {
        let Some(field) = self.fields.get_mut(oid) else {
            self.fields
                .insert(oid.clone(), FieldState::new(oid.clone(), server));
            return;
        };

        let previous = std::mem::replace(&mut field.original, server.to_string());

        if field.is_modified() {
            if field.diverges(&previous, server) {
                field.flags.insert(FieldFlags::CONFLICT);
            } else if field.value != server {
                field.flags.remove(FieldFlags::CONFLICT);
            } else {
                field.flags.remove(FieldFlags::CONFLICT | FieldFlags::MODIFIED);
            }
            self.percolate(oid);
            return;
        }

        if field.is_pending() {
            if field.diverges(&previous, server) {
                field.flags.insert(FieldFlags::CONFLICT);
            } else {
                field.flags.remove(FieldFlags::CONFLICT);
            }
            return;
        }

        if !field.focused {
            field.value = server.to_string();
        }
        field.reconcile();
        self.percolate(oid);
    }

    /// Moves every `modified` field below each of `roots` to `pending` and
    /// returns the batch to submit. `None` if nothing is modified.
    pub fn begin_commit(&mut self, roots: &[Oid]) -> Option<PendingCommit> {
        let mut commit = PendingCommit {
            fields: Vec::new(),
            records: Vec::new(),
        };

        for field in self.fields.values_mut() {
            let selected = field.is_modified() && roots.iter().any(|r| field.oid.is_descendant_of(r));
            if selected {
                field.flags.remove(FieldFlags::MODIFIED);
                field.flags.insert(FieldFlags::PENDING);
                commit.fields.push(field.oid.clone());
                commit
                    .records
                    .push(Update::new(field.oid.to_string(), field.value.clone()));
            }
        }

        if commit.is_empty() {
            return None;
        }

        for oid in &commit.fields {
            self.percolate(oid);
        }
        Some(commit)
    }

    /// The commit settled: clears `pending` from its fields.
    pub fn complete_commit(&mut self, commit: &PendingCommit) {
        for oid in &commit.fields {
            if let Some(field) = self.fields.get_mut(oid) {
                field.flags.remove(FieldFlags::PENDING);
            }
        }
    }

    /// The commit failed: its fields go back to `modified`.
    pub fn fail_commit(&mut self, commit: &PendingCommit) {
        for oid in &commit.fields {
            if let Some(field) = self.fields.get_mut(oid) {
                field.flags.remove(FieldFlags::PENDING);
                field.flags.insert(FieldFlags::MODIFIED);
            }
        }
        for oid in &commit.fields {
            self.percolate(oid);
        }
    }

    /// Restores every field below `root` to its server value.
    pub fn revert(&mut self, root: &Oid) {
        let reverted: Vec<Oid> = self
            .fields
            .values_mut()
            .filter(|f| f.oid.is_descendant_of(root))
            .map(|f| {
                f.value = f.original.clone();
                f.flags.remove(FieldFlags::MODIFIED | FieldFlags::CONFLICT);
                f.oid.clone()
            })
            .collect();

        for oid in &reverted {
            self.percolate(oid);
        }
    }

    /// Drops all edit state of the entity at `root`.
    pub fn forget(&mut self, root: &Oid) {
        self.fields
            .retain(|oid, _| oid != root && !oid.is_descendant_of(root));
        self.percolator.clear_under(root);
        self.percolate(root);
    }

    fn percolate(&mut self, oid: &Oid) {
        let dirty: Vec<&Oid> = self
            .fields
            .values()
            .filter(|f| f.is_modified())
            .map(|f| &f.oid)
            .collect();
        self.percolator.percolate(oid, &dirty);
    }
}

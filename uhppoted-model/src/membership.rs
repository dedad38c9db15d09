//! Sub-collections addressed below an entity field.
//!
//! A card's group memberships live under `<card>.5.<group>` and a group's
//! door permissions under `<group>.2.<door>`. The bare sub-entry path carries
//! the membership flag and `<sub-entry>.1` carries the label/reference.
//! `.2` and `.3` below a sub-entry carry nothing the cache keeps but still
//! register the entry. Any of these may arrive first; the entry is created
//! on first sight.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uhppoted_types::Oid;

/// One entry of a sub-collection.
pub trait Member: Default {
    fn set_flag(&mut self, flag: bool);

    fn set_reference(&mut self, reference: &str);

    fn flag(&self) -> bool;
}

/// Sub-collection keyed by the sub-entry's full OID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Membership<M>(BTreeMap<Oid, M>);

impl<M> Default for Membership<M> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<M: Member> Membership<M> {
    /// Decodes `suffix` (relative to the owning entity's `root`) if it
    /// addresses an entry under `sub_root`. Returns true if it landed.
    pub fn decode(&mut self, root: &Oid, sub_root: u32, suffix: &[u32], value: &str) -> bool {
        match suffix {
            &[s, id] if s == sub_root && id > 0 => {
                self.entry(root.join(&[s, id])).set_flag(value == "true");
                true
            }
            &[s, id, 1] if s == sub_root && id > 0 => {
                self.entry(root.join(&[s, id])).set_reference(value);
                true
            }
            &[s, id, 2 | 3] if s == sub_root && id > 0 => {
                self.entry(root.join(&[s, id]));
                true
            }
            _ => false,
        }
    }

    fn entry(&mut self, oid: Oid) -> &mut M {
        self.0.entry(oid).or_default()
    }

    pub fn get(&self, oid: &Oid) -> Option<&M> {
        self.0.get(oid)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Oid, &M)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

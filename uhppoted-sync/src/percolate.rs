//! Dirty status aggregated up the OID hierarchy.
//!
//! Each ancestor of a dirty field reports how many *independent* dirty
//! subtrees sit below it: a dirty path nested under another dirty path is
//! not counted separately. The indicators are recomputed in full for every
//! ancestor on each call.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uhppoted_types::Oid;

/// Aggregate dirty state of a composite field or entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirtyIndicator {
    #[default]
    None,
    Single,
    Multiple,
}

impl DirtyIndicator {
    pub fn is_dirty(self) -> bool {
        !matches!(self, DirtyIndicator::None)
    }
}

/// Counts the outermost dirty subtrees strictly below `ancestor`.
pub fn aggregate<'a, I>(ancestor: &Oid, dirty: I) -> DirtyIndicator
where
    I: IntoIterator<Item = &'a Oid>,
{
    let mut below: Vec<&Oid> = dirty
        .into_iter()
        .filter(|oid| oid.is_descendant_of(ancestor))
        .collect();
    below.sort_by_key(|oid| oid.len());

    let mut outermost: Vec<&Oid> = Vec::new();
    for oid in below {
        if !outermost.iter().any(|o| *o == oid || oid.is_descendant_of(o)) {
            outermost.push(oid);
        }
    }

    match outermost.len() {
        0 => DirtyIndicator::None,
        1 => DirtyIndicator::Single,
        _ => DirtyIndicator::Multiple,
    }
}

/// Indicator per ancestor OID. Only dirty ancestors are held.
#[derive(Debug, Clone, Default)]
pub struct Percolator {
    indicators: BTreeMap<Oid, DirtyIndicator>,
}

impl Percolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the indicator of every strict ancestor of `path` from
    /// the current set of dirty fields.
    pub fn percolate(&mut self, path: &Oid, dirty: &[&Oid]) {
        for ancestor in path.ancestors() {
            match aggregate(&ancestor, dirty.iter().copied()) {
                DirtyIndicator::None => {
                    self.indicators.remove(&ancestor);
                }
                indicator => {
                    self.indicators.insert(ancestor, indicator);
                }
            }
        }
    }

    pub fn indicator(&self, oid: &Oid) -> DirtyIndicator {
        self.indicators.get(oid).copied().unwrap_or_default()
    }

    /// Drops every indicator at or below `root`.
    pub fn clear_under(&mut self, root: &Oid) {
        self.indicators
            .retain(|oid, _| oid != root && !oid.is_descendant_of(root));
    }
}

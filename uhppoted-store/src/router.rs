//! Path classification.
//!
//! Routing tests each kind's prefix in [`EntityKind::ALL`] order and takes
//! the first match. A path matching no prefix is not routable and is
//! dropped by the caller.

use uhppoted_types::{EntityKind, Oid};

/// Which end of a paginated table a cursor marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorEnd {
    First,
    Last,
}

/// Where an inbound path lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The path is an entity root: its value is the entity's status.
    Root { kind: EntityKind, root: Oid },
    /// The path addresses a field (or sub-collection entry) of an entity.
    Field {
        kind: EntityKind,
        root: Oid,
        suffix: Vec<u32>,
    },
    /// One of the `first`/`last` markers of a paginated table.
    Cursor { kind: EntityKind, end: CursorEnd },
}

impl Route {
    pub fn kind(&self) -> EntityKind {
        match self {
            Route::Root { kind, .. } | Route::Field { kind, .. } | Route::Cursor { kind, .. } => {
                *kind
            }
        }
    }
}

/// Classifies `path`. Returns `None` for unknown kinds and for paths below a
/// kind prefix that do not name an entity (e.g. `0.3.0.1`).
pub fn route(path: &Oid) -> Option<Route> {
    let kind = EntityKind::ALL
        .into_iter()
        .find(|k| path.len() > k.prefix().len() && path.starts_with(k.prefix()))?;

    let rest = &path.segments()[kind.prefix().len()..];

    if kind.is_paginated() {
        match rest {
            [0, 1] => return Some(Route::Cursor { kind, end: CursorEnd::First }),
            [0, 2] => return Some(Route::Cursor { kind, end: CursorEnd::Last }),
            _ => {}
        }
    }

    if rest[0] == 0 {
        return None;
    }

    let root = path.truncate(kind.root_depth())?;
    let suffix = &rest[1..];

    if suffix.is_empty() {
        Some(Route::Root { kind, root })
    } else {
        Some(Route::Field {
            kind,
            root,
            suffix: suffix.to_vec(),
        })
    }
}

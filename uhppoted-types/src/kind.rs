use serde::{Deserialize, Serialize};
use std::fmt;

/// The object kinds mirrored by the cache.
///
/// Every kind owns a fixed OID prefix. Prefixes are mutually exclusive, so
/// routing by first match over [`EntityKind::ALL`] is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Interface,
    Controller,
    Door,
    Card,
    Group,
    Event,
    LogEntry,
}

impl EntityKind {
    /// All kinds, in routing order.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Interface,
        EntityKind::Controller,
        EntityKind::Door,
        EntityKind::Card,
        EntityKind::Group,
        EntityKind::Event,
        EntityKind::LogEntry,
    ];

    /// The OID prefix under which entities of this kind live.
    #[must_use]
    pub const fn prefix(self) -> &'static [u32] {
        match self {
            EntityKind::Interface => &[0, 1, 1, 1],
            EntityKind::Controller => &[0, 1, 1, 2],
            EntityKind::Door => &[0, 2],
            EntityKind::Card => &[0, 3],
            EntityKind::Group => &[0, 4],
            EntityKind::Event => &[0, 5],
            EntityKind::LogEntry => &[0, 6],
        }
    }

    /// Number of segments in an entity root OID of this kind.
    #[must_use]
    pub const fn root_depth(self) -> usize {
        self.prefix().len() + 1
    }

    /// True for the server-paginated tables (events, log entries).
    #[must_use]
    pub const fn is_paginated(self) -> bool {
        matches!(self, EntityKind::Event | EntityKind::LogEntry)
    }

    /// Collection name, as used for table names and request paths.
    #[must_use]
    pub const fn collection(self) -> &'static str {
        match self {
            EntityKind::Interface => "interfaces",
            EntityKind::Controller => "controllers",
            EntityKind::Door => "doors",
            EntityKind::Card => "cards",
            EntityKind::Group => "groups",
            EntityKind::Event => "events",
            EntityKind::LogEntry => "logs",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

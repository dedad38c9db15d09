//! Wire shapes exchanged with the server.
//!
//! Inbound responses carry a flat list of `(OID, value)` pairs under
//! `system.objects`. Outbound commits post `{"objects": [...]}` with one
//! pair per modified field, or the single [`NEW_SENTINEL`] pair to request
//! creation of an entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use uhppoted_types::EntityKind;

/// Path of the pair that asks the server to create an entity.
pub const NEW_SENTINEL: &str = "<new>";

/// One `(path, value)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    #[serde(rename = "OID", alias = "oid")]
    pub path: String,
    pub value: String,
}

impl Update {
    pub fn new(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Body of a `200` response to a fetch or commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub system: Option<SystemObjects>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemObjects {
    #[serde(default)]
    pub objects: Vec<Update>,
}

impl Response {
    pub fn new(objects: Vec<Update>) -> Self {
        Self {
            system: Some(SystemObjects { objects }),
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The carried updates. Empty for a response without `system.objects`.
    pub fn into_updates(self) -> Vec<Update> {
        self.system.map(|s| s.objects).unwrap_or_default()
    }
}

/// Body of a commit or create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitBatch {
    pub objects: Vec<OutboundRecord>,
}

/// Outbound pairs use a lowercase `oid` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundRecord {
    pub oid: String,
    pub value: String,
}

impl CommitBatch {
    pub fn new(records: &[Update]) -> Self {
        Self {
            objects: records
                .iter()
                .map(|u| OutboundRecord {
                    oid: u.path.clone(),
                    value: u.value.clone(),
                })
                .collect(),
        }
    }

    /// The creation request for a new entity.
    pub fn create() -> Self {
        Self {
            objects: vec![OutboundRecord {
                oid: NEW_SENTINEL.to_string(),
                value: String::new(),
            }],
        }
    }

    pub fn is_create(&self) -> bool {
        matches!(self.objects.as_slice(), [r] if r.oid == NEW_SENTINEL)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Which slice of a collection a fetch asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRange {
    /// Everything (non-paginated collections).
    All,
    /// The first page of a paginated collection: `range=0,N`.
    Initial { count: usize },
    /// `count` records beyond the `offset` already held: `range=N,+M`.
    More { offset: usize, count: usize },
}

/// A GET against one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub kind: EntityKind,
    pub range: FetchRange,
}

impl FetchRequest {
    /// The first fetch for `kind`; paginated kinds fetch a page.
    pub fn initial(kind: EntityKind, page_size: usize) -> Self {
        let range = if kind.is_paginated() {
            FetchRange::Initial { count: page_size }
        } else {
            FetchRange::All
        };
        Self { kind, range }
    }

    pub fn more(kind: EntityKind, offset: usize, count: usize) -> Self {
        Self {
            kind,
            range: FetchRange::More { offset, count },
        }
    }

    /// The query string value of `range`, if any (unencoded).
    pub fn range_param(&self) -> Option<String> {
        match self.range {
            FetchRange::All => None,
            FetchRange::Initial { count } => Some(format!("0,{count}")),
            FetchRange::More { offset, count } => Some(format!("{offset},+{count}")),
        }
    }

    /// Request path, e.g. `/events?range=0%2C15`.
    pub fn path(&self) -> String {
        let base = collection_path(self.kind);
        match self.range_param() {
            Some(range) => format!("{base}?range={}", encode_range(&range)),
            None => base.to_string(),
        }
    }
}

impl fmt::Display for FetchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The URL a kind is fetched from and committed to. Interfaces and
/// controllers share the system page.
pub fn collection_path(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Interface | EntityKind::Controller => "/system",
        EntityKind::Door => "/doors",
        EntityKind::Card => "/cards",
        EntityKind::Group => "/groups",
        EntityKind::Event => "/events",
        EntityKind::LogEntry => "/logs",
    }
}

fn encode_range(range: &str) -> String {
    range.replace(',', "%2C").replace('+', "%2B")
}

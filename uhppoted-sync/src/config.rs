use crate::error::SyncResult;
use serde::{Deserialize, Serialize};
use uhppoted_store::DEFAULT_RETENTION_CYCLES;
use uhppoted_types::EntityKind;

/// Default page size of paginated fetches.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Render chunk sizes per collection. A kind without an entry renders in
/// one chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSizes {
    pub cards: Option<usize>,
    pub events: Option<usize>,
    pub logs: Option<usize>,
}

impl Default for ChunkSizes {
    fn default() -> Self {
        Self {
            cards: Some(1),
            events: Some(5),
            logs: Some(5),
        }
    }
}

/// Configuration for the cache engine.
///
/// ```toml
/// retention_cycles = 25
/// page_size = 15
///
/// [chunk_sizes]
/// cards = 1
/// events = 5
/// logs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Refresh cycles a tombstone survives untouched.
    pub retention_cycles: u32,
    pub chunk_sizes: ChunkSizes,
    /// Records per paginated fetch.
    pub page_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            retention_cycles: DEFAULT_RETENTION_CYCLES,
            chunk_sizes: ChunkSizes::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CacheConfig {
    pub fn from_toml_str(s: &str) -> SyncResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Records rendered per chunk for `kind`. Never zero.
    pub fn chunk_size(&self, kind: EntityKind) -> usize {
        let size = match kind {
            EntityKind::Card => self.chunk_sizes.cards,
            EntityKind::Event => self.chunk_sizes.events,
            EntityKind::LogEntry => self.chunk_sizes.logs,
            _ => None,
        };
        size.unwrap_or(usize::MAX).max(1)
    }
}

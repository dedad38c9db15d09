//! Offline replay of recorded server responses.
//!
//! Each non-blank line of a recording is one `{"system":{"objects":[...]}}`
//! document and is applied as one refresh cycle.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};
use uhppoted_store::Store;
use uhppoted_sync::{
    CacheConfig, CacheEngine, CommitBatch, FetchRequest, Response, SyncError, SyncResult,
    Transport, Update,
};
use uhppoted_types::EntityKind;

/// A transport with no server behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

#[async_trait]
impl Transport for Offline {
    async fn fetch(&self, request: &FetchRequest) -> SyncResult<Response> {
        Err(SyncError::Transport(format!("offline: GET {request}")))
    }

    async fn post(&self, kind: EntityKind, _batch: &CommitBatch) -> SyncResult<Response> {
        Err(SyncError::Transport(format!("offline: POST {kind}")))
    }
}

/// Parses a recording into one update batch per document.
pub fn parse_recording(text: &str) -> Result<Vec<Vec<Update>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(n, line)| {
            Response::from_json(line)
                .map(Response::into_updates)
                .with_context(|| format!("line {}: invalid response document", n + 1))
        })
        .collect()
}

/// Totals of one replay, printed alongside the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub cycles: usize,
    pub updates: usize,
    pub applied: usize,
    pub removed: usize,
}

/// The store after a replay, with its summary.
#[derive(Debug, Serialize)]
pub struct ReplayOutput {
    pub summary: ReplaySummary,
    pub store: Store,
}

/// Applies every batch as one refresh cycle, then runs `idle_cycles`
/// cycles with no input.
pub async fn replay(
    batches: &[Vec<Update>],
    idle_cycles: usize,
    config: CacheConfig,
) -> ReplayOutput {
    let mut engine = CacheEngine::with_config(Offline, config);
    let mut summary = ReplaySummary::default();

    for (n, batch) in batches.iter().enumerate() {
        let applied = engine.receive(batch).await;
        debug!("batch {}: {} of {} updates applied", n + 1, applied.len(), batch.len());

        summary.updates += batch.len();
        summary.applied += applied.len();
        summary.removed += engine.refreshed().removed.len();
        summary.cycles += 1;
    }

    for _ in 0..idle_cycles {
        summary.removed += engine.refreshed().removed.len();
        summary.cycles += 1;
    }

    info!(
        "replayed {} cycles: {} of {} updates applied, {} records removed",
        summary.cycles, summary.applied, summary.updates, summary.removed
    );

    ReplayOutput {
        summary,
        store: engine.store().clone(),
    }
}

//! Cache engine: the store, the edit state and the transport wired
//! together.
//!
//! The engine owns all mutable state and is driven through `&mut self`,
//! so there is a single logical thread of control. Requests are awaited
//! in place; the only cross-request state is the busy count.

use crate::busy::BusyCounter;
use crate::config::CacheConfig;
use crate::edits::EditState;
use crate::error::{SyncError, SyncResult};
use crate::percolate::DirtyIndicator;
use crate::protocol::{CommitBatch, FetchRequest, Update};
use crate::transport::Transport;
use std::collections::BTreeSet;
use tracing::{debug, info, warn};
use uhppoted_store::{Applied, RetentionSweeper, Store, SweepReport};
use uhppoted_types::{EntityKind, Oid};

pub struct CacheEngine<T> {
    store: Store,
    edits: EditState,
    transport: T,
    busy: BusyCounter,
    sweeper: RetentionSweeper,
    config: CacheConfig,
}

impl<T: Transport> CacheEngine<T> {
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, CacheConfig::default())
    }

    pub fn with_config(transport: T, config: CacheConfig) -> Self {
        Self {
            store: Store::new(),
            edits: EditState::new(),
            transport,
            busy: BusyCounter::new(),
            sweeper: RetentionSweeper::new(config.retention_cycles),
            config,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn edits(&self) -> &EditState {
        &self.edits
    }

    pub fn busy(&self) -> &BusyCounter {
        &self.busy
    }

    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ── Inbound ──────────────────────────────────────────────────

    /// Applies an inbound batch, then re-renders every kind it touched.
    pub async fn receive(&mut self, updates: &[Update]) -> Vec<Applied> {
        self.receive_for(updates, None).await
    }

    /// As [`receive`](Self::receive), also rendering `also` once even if
    /// the batch did not touch it.
    async fn receive_for(&mut self, updates: &[Update], also: Option<EntityKind>) -> Vec<Applied> {
        let applied: Vec<Applied> = updates
            .iter()
            .filter_map(|u| self.store.apply(&u.path, &u.value))
            .collect();

        let mut kinds: BTreeSet<EntityKind> = applied.iter().map(Applied::kind).collect();
        kinds.extend(also);
        for kind in kinds {
            self.render(kind).await;
        }

        applied
    }

    /// Feeds every record of `kind` to the edit state, a chunk at a time.
    pub async fn render(&mut self, kind: EntityKind) {
        let roots = self.store.ordered_oids(kind);
        let chunk = self.config.chunk_size(kind);

        for batch in roots.chunks(chunk) {
            for root in batch {
                self.render_entity(kind, root);
            }
            tokio::task::yield_now().await;
        }
    }

    fn render_entity(&mut self, kind: EntityKind, root: &Oid) {
        let deleted = self
            .store
            .status(kind, root)
            .is_none_or(|status| status.is_deleted());

        if deleted {
            self.edits.forget(root);
            return;
        }

        for field in self.store.field_values(kind, root).unwrap_or_default() {
            self.edits.receive_update(&field.oid, &field.value);
        }
    }

    /// Ends a refresh cycle: runs the retention sweep and drops the edit
    /// state of every removed record.
    pub fn refreshed(&mut self) -> SweepReport {
        let report = self.sweeper.sweep(&mut self.store);
        for oid in &report.removed {
            self.edits.forget(oid);
        }
        report
    }

    // ── Fetch ────────────────────────────────────────────────────

    /// Fetches the first page (or all) of `kind` as one refresh cycle.
    pub async fn fetch(&mut self, kind: EntityKind) -> SyncResult<SweepReport> {
        let request = FetchRequest::initial(kind, self.config.page_size);
        self.get(kind, request).await
    }

    /// Fetches the next page of a paginated kind.
    pub async fn more(&mut self, kind: EntityKind) -> SyncResult<SweepReport> {
        if !kind.is_paginated() {
            debug!("{kind} is not paginated");
            return Ok(SweepReport::default());
        }

        let request = FetchRequest::more(kind, self.store.len(kind), self.config.page_size);
        self.get(kind, request).await
    }

    pub fn more_available(&self, kind: EntityKind) -> bool {
        self.store.more_available(kind)
    }

    async fn get(&mut self, kind: EntityKind, request: FetchRequest) -> SyncResult<SweepReport> {
        let _busy = self.busy.enter();

        let response = match self.transport.fetch(&request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("fetch {request} failed: {e}");
                return Err(e);
            }
        };

        self.receive_for(&response.into_updates(), Some(kind)).await;
        Ok(self.refreshed())
    }

    // ── Edits ────────────────────────────────────────────────────

    /// User input on a rendered field.
    pub fn set(&mut self, field: &Oid, value: &str) -> bool {
        self.edits.set(field, value)
    }

    pub fn focus(&mut self, field: &Oid, focused: bool) -> bool {
        self.edits.focus(field, focused)
    }

    pub fn indicator(&self, oid: &Oid) -> DirtyIndicator {
        self.edits.indicator(oid)
    }

    /// Submits the modified fields of one entity. Returns the number of
    /// fields sent; zero (and no request) if nothing is modified.
    pub async fn commit(&mut self, kind: EntityKind, root: &Oid) -> SyncResult<usize> {
        if !self.store.contains(kind, root) {
            return Err(SyncError::UnknownEntity(root.clone()));
        }
        self.submit(kind, std::slice::from_ref(root)).await
    }

    /// Submits the modified fields of every entity of `kind`.
    pub async fn commit_all(&mut self, kind: EntityKind) -> SyncResult<usize> {
        let roots: Vec<Oid> = self
            .store
            .ordered_oids(kind)
            .into_iter()
            .filter(|root| self.edits.is_modified(root))
            .collect();
        self.submit(kind, &roots).await
    }

    async fn submit(&mut self, kind: EntityKind, roots: &[Oid]) -> SyncResult<usize> {
        let Some(pending) = self.edits.begin_commit(roots) else {
            debug!("nothing to commit for {kind}");
            return Ok(0);
        };

        let batch = CommitBatch::new(&pending.records);
        let _busy = self.busy.enter();

        match self.transport.post(kind, &batch).await {
            Ok(response) => {
                self.edits.complete_commit(&pending);
                self.receive(&response.into_updates()).await;
                info!("committed {} {kind} field(s)", pending.fields.len());
                Ok(pending.fields.len())
            }
            Err(e) => {
                self.edits.fail_commit(&pending);
                let e = match e {
                    SyncError::Transport(reason) => SyncError::Commit(reason),
                    other => other,
                };
                warn!("{e}");
                Err(e)
            }
        }
    }

    /// Asks the server to create an entity of `kind`. The new record
    /// arrives through the response.
    pub async fn create(&mut self, kind: EntityKind) -> SyncResult<Vec<Applied>> {
        let _busy = self.busy.enter();

        match self.transport.post(kind, &CommitBatch::create()).await {
            Ok(response) => {
                Ok(self.receive_for(&response.into_updates(), Some(kind)).await)
            }
            Err(e) => {
                warn!("{e}");
                Err(e)
            }
        }
    }

    /// Discards local edits of one entity. An entity that is still `new`
    /// is dropped altogether.
    pub fn rollback(&mut self, kind: EntityKind, root: &Oid) -> SyncResult<()> {
        let Some(status) = self.store.status(kind, root) else {
            return Err(SyncError::UnknownEntity(root.clone()));
        };
        let is_new = status.is_new();
        self.discard(kind, root, is_new);
        Ok(())
    }

    /// Rolls back every entity of `kind`.
    pub fn rollback_all(&mut self, kind: EntityKind) {
        for root in self.store.ordered_oids(kind).iter().rev() {
            let is_new = self.store.status(kind, root).is_some_and(|s| s.is_new());
            self.discard(kind, root, is_new);
        }
    }

    fn discard(&mut self, kind: EntityKind, root: &Oid, is_new: bool) {
        if is_new {
            self.store.remove(kind, root);
            self.edits.forget(root);
        } else {
            self.edits.revert(root);
        }
    }
}

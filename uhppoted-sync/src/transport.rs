//! Transport layer abstraction.
//!
//! The engine only needs two request shapes: a GET of a collection and a
//! POST of a commit batch. Both answer with a [`Response`] on success; a
//! non-success status maps to [`SyncError::Rejected`] and a request that
//! never settled to [`SyncError::Transport`]. No request is retried.
//!
//! [`SyncError::Rejected`]: crate::SyncError::Rejected
//! [`SyncError::Transport`]: crate::SyncError::Transport

use crate::error::SyncResult;
use crate::protocol::{CommitBatch, FetchRequest, Response};
use async_trait::async_trait;
use uhppoted_types::EntityKind;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetches one collection (or page of it).
    async fn fetch(&self, request: &FetchRequest) -> SyncResult<Response>;

    /// Posts a commit or create batch to the collection of `kind`.
    async fn post(&self, kind: EntityKind, batch: &CommitBatch) -> SyncResult<Response>;
}

/// A scripted transport for testing.
pub mod mock {
    use super::*;
    use crate::error::SyncError;
    use crate::protocol::Update;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    /// One scripted reply.
    #[derive(Debug, Clone)]
    pub enum MockReply {
        Ok(Vec<Update>),
        Rejected { status: u16, message: String },
        Unreachable(String),
    }

    impl MockReply {
        fn into_result(self) -> SyncResult<Response> {
            match self {
                MockReply::Ok(updates) => Ok(Response::new(updates)),
                MockReply::Rejected { status, message } => {
                    Err(SyncError::Rejected { status, message })
                }
                MockReply::Unreachable(reason) => Err(SyncError::Transport(reason)),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Inner {
        replies: VecDeque<MockReply>,
        fetched: Vec<FetchRequest>,
        posted: Vec<(EntityKind, CommitBatch)>,
    }

    /// Replays queued replies in order and records every request. An empty
    /// queue answers with an empty success.
    #[derive(Debug, Clone, Default)]
    pub struct MockTransport {
        inner: Arc<Mutex<Inner>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        fn lock(&self) -> MutexGuard<'_, Inner> {
            self.inner.lock().unwrap_or_else(PoisonError::into_inner)
        }

        /// Queues the next reply.
        pub fn queue(&self, reply: MockReply) {
            self.lock().replies.push_back(reply);
        }

        pub fn queue_ok(&self, updates: Vec<Update>) {
            self.queue(MockReply::Ok(updates));
        }

        pub fn fetched(&self) -> Vec<FetchRequest> {
            self.lock().fetched.clone()
        }

        pub fn posted(&self) -> Vec<(EntityKind, CommitBatch)> {
            self.lock().posted.clone()
        }

        fn next_reply(&self) -> SyncResult<Response> {
            self.lock()
                .replies
                .pop_front()
                .unwrap_or(MockReply::Ok(Vec::new()))
                .into_result()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn fetch(&self, request: &FetchRequest) -> SyncResult<Response> {
            self.lock().fetched.push(*request);
            self.next_reply()
        }

        async fn post(&self, kind: EntityKind, batch: &CommitBatch) -> SyncResult<Response> {
            self.lock().posted.push((kind, batch.clone()));
            self.next_reply()
        }
    }
}

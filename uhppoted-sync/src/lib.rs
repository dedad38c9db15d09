//! Optimistic edit and commit layer for the uhppoted object cache.
//!
//! # Components
//!
//! - **Field state**: per rendered field, the last server value, the local
//!   value and a `modified | pending | conflict` flag set
//! - **Edits**: the state machine driven by user input (`set`), inbound
//!   updates (`receive_update`) and commits (`begin` / `complete` / `fail`)
//! - **Percolation**: `none | single | multiple` dirty indicators for every
//!   ancestor of a modified field
//! - **Protocol**: inbound `system.objects` responses, outbound commit
//!   batches and the `<new>` create sentinel, fetch ranges
//! - **Transport**: the async fetch/post seam, with a scripted mock
//! - **Engine**: owns the store and the edit state and runs the fetch,
//!   render, commit and rollback flows
//!
//! # Example
//!
//! ```
//! use uhppoted_sync::{CacheConfig, CacheEngine, transport::mock::MockTransport};
//!
//! let config = CacheConfig {
//!     retention_cycles: 10,
//!     ..Default::default()
//! };
//!
//! let engine = CacheEngine::with_config(MockTransport::new(), config);
//! assert!(!engine.busy().is_busy());
//! ```

mod busy;
mod config;
pub mod edits;
mod engine;
mod error;
pub mod field;
pub mod percolate;
pub mod protocol;
pub mod transport;

pub use busy::{BusyCounter, BusyGuard};
pub use config::{CacheConfig, ChunkSizes, DEFAULT_PAGE_SIZE};
pub use edits::{EditState, PendingCommit};
pub use engine::CacheEngine;
pub use error::{SyncError, SyncResult};
pub use field::{FieldFlags, FieldState};
pub use percolate::{DirtyIndicator, Percolator, aggregate};
pub use protocol::{
    CommitBatch, FetchRange, FetchRequest, NEW_SENTINEL, OutboundRecord, Response, SystemObjects,
    Update, collection_path,
};
pub use transport::Transport;

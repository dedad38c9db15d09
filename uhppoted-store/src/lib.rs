//! In-memory entity store for the uhppoted object cache.
//!
//! Mirrors the server's object tree as one table per [`EntityKind`]:
//!
//! - **Router** classifies an inbound path by prefix and splits it into
//!   entity root + field suffix.
//! - **Tables** hold the typed records, keyed by entity root OID.
//! - **Cursors** hold the `first`/`last` markers of the paginated tables.
//! - **Retention** runs once per refresh cycle: every record's mark is
//!   bumped, then tombstones past the threshold are removed.
//!
//! # Example
//!
//! ```
//! use uhppoted_store::Store;
//!
//! let mut store = Store::new();
//! store.apply("0.3.1", "new");
//! store.apply("0.3.1.1", "Alice");
//!
//! let card = store.cards.get(&"0.3.1".parse().unwrap()).unwrap();
//! assert_eq!(card.name, "Alice");
//! ```
//!
//! [`EntityKind`]: uhppoted_types::EntityKind

mod retention;
mod router;
mod store;
mod table;

pub use retention::{DEFAULT_RETENTION_CYCLES, RetentionSweeper, SweepReport};
pub use router::{CursorEnd, Route, route};
pub use store::{Applied, Store};
pub use table::{Cursor, RecordTable, Table};

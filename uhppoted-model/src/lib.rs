//! Entity model for the uhppoted object cache.
//!
//! Defines the typed records mirrored from the server and the tables that
//! decode `(path, value)` updates into them:
//! - [`Record`]: common behaviour of every cached entity (status, mark, decode)
//! - [`FieldSpec`]: one `(suffix, field-writer)` entry of a decode table
//! - [`Membership`]: sub-collections addressed by a further OID segment
//!   (card → group, group → door)
//!
//! Decoding is deliberately permissive: an unrecognised suffix is not an
//! error, it simply does not land on the record.

mod card;
mod controller;
mod door;
mod event;
mod group;
mod interface;
mod log_entry;
mod membership;
mod record;

pub use card::{Card, CardGroup};
pub use controller::{Controller, Reconciled, Tracked};
pub use door::{Door, DoorSetting};
pub use event::Event;
pub use group::{Group, GroupDoor};
pub use interface::Interface;
pub use log_entry::{LogEntry, LogModule};
pub use membership::{Member, Membership};
pub use record::{FieldSpec, FieldValue, Record, RecordHeader, parse_index};

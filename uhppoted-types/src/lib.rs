//! Core type definitions for the uhppoted object cache.
//!
//! This crate defines the fundamental types shared by the decoder, the
//! entity store and the edit-state machine:
//! - [`Oid`] hierarchical object identifiers (`0.3.7.5.2`)
//! - [`EntityKind`] the fixed set of object kinds and their OID prefixes
//! - [`Status`] the free-text lifecycle tag carried by every record

mod kind;
mod oid;
mod status;

pub use kind::EntityKind;
pub use oid::{Ancestors, Oid};
pub use status::Status;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid OID: {0:?}")]
    InvalidOid(String),
}

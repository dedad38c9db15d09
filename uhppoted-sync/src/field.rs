use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use uhppoted_types::Oid;

bitflags! {
    /// Edit flags of one displayed field. `CONFLICT` overlays either of
    /// the other two.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FieldFlags: u8 {
        /// Changed locally, not yet submitted.
        const MODIFIED = 1 << 0;
        /// Submitted, awaiting the commit response.
        const PENDING  = 1 << 1;
        /// The server moved independently of an unsubmitted or
        /// unacknowledged local change.
        const CONFLICT = 1 << 2;
    }
}

/// Edit state of one displayed field, keyed by the field's OID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    pub oid: Oid,
    /// Last value received from the server.
    pub original: String,
    /// Value currently held locally.
    pub value: String,
    pub flags: FieldFlags,
    /// Under active user input.
    pub focused: bool,
}

impl FieldState {
    /// A clean field showing `value`.
    pub fn new(oid: Oid, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            oid,
            original: value.clone(),
            value,
            flags: FieldFlags::empty(),
            focused: false,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.flags.contains(FieldFlags::MODIFIED)
    }

    pub fn is_pending(&self) -> bool {
        self.flags.contains(FieldFlags::PENDING)
    }

    pub fn is_conflicted(&self) -> bool {
        self.flags.contains(FieldFlags::CONFLICT)
    }

    /// Reconciles `MODIFIED` against `original`.
    pub(crate) fn reconcile(&mut self) {
        let modified = self.value != self.original;
        self.flags.set(FieldFlags::MODIFIED, modified);
        if !modified {
            self.flags.remove(FieldFlags::CONFLICT);
        }
    }

    /// True when `server` diverges from both the last known server value
    /// and the local value.
    pub(crate) fn diverges(&self, previous: &str, server: &str) -> bool {
        previous != server && self.value != server
    }
}

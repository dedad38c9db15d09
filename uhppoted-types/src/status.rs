use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle tag carried by every cached record.
///
/// The server assigns arbitrary tags; only `unknown`, `new` and `deleted`
/// carry meaning for the cache itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Unknown,
    /// Created locally or by the server but not yet owned by it.
    New,
    /// Tombstone awaiting the retention sweep.
    Deleted,
    /// Any other server-assigned tag.
    Other(String),
}

impl Status {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Status::Unknown => "unknown",
            Status::New => "new",
            Status::Deleted => "deleted",
            Status::Other(s) => s,
        }
    }

    #[must_use]
    pub fn is_new(&self) -> bool {
        matches!(self, Status::New)
    }

    #[must_use]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Status::Deleted)
    }
}

impl From<&str> for Status {
    fn from(s: &str) -> Self {
        match s {
            "unknown" => Status::Unknown,
            "new" => Status::New,
            "deleted" => Status::Deleted,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(s: String) -> Self {
        match s.as_str() {
            "unknown" | "new" | "deleted" => Status::from(s.as_str()),
            _ => Status::Other(s),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

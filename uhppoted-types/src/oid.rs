//! Hierarchical object identifiers.
//!
//! An OID is an ordered sequence of integers rendered as dot-separated text,
//! e.g. `0.3.7`. Prefix relations are segment-aware: `0.3.10` is *not* a
//! descendant of `0.3.1`.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dot-separated object identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Oid(Vec<u32>);

impl Oid {
    /// Creates an OID from its segments.
    #[must_use]
    pub fn from_segments(segments: impl Into<Vec<u32>>) -> Self {
        Self(segments.into())
    }

    /// Parses an OID from its dotted text form.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::InvalidOid(s.to_string()));
        }

        s.split('.')
            .map(|segment| {
                if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(Error::InvalidOid(s.to_string()));
                }
                segment
                    .parse::<u32>()
                    .map_err(|_| Error::InvalidOid(s.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    /// Returns the segments of this OID.
    #[must_use]
    pub fn segments(&self) -> &[u32] {
        &self.0
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the last segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.0.last().copied()
    }

    /// Returns this OID with the last segment removed, or `None` for a
    /// single-segment OID.
    #[must_use]
    pub fn parent(&self) -> Option<Oid> {
        if self.0.len() > 1 {
            Some(Self(self.0[..self.0.len() - 1].to_vec()))
        } else {
            None
        }
    }

    /// Iterates the strict ancestors of this OID, nearest first.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            segments: &self.0,
            depth: self.0.len(),
        }
    }

    /// Returns a new OID with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: u32) -> Oid {
        let mut segments = self.0.clone();
        segments.push(segment);
        Self(segments)
    }

    /// Returns a new OID with `suffix` appended.
    #[must_use]
    pub fn join(&self, suffix: &[u32]) -> Oid {
        let mut segments = Vec::with_capacity(self.0.len() + suffix.len());
        segments.extend_from_slice(&self.0);
        segments.extend_from_slice(suffix);
        Self(segments)
    }

    /// Returns the first `depth` segments, or `None` if this OID is shorter.
    #[must_use]
    pub fn truncate(&self, depth: usize) -> Option<Oid> {
        (depth <= self.0.len()).then(|| Self(self.0[..depth].to_vec()))
    }

    /// Returns true if `prefix` is a (not necessarily proper) segment prefix.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u32]) -> bool {
        self.0.starts_with(prefix)
    }

    /// Returns true if this OID is a proper descendant of `other`.
    #[must_use]
    pub fn is_descendant_of(&self, other: &Oid) -> bool {
        self.0.len() > other.0.len() && self.0.starts_with(&other.0)
    }

    /// Returns the segments following `root`, or `None` if `root` is not a
    /// prefix. The result is empty when `self == root`.
    #[must_use]
    pub fn suffix_after(&self, root: &Oid) -> Option<&[u32]> {
        self.0.strip_prefix(root.0.as_slice())
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.0 {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Oid {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Oid> for String {
    fn from(oid: Oid) -> Self {
        oid.to_string()
    }
}

/// Iterator over the strict ancestors of an [`Oid`], nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    segments: &'a [u32],
    depth: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = Oid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.depth <= 1 {
            return None;
        }
        self.depth -= 1;
        Some(Oid(self.segments[..self.depth].to_vec()))
    }
}

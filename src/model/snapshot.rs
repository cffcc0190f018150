//! Serializable views of a conflator for hand-off to a transport.
//!
//! A delta snapshot carries only the dirty keys (what `items()` yields), a
//! full snapshot carries every stored key (what `data()` yields) and is what a
//! late-joining consumer should be painted with first.

use serde::{Deserialize, Serialize};

use crate::error::ConflateError;

/// Which read path produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    /// Dirty keys only
    Delta,
    /// All stored keys
    Full,
}

/// Owned `(key, value)` pairs taken from a conflator at one point in time.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Snapshot<K, O> {
    /// Conflator display name
    pub source: String,
    pub kind: SnapshotKind,
    pub entries: Vec<(K, O)>,
}

impl<K, O> Snapshot<K, O> {
    pub fn new(source: impl Into<String>, kind: SnapshotKind, entries: Vec<(K, O)>) -> Self {
        Self {
            source: source.into(),
            kind,
            entries,
        }
    }

    /// Number of entries carried.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if this snapshot only carries changed keys.
    pub fn is_delta(&self) -> bool {
        self.kind == SnapshotKind::Delta
    }
}

impl<K: Serialize, O: Serialize> Snapshot<K, O> {
    /// Encode as a JSON string.
    pub fn to_json(&self) -> Result<String, ConflateError> {
        Ok(serde_json::to_string(self)?)
    }
}

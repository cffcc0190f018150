//! Insertion-ordered set of keys touched since the last reset.

use std::collections::HashSet;
use std::hash::Hash;

/// Ordered set with O(1) membership.
///
/// Re-inserting a key that is already present keeps its original position,
/// so iteration yields keys in first-dirty-since-reset order.
#[derive(Debug, Clone)]
pub struct DirtySet<K> {
    /// Membership lookup
    members: HashSet<K>,
    /// Iteration order
    order: Vec<K>,
}

impl<K: Eq + Hash + Clone> DirtySet<K> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Mark a key dirty. Returns true if it was not dirty before.
    pub fn insert(&mut self, key: &K) -> bool {
        if self.members.contains(key) {
            return false;
        }
        self.members.insert(key.clone());
        self.order.push(key.clone());
        true
    }

    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Drop a single key. O(n) in the number of dirty keys.
    pub fn remove(&mut self, key: &K) -> bool {
        if !self.members.remove(key) {
            return false;
        }
        self.order.retain(|k| k != key);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, K> {
        self.order.iter()
    }

    pub fn clear(&mut self) {
        self.members.clear();
        self.order.clear();
    }
}

impl<K: Eq + Hash + Clone> Default for DirtySet<K> {
    fn default() -> Self {
        Self::new()
    }
}

use std::collections::HashMap;
use std::hash::Hash;

use super::ReductionPolicy;
use crate::error::ConflateError;

/// Most frequently observed value per key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mode;

/// Frequency table for a key, remembering first-observed order.
#[derive(Debug, Clone)]
pub struct ModeState<V> {
    counts: HashMap<V, u64>,
    /// Distinct values in first-observed order, never empty
    order: Vec<V>,
}

impl<V: Eq + Hash + Clone> ModeState<V> {
    fn new(first: V) -> Self {
        let mut counts = HashMap::new();
        counts.insert(first.clone(), 1);
        Self {
            counts,
            order: vec![first],
        }
    }

    fn observe(&mut self, value: V) {
        match self.counts.get_mut(&value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.clone(), 1);
                self.order.push(value);
            }
        }
    }

    /// How many times `value` was observed.
    pub fn count(&self, value: &V) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// Number of distinct values observed.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Most frequent value and its count. Ties go to the value seen first.
    pub fn most_common(&self) -> (&V, u64) {
        let mut best = (&self.order[0], self.count(&self.order[0]));
        for value in &self.order[1..] {
            let count = self.count(value);
            if count > best.1 {
                best = (value, count);
            }
        }
        best
    }
}

impl<V: Eq + Hash + Clone> ReductionPolicy<V> for Mode {
    type State = ModeState<V>;
    type Output = V;

    const NAME: &'static str = "ModeConflator";

    fn init(&self, incoming: V) -> Result<ModeState<V>, ConflateError> {
        Ok(ModeState::new(incoming))
    }

    fn fold(&self, state: &mut ModeState<V>, incoming: V) -> Result<(), ConflateError> {
        state.observe(incoming);
        Ok(())
    }

    fn read(&self, state: &ModeState<V>) -> V {
        state.most_common().0.clone()
    }
}

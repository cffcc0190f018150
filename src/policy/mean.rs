use serde::{Deserialize, Serialize};

use super::ReductionPolicy;
use crate::error::ConflateError;

/// Running arithmetic mean per key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

/// Running sum and count for a key.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
pub struct MeanState {
    pub sum: f64,
    pub count: u64,
}

impl MeanState {
    /// Current mean, `NaN` for an empty state.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

impl<V: Into<f64>> ReductionPolicy<V> for Mean {
    type State = MeanState;
    type Output = f64;

    const NAME: &'static str = "MeanConflator";
    const RESTART_ON_RESET: bool = true;

    fn init(&self, incoming: V) -> Result<MeanState, ConflateError> {
        let mut state = MeanState::default();
        state.push(incoming.into());
        Ok(state)
    }

    fn fold(&self, state: &mut MeanState, incoming: V) -> Result<(), ConflateError> {
        state.push(incoming.into());
        Ok(())
    }

    fn read(&self, state: &MeanState) -> f64 {
        state.mean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean_of(values: &[i32]) -> f64 {
        let policy = Mean;
        let mut state = policy.init(values[0]).unwrap();
        for v in &values[1..] {
            policy.fold(&mut state, *v).unwrap();
        }
        <Mean as ReductionPolicy<i32>>::read(&policy, &state)
    }

    #[test]
    fn test_mean() {
        assert!((mean_of(&[1, 2, 3, 4]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_order_independent() {
        let forward = mean_of(&[3, 9, -4, 10, 7]);
        let backward = mean_of(&[7, 10, -4, 9, 3]);
        assert!((forward - backward).abs() < 1e-12);
        assert!((forward - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_state_counts() {
        let policy = Mean;
        let mut state = policy.init(2.0f32).unwrap();
        policy.fold(&mut state, 4.0f32).unwrap();
        assert_eq!(state, MeanState { sum: 6.0, count: 2 });
    }
}

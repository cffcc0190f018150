use super::ReductionPolicy;
use crate::error::ConflateError;
use crate::model::ohlc::Ohlc;

/// Open/high/low/close bar per key.
///
/// Open is fixed by the first value of the window, close always tracks the
/// latest value. Incomparable values (e.g. NaN) only move close. A NaN
/// opening a window pins high and low to NaN until the next `clear()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OhlcPolicy;

impl<V: PartialOrd + Clone> ReductionPolicy<V> for OhlcPolicy {
    type State = Ohlc<V>;
    type Output = Ohlc<V>;

    const NAME: &'static str = "OHLCConflator";

    fn init(&self, incoming: V) -> Result<Ohlc<V>, ConflateError> {
        Ok(Ohlc::flat(incoming))
    }

    fn fold(&self, state: &mut Ohlc<V>, incoming: V) -> Result<(), ConflateError> {
        if incoming > state.high {
            // New high and new close
            state.high = incoming.clone();
        } else if incoming < state.low {
            // New low and new close
            state.low = incoming.clone();
        }
        state.close = incoming;
        Ok(())
    }

    fn read(&self, state: &Ohlc<V>) -> Ohlc<V> {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(values: &[i64]) -> Ohlc<i64> {
        let policy = OhlcPolicy;
        let mut state = policy.init(values[0]).unwrap();
        for v in &values[1..] {
            policy.fold(&mut state, *v).unwrap();
        }
        policy.read(&state)
    }

    #[test]
    fn test_ramp() {
        assert_eq!(bar(&[0, 1, 2, 3, 4]).into_tuple(), (0, 4, 0, 4));
    }

    #[test]
    fn test_new_high() {
        assert_eq!(bar(&[0, 1, 2, 3, 4, 5]).into_tuple(), (0, 5, 0, 5));
    }

    #[test]
    fn test_new_low() {
        assert_eq!(bar(&[0, 1, 2, 3, 4, -1]).into_tuple(), (0, 4, -1, -1));
    }

    #[test]
    fn test_new_close_inside_range() {
        assert_eq!(bar(&[0, 1, 2, 3, 4, 2]).into_tuple(), (0, 4, 0, 2));
    }

    #[test]
    fn test_nan_open_pins_range() {
        let policy = OhlcPolicy;
        let mut state = policy.init(f64::NAN).unwrap();
        policy.fold(&mut state, 3.0).unwrap();
        policy.fold(&mut state, -1.0).unwrap();

        assert!(state.open.is_nan());
        assert!(state.high.is_nan());
        assert!(state.low.is_nan());
        assert_eq!(state.close, -1.0);
    }

    #[test]
    fn test_bounds_hold_after_every_update() {
        // Deterministic pseudo-random walk
        let policy = OhlcPolicy;
        let mut seed: i64 = 17;
        let mut state = policy.init(seed).unwrap();
        for _ in 0..500 {
            seed = (seed * 1_103_515_245 + 12_345) % 65_536 - 32_768;
            policy.fold(&mut state, seed).unwrap();

            assert!(state.low <= state.open && state.open <= state.high);
            assert!(state.low <= state.close && state.close <= state.high);
            assert!(state.low <= state.high);
        }
    }
}

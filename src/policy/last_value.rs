use super::ReductionPolicy;
use crate::error::ConflateError;

/// Latest value wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastValue;

impl<V: Clone> ReductionPolicy<V> for LastValue {
    type State = V;
    type Output = V;

    const NAME: &'static str = "Conflator";

    #[inline]
    fn init(&self, incoming: V) -> Result<V, ConflateError> {
        Ok(incoming)
    }

    #[inline]
    fn fold(&self, state: &mut V, incoming: V) -> Result<(), ConflateError> {
        *state = incoming;
        Ok(())
    }

    #[inline]
    fn read(&self, state: &V) -> V {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite() {
        let policy = LastValue;
        let mut state = policy.init(1).unwrap();
        policy.fold(&mut state, 2).unwrap();
        policy.fold(&mut state, 3).unwrap();
        assert_eq!(policy.read(&state), 3);
    }
}

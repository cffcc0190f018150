use super::ReductionPolicy;
use crate::error::ConflateError;

/// Keeps every value of the window, in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Batch;

impl<V: Clone> ReductionPolicy<V> for Batch {
    type State = Vec<V>;
    type Output = Vec<V>;

    const NAME: &'static str = "BatchConflator";
    const RESTART_ON_RESET: bool = true;

    fn init(&self, incoming: V) -> Result<Vec<V>, ConflateError> {
        Ok(vec![incoming])
    }

    fn fold(&self, state: &mut Vec<V>, incoming: V) -> Result<(), ConflateError> {
        state.push(incoming);
        Ok(())
    }

    fn read(&self, state: &Vec<V>) -> Vec<V> {
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_in_order() {
        let policy = Batch;
        let mut state = policy.init("a").unwrap();
        policy.fold(&mut state, "b").unwrap();
        policy.fold(&mut state, "a").unwrap();
        assert_eq!(policy.read(&state), vec!["a", "b", "a"]);
    }
}

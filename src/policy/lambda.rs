use super::ReductionPolicy;
use crate::error::{ConflateError, PolicyError};

type LambdaFn<V, C> = Box<dyn Fn(&V, &[V]) -> Result<C, PolicyError> + Send + Sync>;

/// Caller-supplied fold `f(new_value, past_values) -> conflated`.
///
/// `past_values` holds every value seen for the key since its window started,
/// excluding `new_value`. This is the only policy that keeps raw history.
pub struct Lambda<V, C> {
    f: LambdaFn<V, C>,
}

/// Conflated value plus the raw history fed to the next call.
#[derive(Debug, Clone)]
pub struct LambdaState<V, C> {
    pub value: C,
    pub history: Vec<V>,
}

impl<V, C> Lambda<V, C> {
    /// Wrap an infallible conflation function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&V, &[V]) -> C + Send + Sync + 'static,
    {
        let f: LambdaFn<V, C> = Box::new(move |value: &V, past: &[V]| Ok(f(value, past)));
        Self { f }
    }

    /// Wrap a conflation function that may fail. Its error is handed back
    /// from `set()` as [`ConflateError::Policy`].
    pub fn try_new<F, E>(f: F) -> Self
    where
        F: Fn(&V, &[V]) -> Result<C, E> + Send + Sync + 'static,
        E: Into<PolicyError>,
    {
        let f: LambdaFn<V, C> =
            Box::new(move |value: &V, past: &[V]| f(value, past).map_err(Into::into));
        Self { f }
    }

    fn call(&self, value: &V, past: &[V]) -> Result<C, ConflateError> {
        (self.f)(value, past).map_err(ConflateError::policy)
    }
}

impl<V: Clone + 'static> Default for Lambda<V, V> {
    /// Behaves like last-value.
    fn default() -> Self {
        Self::new(|value: &V, _: &[V]| value.clone())
    }
}

impl<V, C> std::fmt::Debug for Lambda<V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lambda").finish_non_exhaustive()
    }
}

impl<V, C: Clone> ReductionPolicy<V> for Lambda<V, C> {
    type State = LambdaState<V, C>;
    type Output = C;

    const NAME: &'static str = "LambdaConflator";
    const RESTART_ON_RESET: bool = true;

    fn init(&self, incoming: V) -> Result<LambdaState<V, C>, ConflateError> {
        let value = self.call(&incoming, &[])?;
        Ok(LambdaState {
            value,
            history: vec![incoming],
        })
    }

    fn fold(&self, state: &mut LambdaState<V, C>, incoming: V) -> Result<(), ConflateError> {
        // Nothing is written until the user function succeeds
        let value = self.call(&incoming, &state.history)?;
        state.value = value;
        state.history.push(incoming);
        Ok(())
    }

    fn read(&self, state: &LambdaState<V, C>) -> C {
        state.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sees_past_values() {
        let policy = Lambda::new(|v: &i32, past: &[i32]| v + past.iter().sum::<i32>());
        let mut state = policy.init(1).unwrap();
        assert_eq!(policy.read(&state), 1);

        policy.fold(&mut state, 2).unwrap();
        policy.fold(&mut state, 3).unwrap();
        assert_eq!(policy.read(&state), 6);
        assert_eq!(state.history, vec![1, 2, 3]);
    }

    #[test]
    fn test_default_is_last_value() {
        let policy: Lambda<&str, &str> = Lambda::default();
        let mut state = policy.init("a").unwrap();
        policy.fold(&mut state, "b").unwrap();
        assert_eq!(policy.read(&state), "b");
    }

    #[test]
    fn test_failure_leaves_state() {
        let policy = Lambda::try_new(|v: &i32, past: &[i32]| {
            if *v < 0 {
                Err(format!("negative input {}", v))
            } else {
                Ok(past.len() as i32 + 1)
            }
        });
        let mut state = policy.init(5).unwrap();

        let err = policy.fold(&mut state, -1).unwrap_err();
        assert!(matches!(err, ConflateError::Policy(_)));
        assert!(err.to_string().contains("negative input -1"));
        assert_eq!(state.value, 1);
        assert_eq!(state.history, vec![5]);
    }
}

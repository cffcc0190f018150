//! The Conflator shell shared by every conflation variant.
//!
//! It owns the value store and the dirty set and delegates the value
//! combination step to a [`ReductionPolicy`]:
//! - `set` folds a value into the key's state and marks the key dirty
//! - `items` reads dirty keys only, `data` reads everything
//! - `reset` drops dirtiness, `clear` drops everything

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::error::{ConflateError, PolicyError};
use crate::model::snapshot::{Snapshot, SnapshotKind};
use crate::policy::{Batch, Lambda, LastValue, Mean, Mode, OhlcPolicy, ReductionPolicy};

use super::config::{ConflatorConfig, Window};
use super::dirty::DirtySet;

/// Latest value wins.
pub type LastValueConflator<K, V> = Conflator<K, V, LastValue>;
/// Open/high/low/close per key.
pub type OhlcConflator<K, V> = Conflator<K, V, OhlcPolicy>;
/// Running mean per key.
pub type MeanConflator<K, V = f64> = Conflator<K, V, Mean>;
/// Most frequent value per key.
pub type ModeConflator<K, V> = Conflator<K, V, Mode>;
/// Every value of the window per key.
pub type BatchConflator<K, V> = Conflator<K, V, Batch>;
/// User-supplied fold per key.
pub type LambdaConflator<K, V, C> = Conflator<K, V, Lambda<V, C>>;

/// Map-like container that conflates repeated updates to the same key.
///
/// Single-threaded: callers that produce and drain from different threads
/// must serialize access themselves.
pub struct Conflator<K, V, P: ReductionPolicy<V>> {
    /// Authoritative state per key
    values: HashMap<K, P::State>,
    /// Keys touched since the last reset, in first-touch order
    dirty: DirtySet<K>,
    policy: P,
    config: ConflatorConfig,
    _input: PhantomData<fn(V)>,
}

impl<K, V, P> Conflator<K, V, P>
where
    K: Eq + Hash + Clone,
    P: ReductionPolicy<V>,
{
    /// Create a new Conflator with default configuration.
    pub fn new() -> Self
    where
        P: Default,
    {
        Self::with_policy(P::default())
    }

    /// Create a new Conflator with custom configuration.
    pub fn with_config(config: ConflatorConfig) -> Self
    where
        P: Default,
    {
        Self::with_policy_and_config(P::default(), config)
    }

    /// Create a new Conflator around an explicit policy value.
    pub fn with_policy(policy: P) -> Self {
        Self::with_policy_and_config(policy, ConflatorConfig::default())
    }

    /// Create a new Conflator around an explicit policy and configuration.
    pub fn with_policy_and_config(policy: P, config: ConflatorConfig) -> Self {
        debug!(
            "Conflator {} created (window: {}, capacity: {})",
            config.name.as_deref().unwrap_or(P::NAME),
            config.window,
            config.initial_capacity
        );

        Self {
            values: HashMap::with_capacity(config.initial_capacity),
            dirty: DirtySet::with_capacity(config.initial_capacity),
            policy,
            config,
            _input: PhantomData,
        }
    }

    /// Display name: configured name or the policy default.
    pub fn name(&self) -> &str {
        self.config.name.as_deref().unwrap_or(P::NAME)
    }

    /// Get the reduction policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Get the configuration.
    pub fn config(&self) -> &ConflatorConfig {
        &self.config
    }

    /// Fold `value` into the state for `key` and mark `key` dirty.
    ///
    /// A policy error is returned as-is and nothing is modified.
    pub fn set(&mut self, key: K, value: V) -> Result<(), ConflateError> {
        // Under per-interval windows a clean key starts a fresh aggregate
        let restart = P::RESTART_ON_RESET
            && self.config.window == Window::UntilReset
            && !self.dirty.contains(&key);

        if !restart {
            if let Some(state) = self.values.get_mut(&key) {
                self.policy.fold(state, value)?;
                self.dirty.insert(&key);
                return Ok(());
            }
        }

        let state = self.policy.init(value)?;
        self.dirty.insert(&key);
        self.values.insert(key, state);
        Ok(())
    }

    /// Raw stored state for `key`, dirty or not.
    pub fn state(&self, key: &K) -> Option<&P::State> {
        self.values.get(key)
    }

    /// Dirty `(key, value)` pairs in first-dirty order.
    pub fn items(&self) -> impl Iterator<Item = (&K, P::Output)> + '_ {
        self.dirty.iter().filter_map(move |key| {
            self.values
                .get(key)
                .map(|state| (key, self.policy.read(state)))
        })
    }

    /// Dirty keys in first-dirty order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.dirty.iter()
    }

    /// Dirty values in first-dirty order.
    pub fn values(&self) -> impl Iterator<Item = P::Output> + '_ {
        self.items().map(|(_, value)| value)
    }

    /// Every stored `(key, value)` pair regardless of dirtiness.
    pub fn data(&self) -> impl Iterator<Item = (&K, P::Output)> + '_ {
        self.values
            .iter()
            .map(move |(key, state)| (key, self.policy.read(state)))
    }

    /// Number of dirty keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    /// Check if no key is dirty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Number of stored keys.
    #[inline]
    pub fn entries(&self) -> usize {
        self.values.len()
    }

    /// Check if `key` changed since the last reset.
    #[inline]
    pub fn is_dirty(&self, key: &K) -> bool {
        self.dirty.contains(key)
    }

    /// Check if `key` has a stored value.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.values.contains_key(key)
    }

    /// Forget which keys are dirty. Stored values are kept.
    pub fn reset(&mut self) {
        if self.config.trace_cycles {
            trace!("{} reset, {} dirty keys dropped", self.name(), self.dirty.len());
        }
        self.dirty.clear();
    }

    /// Remove every stored value and dirty flag.
    pub fn clear(&mut self) {
        if self.config.trace_cycles {
            trace!("{} cleared, {} entries dropped", self.name(), self.values.len());
        }
        self.dirty.clear();
        self.values.clear();
    }

    /// Take the dirty pairs and reset, in one step.
    pub fn flush(&mut self) -> Vec<(K, P::Output)> {
        let flushed: Vec<_> = self
            .items()
            .map(|(key, value)| (key.clone(), value))
            .collect();

        if self.config.trace_cycles && !flushed.is_empty() {
            trace!("Flushed {} entries from {}", flushed.len(), self.name());
        }

        self.dirty.clear();
        flushed
    }

    /// Delta view (`items()`) as an owned snapshot.
    pub fn delta_snapshot(&self) -> Snapshot<K, P::Output> {
        let entries = self.items().map(|(k, v)| (k.clone(), v)).collect();
        Snapshot::new(self.name(), SnapshotKind::Delta, entries)
    }

    /// Full view (`data()`) as an owned snapshot, for initial paint.
    pub fn full_snapshot(&self) -> Snapshot<K, P::Output> {
        let entries = self.data().map(|(k, v)| (k.clone(), v)).collect();
        Snapshot::new(self.name(), SnapshotKind::Full, entries)
    }
}

impl<K, V, P> Conflator<K, V, P>
where
    K: Eq + Hash + Clone + Debug,
    P: ReductionPolicy<V>,
{
    /// Current value for `key`, dirty or not.
    pub fn get(&self, key: &K) -> Result<P::Output, ConflateError> {
        self.values
            .get(key)
            .map(|state| self.policy.read(state))
            .ok_or_else(|| ConflateError::key_not_found(key))
    }

    /// Remove a single key's value and dirty flag.
    pub fn remove(&mut self, key: &K) -> Result<P::Output, ConflateError> {
        let state = self
            .values
            .remove(key)
            .ok_or_else(|| ConflateError::key_not_found(key))?;
        self.dirty.remove(key);
        Ok(self.policy.read(&state))
    }
}

impl<K, V, C> Conflator<K, V, Lambda<V, C>>
where
    K: Eq + Hash + Clone,
    C: Clone,
{
    /// Conflate with an infallible `f(new_value, past_values)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&V, &[V]) -> C + Send + Sync + 'static,
    {
        Self::with_policy(Lambda::new(f))
    }

    /// Conflate with a fallible `f(new_value, past_values)`.
    pub fn try_from_fn<F, E>(f: F) -> Self
    where
        F: Fn(&V, &[V]) -> Result<C, E> + Send + Sync + 'static,
        E: Into<PolicyError>,
    {
        Self::with_policy(Lambda::try_new(f))
    }
}

impl<K, V, P> Default for Conflator<K, V, P>
where
    K: Eq + Hash + Clone,
    P: ReductionPolicy<V> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, P> std::fmt::Display for Conflator<K, V, P>
where
    K: Eq + Hash + Clone,
    P: ReductionPolicy<V>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<{} dirty:{} entries:{}>",
            self.name(),
            self.dirty.len(),
            self.values.len()
        )
    }
}

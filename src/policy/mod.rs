//! Reduction policies: how a new value folds into a key's stored state.
//!
//! Every policy is a small combinator with two write steps and one read
//! projection:
//! - `init` builds the state from the first value of a window
//! - `fold` merges a later value into the existing state
//! - `read` projects the state to what consumers see
//!
//! `fold` must leave the state untouched when it returns an error, so a
//! failed `set()` is never partially applied.

mod batch;
mod lambda;
mod last_value;
mod mean;
mod mode;
mod ohlc;

pub use batch::Batch;
pub use lambda::{Lambda, LambdaState};
pub use last_value::LastValue;
pub use mean::{Mean, MeanState};
pub use mode::{Mode, ModeState};
pub use ohlc::OhlcPolicy;

use crate::error::ConflateError;

/// Shared capability of all conflation variants.
pub trait ReductionPolicy<V> {
    /// What the value store keeps per key.
    type State;
    /// What `get`/`items`/`data` hand out.
    type Output;

    /// Default container name used by `Display`.
    const NAME: &'static str;

    /// Whether a per-interval window restarts this aggregate after `reset()`.
    /// OHLC and Mode keep accumulating until `clear()` regardless.
    const RESTART_ON_RESET: bool = false;

    /// Build the state for the first value of a window.
    fn init(&self, incoming: V) -> Result<Self::State, ConflateError>;

    /// Merge a value into an existing state.
    fn fold(&self, state: &mut Self::State, incoming: V) -> Result<(), ConflateError>;

    /// Project the stored state to the exposed value.
    fn read(&self, state: &Self::State) -> Self::Output;
}

//! Conflation containers
//!
//! A conflator sits between a high-rate producer of `(key, value)` updates and
//! a slower consumer. Repeated updates to a key fold into one conflated value,
//! only keys changed since the last read are reported, and the full current
//! state stays available for late joiners.
//!
//! # Read/drain cycle
//!
//! - `set()` folds a value in and marks the key dirty
//! - `items()` reads dirty keys, `data()` reads every stored key
//! - `reset()` forgets dirtiness, `clear()` forgets everything
//!
//! # Example
//!
//! ```
//! use conflator::LastValueConflator;
//!
//! let mut prices = LastValueConflator::new();
//! prices.set("BTC/USD", 50_000).unwrap();
//! prices.set("ETH/USD", 3_000).unwrap();
//! prices.set("BTC/USD", 50_100).unwrap();
//!
//! let delta: Vec<_> = prices.items().map(|(k, v)| (*k, v)).collect();
//! assert_eq!(delta, vec![("BTC/USD", 50_100), ("ETH/USD", 3_000)]);
//!
//! prices.reset();
//! assert_eq!(prices.len(), 0);
//! assert_eq!(prices.data().count(), 2);
//! ```

pub mod config;
pub mod conflator;
pub mod dirty;

pub use config::{ConflatorConfig, ConflatorConfigBuilder, Window};
pub use conflator::{
    BatchConflator, Conflator, LambdaConflator, LastValueConflator, MeanConflator,
    ModeConflator, OhlcConflator,
};
pub use dirty::DirtySet;

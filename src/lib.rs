pub mod conflation;
mod error;
pub mod model;
pub mod policy;

pub use conflation::{
    BatchConflator, Conflator, ConflatorConfig, LambdaConflator, LastValueConflator,
    MeanConflator, ModeConflator, OhlcConflator, Window,
};
pub use error::{ConflateError, PolicyError};
pub use model::ohlc::Ohlc;
pub use model::snapshot::{Snapshot, SnapshotKind};
pub use policy::ReductionPolicy;

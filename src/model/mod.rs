pub mod ohlc;
pub mod snapshot;

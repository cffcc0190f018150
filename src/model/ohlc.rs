use serde::{Deserialize, Serialize};

/// Open, high, low and close of the values seen in one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Ohlc<T> {
    pub open: T,
    pub high: T,
    pub low: T,
    pub close: T,
}

impl<T: Clone> Ohlc<T> {
    /// First observation of a window: all four fields equal.
    pub fn flat(value: T) -> Self {
        Self {
            open: value.clone(),
            high: value.clone(),
            low: value.clone(),
            close: value,
        }
    }

    /// `(open, high, low, close)` tuple, handy for pattern matching.
    pub fn into_tuple(self) -> (T, T, T, T) {
        (self.open, self.high, self.low, self.close)
    }
}

impl<T> From<(T, T, T, T)> for Ohlc<T> {
    fn from((open, high, low, close): (T, T, T, T)) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

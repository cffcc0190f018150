use thiserror::Error;

/// Boxed failure raised from inside a user-supplied reduction function.
pub type PolicyError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ConflateError {
    #[error("{0} not found in conflator")]
    KeyNotFound(String),

    #[error("Reduction policy failed: {0}")]
    Policy(#[source] PolicyError),

    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConflateError {
    /// Build a `KeyNotFound` from any debuggable key.
    pub(crate) fn key_not_found<K: std::fmt::Debug>(key: &K) -> Self {
        Self::KeyNotFound(format!("{:?}", key))
    }

    /// Wrap a user error raised from a lambda policy.
    pub fn policy<E>(err: E) -> Self
    where
        E: Into<PolicyError>,
    {
        Self::Policy(err.into())
    }
}

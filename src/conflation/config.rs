//! Conflator configuration with tunable window semantics.

/// How long a key's running aggregate accumulates before it restarts.
///
/// Only matters for policies that restart per interval (Mean, Batch,
/// Lambda). The other policies behave the same under both windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    /// Aggregates accumulate until `clear()`. `reset()` only drops dirtiness.
    #[default]
    UntilClear,

    /// The first `set()` of a key that is not dirty restarts its aggregate,
    /// so every reset interval reports only its own updates. Applies to
    /// Batch, Mean and Lambda; OHLC and Mode still accumulate until `clear()`.
    UntilReset,
}

impl Window {
    /// Get a human-readable window name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UntilClear => "until_clear",
            Self::UntilReset => "until_reset",
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for a [`Conflator`](super::Conflator).
#[derive(Debug, Clone)]
pub struct ConflatorConfig {
    /// Display name, overrides the policy's default name (default: None)
    pub name: Option<String>,
    /// Pre-allocated key capacity for both stores (default: 0)
    pub initial_capacity: usize,
    /// Aggregation window (default: UntilClear)
    pub window: Window,
    /// Emit trace events on reset/clear/flush (default: true)
    pub trace_cycles: bool,
}

impl Default for ConflatorConfig {
    fn default() -> Self {
        Self {
            name: None,
            initial_capacity: 0,
            window: Window::UntilClear,
            trace_cycles: true,
        }
    }
}

impl ConflatorConfig {
    /// Create a new config builder.
    pub fn builder() -> ConflatorConfigBuilder {
        ConflatorConfigBuilder::default()
    }

    /// Per-interval reporting: Mean, Batch and Lambda restart after every `reset()`.
    pub fn interval() -> Self {
        Self {
            window: Window::UntilReset,
            ..Default::default()
        }
    }

    /// No cycle tracing, for very hot consumers.
    pub fn quiet() -> Self {
        Self {
            trace_cycles: false,
            ..Default::default()
        }
    }
}

/// Builder pattern for ConflatorConfig.
#[derive(Default)]
pub struct ConflatorConfigBuilder {
    config: ConflatorConfig,
}

impl ConflatorConfigBuilder {
    /// Set the display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = Some(name.into());
        self
    }

    /// Set the initial key capacity.
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the aggregation window.
    pub fn window(mut self, window: Window) -> Self {
        self.config.window = window;
        self
    }

    /// Enable or disable reset/clear tracing.
    pub fn trace_cycles(mut self, enable: bool) -> Self {
        self.config.trace_cycles = enable;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ConflatorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConflatorConfig::default();
        assert_eq!(config.name, None);
        assert_eq!(config.window, Window::UntilClear);
        assert!(config.trace_cycles);
    }

    #[test]
    fn test_builder() {
        let config = ConflatorConfig::builder()
            .name("prices")
            .initial_capacity(64)
            .window(Window::UntilReset)
            .trace_cycles(false)
            .build();

        assert_eq!(config.name.as_deref(), Some("prices"));
        assert_eq!(config.initial_capacity, 64);
        assert_eq!(config.window, Window::UntilReset);
        assert!(!config.trace_cycles);
    }

    #[test]
    fn test_presets() {
        assert_eq!(ConflatorConfig::interval().window, Window::UntilReset);
        assert!(!ConflatorConfig::quiet().trace_cycles);
        assert_eq!(ConflatorConfig::quiet().window, Window::UntilClear);
    }

    #[test]
    fn test_window_display() {
        assert_eq!(format!("{}", Window::UntilClear), "until_clear");
        assert_eq!(format!("{}", Window::UntilReset), "until_reset");
    }
}

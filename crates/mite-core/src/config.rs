/// Default `EnvFilter` directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,mite_flat=debug";

/// Configuration for the opt-in logging subscriber.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// An `EnvFilter` directive, e.g. `"mite_flat=trace"`.
    ///
    /// `RUST_LOG` takes precedence when it is set.
    pub filter: String,
    /// Print the event target (module path) next to each line.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: DEFAULT_FILTER.to_string(),
            with_target: true,
        }
    }
}

impl LogConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}

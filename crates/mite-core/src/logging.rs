//! Opt-in `tracing` subscriber.
//!
//! The mite crates only emit events; installing a subscriber is left to the
//! application. These helpers exist for binaries, examples and tests that
//! want to see those events without wiring up `tracing-subscriber`
//! themselves.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs a formatting subscriber with the default filter.
///
/// Returns `true` if this call installed the global subscriber.
pub fn init() -> bool {
    init_with(&LogConfig::default())
}

/// Installs a formatting subscriber using `config`.
///
/// `RUST_LOG` overrides `config.filter` when set. Calling this after a global
/// subscriber is already installed does nothing and returns `false`.
pub fn init_with(config: &LogConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %config.filter, "mite logging initialized");
    } else {
        tracing::trace!("global subscriber already set; keeping it");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        assert!(!init_with(&LogConfig::default().with_filter("trace")));
    }
}

//! Logging setup
//!
//! Log records go to stderr so standard output only ever carries the
//! component's own lines.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "error";

/// Build the log filter, preferring `RUST_LOG` over [`DEFAULT_FILTER`]
pub fn build_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Returns `false` if a subscriber was already installed.
pub fn init_logging() -> bool {
    tracing_subscriber::registry()
        .with(build_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .is_ok()
}

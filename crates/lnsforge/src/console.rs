//! Console logging for neighborhood events.
//!
//! Installs a `tracing` subscriber printing LNSForge events. The filter
//! honours `RUST_LOG` and otherwise shows `lnsforge_solver` at info level.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "lnsforge_solver=info";

/// Initializes console logging.
///
/// Safe to call multiple times - only the first call has effect. If another
/// global subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).compact())
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, console logging skipped");
        }
    });
}

/// Whether [`init`] has run.
pub fn is_initialized() -> bool {
    INIT.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
        assert!(is_initialized());
    }
}

//! Diagnostic logging setup

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter (e.g. "fintrack=debug")
pub const LOG_ENV_VAR: &str = "FINTRACK_LOG";

static TRACING_INIT: Once = Once::new();

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fintrack=debug"
    } else {
        "warn"
    }
}

/// Initializes the global tracing subscriber, writing to stderr.
///
/// `FINTRACK_LOG` takes precedence over the `verbose` default. Calling this
/// more than once has no effect.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

//! Tracing setup for the binary
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedding applications keep control of their own logging.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is not set
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "expense_tracker=debug"
    } else {
        "expense_tracker=warn"
    }
}

/// Initializes the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the `verbose` default.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

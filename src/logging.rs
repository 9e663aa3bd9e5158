//! Tracing initialization
//!
//! Diagnostics go to stderr so stdout stays clean for status output and
//! NDJSON events. `RUST_LOG` overrides the verbosity flag.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,appdeploy=debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber for `-v` count `verbose`
pub fn init(verbose: u8) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 1)
                .compact(),
        )
        .try_init()
}

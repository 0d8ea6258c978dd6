//! Diagnostics via `tracing`.
//!
//! Standard output belongs to the host's line protocol, so logs only ever go to
//! stderr. `XBARMENU_LOG` takes an `EnvFilter` directive and overrides `-v`.

use std::io;

use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub const LOG_ENV: &str = "XBARMENU_LOG";

/// Maps `-v` occurrences to a level: none → warn, `-v` → info, `-vv` → debug,
/// more → trace.
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level_from_verbosity(verbosity)).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time();

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

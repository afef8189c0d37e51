//! Structured logging setup.
//!
//! Events emitted by the crate:
//! - `warn`: candidate source failure/timeout and fallback activation
//! - `debug`: per-provider probe failures, rejections and cache hits
//! - `info`: completed discovery runs

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ScopeConfig;

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level. Calling this more than once is a no-op.
pub fn init_logging(config: &ScopeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

//! Tracing logger
//!
//! Forwards log messages as `tracing` events under the `fnpack` target.
//! The subscriber is installed by the binary.

use crate::domain::ports::{LogLevel, Logger};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Verbose => tracing::debug!(target: "fnpack", "{}", message),
            LogLevel::Info => tracing::info!(target: "fnpack", "{}", message),
            LogLevel::Error => tracing::error!(target: "fnpack", "{}", message),
        }
    }
}

/// Install a global fmt subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `default_directive`. Calling this twice
/// is harmless; the second install is ignored.
pub fn init_subscriber(default_directive: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

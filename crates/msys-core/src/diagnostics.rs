//! Diagnostics for the sys namespace itself.
//!
//! Goes through the `log` facade and lands on stderr, so it never mixes with
//! the lines `log` writes to its sink.

use std::sync::Once;

/// Diagnostic logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "debug",
/// "msys_core=trace,msys_host=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global diagnostic logger once.
///
/// Subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr);

        // Another logger may already be installed by the embedding host.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("diagnostics initialized");
    });
}

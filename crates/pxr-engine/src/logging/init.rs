use std::sync::Once;

use log::LevelFilter;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "pxr_engine=debug,wgpu=warn"). When unset, `RUST_LOG` is consulted, then
/// `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Where the active filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterSource {
    Explicit(String),
    Env(String),
    Level(LevelFilter),
}

fn resolve_filter(config: &LoggingConfig, rust_log: Option<String>) -> FilterSource {
    match (&config.env_filter, rust_log) {
        (Some(f), _) => FilterSource::Explicit(f.clone()),
        (None, Some(env)) if !env.trim().is_empty() => FilterSource::Env(env),
        _ => FilterSource::Level(config.default_level),
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match resolve_filter(&config, std::env::var("RUST_LOG").ok()) {
            FilterSource::Explicit(f) | FilterSource::Env(f) => {
                builder.parse_filters(&f);
            }
            FilterSource::Level(level) => {
                builder.filter_level(level);
                // wgpu is chatty at info; keep it to warnings unless asked.
                builder.filter_module("wgpu_core", LevelFilter::Warn);
                builder.filter_module("wgpu_hal", LevelFilter::Warn);
                builder.filter_module("naga", LevelFilter::Warn);
            }
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (e.g. by a test harness).
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}

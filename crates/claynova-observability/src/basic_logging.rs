use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at `LOG_LEVEL` when `RUST_LOG` is unset.
const APP_TARGETS: [&str; 3] = ["claynova", "claynova_config", "claynova_observability"];

/// Builds the fallback filter used when `RUST_LOG` is absent or invalid.
pub fn default_filter_directives(level: &str) -> String {
    APP_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Filter**: `RUST_LOG` when set, otherwise the application crates at
///   `LOG_LEVEL` (default: "info")
/// - **Format**: Compact format with targets, file/line and ANSI colors
///
/// # Errors
///
/// Fails if a global subscriber has already been installed.
pub fn init_console_logging() -> Result<()> {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directives(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(true)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(console_layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

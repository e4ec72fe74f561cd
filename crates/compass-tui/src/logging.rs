use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use anyhow::{Context, Result};
use compass_core::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_DIRECTIVES: &str = "compass_core=info,compass_tui=info";

/// Filter used when `RUST_LOG` is not set
fn directives(config: &Config) -> &str {
    config.log_filter.as_deref().unwrap_or(DEFAULT_DIRECTIVES)
}

/// Send tracing output to `debug.log` in the config dir. The terminal belongs
/// to the TUI, so nothing is written to stdout or stderr.
pub fn init(config: &Config) -> Result<PathBuf> {
    let log_dir = Config::config_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Could not create {}", log_dir.display()))?;

    let log_path = log_dir.join("debug.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Could not open {}", log_path.display()))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(config)).context("Invalid log_filter in config")?,
    };

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(true)
                .with_level(true),
        )
        .try_init()?;

    Ok(log_path)
}

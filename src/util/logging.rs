//! Tracing subscriber setup

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{Context, anyhow};
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(config: &LogConfig) -> anyhow::Result<()> {
  let filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(&config.level))
    .with_context(|| format!("invalid log level '{}'", config.level))?;

  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_thread_ids(true);

  let installed = match log_file(config) {
    Some(path) => {
      let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file '{}'", path))?;
      builder
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
    }
    None => builder.try_init(),
  };
  installed.map_err(|e| anyhow!("failed to install tracing subscriber: {}", e))
}

fn log_file(config: &LogConfig) -> Option<&str> {
  config.file.as_deref().filter(|p| !p.is_empty())
}

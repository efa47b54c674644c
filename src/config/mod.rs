use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

/// Errors loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("failed to read config file '{path}': {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },
  #[error("failed to parse config file '{path}': {source}")]
  Parse {
    path: String,
    #[source]
    source: toml::de::Error,
  },
}

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// Client connection configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClientConfig {
  /// Server endpoint, e.g. "http://127.0.0.1:1099"
  #[serde(default = "default_server_url")]
  pub server_url: String,
  /// Timeout for connecting and for each call, in milliseconds
  #[serde(default = "default_timeout_ms")]
  pub timeout_ms: u64,
}

fn default_server_url() -> String {
  "http://127.0.0.1:1099".to_string()
}

fn default_timeout_ms() -> u64 {
  3000
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      server_url: default_server_url(),
      timeout_ms: default_timeout_ms(),
    }
  }
}

/// kvrpc configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// Server listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Client configuration
  #[serde(default)]
  pub client: ClientConfig,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:1099".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      client: ClientConfig::default(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> Result<Self, ConfigError> {
    let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.to_string(),
      source,
    })?;

    toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
      path: path.to_string(),
      source,
    })
  }

  /// Load from the given file, or fall back to defaults
  pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
    match path {
      Some(path) => Self::from_file(path),
      None => Ok(Self::default()),
    }
  }
}

//! Configuration management for the Fintual client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Main configuration struct for the Fintual client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the Fintual API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Value of the `User-Agent` header
  pub user_agent: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::FINTUAL_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
    }
  }
}

impl Config {
  /// Load configuration from environment variables, falling back to defaults.
  ///
  /// Reads `FINTUAL_BASE_URL`, `FINTUAL_TIMEOUT_SECS` and `FINTUAL_USER_AGENT`,
  /// after loading a `.env` file if one is present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let base_url =
      env::var("FINTUAL_BASE_URL").unwrap_or_else(|_| crate::FINTUAL_BASE_URL.to_string());

    let timeout_secs = match env::var("FINTUAL_TIMEOUT_SECS") {
      Ok(raw) => parse_timeout(&raw)?,
      Err(env::VarError::NotPresent) => crate::DEFAULT_TIMEOUT_SECS,
      Err(e) => return Err(e.into()),
    };

    let user_agent =
      env::var("FINTUAL_USER_AGENT").unwrap_or_else(|_| crate::DEFAULT_USER_AGENT.to_string());

    Ok(Config { base_url, timeout_secs, user_agent })
  }

  /// Default configuration pointed at another host (staging, mock servers)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), ..Config::default() }
  }

  /// Request timeout as a `Duration`
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

fn parse_timeout(raw: &str) -> Result<u64> {
  match raw.trim().parse::<u64>() {
    Ok(0) | Err(_) => Err(Error::Config(format!("Invalid FINTUAL_TIMEOUT_SECS: {raw:?}"))),
    Ok(secs) => Ok(secs),
  }
}

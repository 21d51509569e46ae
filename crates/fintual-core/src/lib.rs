//! # fintual-core
//!
//! Shared configuration, error types and small validation helpers used by the
//! `fintual-*` crates.

pub mod config;
pub mod date;
pub mod error;

pub use config::Config;
pub use date::validate_date;
pub use error::{Error, Result};

/// Base URL for the Fintual API
pub const FINTUAL_BASE_URL: &str = "https://fintual.cl/api";

/// Default request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User agent sent with every request unless overridden
pub const DEFAULT_USER_AGENT: &str = concat!("fintual-client/", env!("CARGO_PKG_VERSION"));

/// Discriminator carried by a successful authentication response
pub const ACCESS_TOKEN_TYPE: &str = "access_token";

/// Resource paths, relative to the base URL
pub mod paths {
  pub const ACCESS_TOKENS: &str = "access_tokens";
  pub const ASSET_PROVIDERS: &str = "asset_providers";
  pub const BANKS: &str = "banks";
  pub const CONCEPTUAL_ASSETS: &str = "conceptual_assets";
  pub const REAL_ASSETS: &str = "real_assets";
  pub const EXPENSE_RATIO: &str = "expense_ratio";
  pub const DAYS: &str = "days";
  pub const GOALS: &str = "goals";
}

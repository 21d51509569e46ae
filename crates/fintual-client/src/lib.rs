//! # fintual-client
//!
//! A typed client for the Fintual API.
//!
//! ## Features
//!
//! - **Typed responses**: JSON:API envelopes decoded into fintual-models types
//! - **Async/Await**: built on reqwest and tokio
//! - **Sessions**: one `authenticate` call unlocks the goal endpoints
//! - **Configurable**: environment-based configuration via fintual-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fintual_client::{ConceptualAssetListParams, Config, FintualClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FintualClient::new(Config::from_env()?)?;
//!
//!     let params = ConceptualAssetListParams::default().name("Risky Norris");
//!     for fund in client.conceptual_assets().list(Some(&params)).await? {
//!         println!("{} ({})", fund.attributes.name, fund.attributes.currency);
//!     }
//!
//!     let days = client.real_assets().days_between("186", "2021-01-01", "2021-01-31").await?;
//!     println!("{} days of prices", days.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, fintual_core::Error>`. Errors are never
//! wrapped, so callers can branch on `Error::Unauthenticated`,
//! `Error::Api { .. }`, `Error::InvalidDate(_)` and so on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod query;
pub mod session;
pub mod transport;

// Re-export the main client and common types
pub use client::FintualClient;
pub use fintual_core::{Config, Error, Result};
pub use fintual_models::*;
pub use query::{BankListParams, ConceptualAssetListParams, QueryParams};
pub use session::Session;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  asset_providers::AssetProvidersEndpoints, banks::BanksEndpoints,
  conceptual_assets::ConceptualAssetsEndpoints, goals::GoalsEndpoints,
  real_assets::RealAssetsEndpoints,
};

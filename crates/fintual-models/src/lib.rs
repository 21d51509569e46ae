//! # fintual-models
//!
//! Data models for Fintual API responses.
//!
//! Every Fintual endpoint answers with a `{"data": ...}` envelope wrapping one
//! resource or a list of them, and every resource has the JSON:API shape
//! `{"id", "type", "attributes"}`. [`Resource`] captures that shape generically;
//! the per-endpoint modules only describe the `attributes` payloads.
//!
//! ## Usage
//!
//! ```ignore
//! use fintual_models::{ListEnvelope, RealAssetDayAttributes};
//!
//! let days: ListEnvelope<RealAssetDayAttributes> = serde_json::from_str(&response_json)?;
//! for day in days.data {
//!     println!("{} {}", day.attributes.date, day.attributes.price);
//! }
//! ```

#![warn(clippy::all)]

pub mod asset_providers;
pub mod auth;
pub mod banks;
pub mod common;
pub mod conceptual_assets;
pub mod goals;
pub mod real_assets;

// Re-export common types for convenience
pub use common::*;
pub use rust_decimal::Decimal;

// Re-export all model types
pub use asset_providers::*;
pub use auth::*;
pub use banks::*;
pub use conceptual_assets::*;
pub use goals::*;
pub use real_assets::*;

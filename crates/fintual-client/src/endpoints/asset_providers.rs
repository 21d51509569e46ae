//! Asset provider endpoints

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::Transport;
use fintual_core::{paths, Result};
use fintual_models::asset_providers::*;
use std::sync::Arc;
use tracing::instrument;

/// Asset provider endpoints
pub struct AssetProvidersEndpoints {
  transport: Arc<Transport>,
}

impl AssetProvidersEndpoints {
  /// Create a new asset providers endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List every asset provider.
  ///
  /// Endpoint: `GET /asset_providers`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fintual_client::FintualClient;
  /// # async fn run(client: FintualClient) -> fintual_client::Result<()> {
  /// for provider in client.asset_providers().list().await? {
  ///     println!("{}: {}", provider.id, provider.attributes.name);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<AssetProvider>> {
    let url = self.transport.build_url(&[paths::ASSET_PROVIDERS], &[])?;
    self.fetch_list(url).await
  }

  /// Get a single asset provider.
  ///
  /// Endpoint: `GET /asset_providers/:id`
  #[instrument(skip(self))]
  pub async fn get(&self, id: &str) -> Result<AssetProvider> {
    let url = self.transport.build_url(&[paths::ASSET_PROVIDERS, id], &[])?;
    self.fetch_one(url).await
  }
}

impl_endpoint_base!(AssetProvidersEndpoints);

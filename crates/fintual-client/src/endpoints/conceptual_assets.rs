//! Conceptual asset endpoints

use super::{impl_endpoint_base, EndpointBase};

use crate::query::{encode_query, ConceptualAssetListParams};
use crate::transport::Transport;
use fintual_core::{paths, Result};
use fintual_models::conceptual_assets::*;
use std::sync::Arc;
use tracing::instrument;

/// Conceptual asset (fund) endpoints
pub struct ConceptualAssetsEndpoints {
  transport: Arc<Transport>,
}

impl ConceptualAssetsEndpoints {
  /// Create a new conceptual assets endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List conceptual assets, optionally filtered by name and/or RUN.
  ///
  /// Endpoint: `GET /conceptual_assets`
  ///
  /// # Arguments
  ///
  /// * `params` - `name` and `run` filters; `None` or empty fields are not sent
  #[instrument(skip(self))]
  pub async fn list(&self, params: Option<&ConceptualAssetListParams>) -> Result<Vec<ConceptualAsset>> {
    let url = self.transport.build_url(&[paths::CONCEPTUAL_ASSETS], &encode_query(params))?;
    self.fetch_list(url).await
  }

  /// Get a single conceptual asset.
  ///
  /// Endpoint: `GET /conceptual_assets/:id`
  #[instrument(skip(self))]
  pub async fn get(&self, id: &str) -> Result<ConceptualAsset> {
    let url = self.transport.build_url(&[paths::CONCEPTUAL_ASSETS, id], &[])?;
    self.fetch_one(url).await
  }

  /// List the conceptual assets managed by an asset provider.
  ///
  /// Endpoint: `GET /asset_providers/:id/conceptual_assets`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fintual_client::{ConceptualAssetListParams, FintualClient};
  /// # async fn run(client: FintualClient) -> fintual_client::Result<()> {
  /// let params = ConceptualAssetListParams::default().name("Risky Norris");
  /// let funds = client.conceptual_assets().list_by_asset_provider("1", Some(&params)).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list_by_asset_provider(
    &self,
    asset_provider_id: &str,
    params: Option<&ConceptualAssetListParams>,
  ) -> Result<Vec<ConceptualAsset>> {
    let url = self.transport.build_url(
      &[paths::ASSET_PROVIDERS, asset_provider_id, paths::CONCEPTUAL_ASSETS],
      &encode_query(params),
    )?;
    self.fetch_list(url).await
  }
}

impl_endpoint_base!(ConceptualAssetsEndpoints);

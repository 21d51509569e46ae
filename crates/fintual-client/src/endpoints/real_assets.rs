//! Real asset endpoints, including daily figures

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::Transport;
use fintual_core::{paths, validate_date, Result};
use fintual_models::real_assets::*;
use std::sync::Arc;
use tracing::instrument;

/// Real asset (fund series) endpoints
pub struct RealAssetsEndpoints {
  transport: Arc<Transport>,
}

impl RealAssetsEndpoints {
  /// Create a new real assets endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get a single real asset with its latest daily figures.
  ///
  /// Endpoint: `GET /real_assets/:id`
  #[instrument(skip(self))]
  pub async fn get(&self, id: &str) -> Result<RealAsset> {
    let url = self.transport.build_url(&[paths::REAL_ASSETS, id], &[])?;
    self.fetch_one(url).await
  }

  /// Get the expense ratio of a real asset.
  ///
  /// Endpoint: `GET /real_assets/:id/expense_ratio`
  #[instrument(skip(self))]
  pub async fn expense_ratio(&self, id: &str) -> Result<ExpenseRatio> {
    let url = self.transport.build_url(&[paths::REAL_ASSETS, id, paths::EXPENSE_RATIO], &[])?;
    self.fetch_one(url).await
  }

  /// Get the figures of a real asset for one day.
  ///
  /// Endpoint: `GET /real_assets/:id/days?date=`
  ///
  /// # Arguments
  ///
  /// * `id` - Real asset id
  /// * `date` - Day as `YYYY-MM-DD`; anything else fails with `Error::InvalidDate`
  ///   before a request is made
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fintual_client::FintualClient;
  /// # async fn run(client: FintualClient) -> fintual_client::Result<()> {
  /// for day in client.real_assets().day("186", "2021-06-01").await? {
  ///     println!("{}: {}", day.attributes.date, day.attributes.price);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn day(&self, id: &str, date: &str) -> Result<Vec<RealAssetDay>> {
    validate_date(date)?;

    let url = self
      .transport
      .build_url(&[paths::REAL_ASSETS, id, paths::DAYS], &[("date".to_string(), date.to_string())])?;
    self.fetch_list(url).await
  }

  /// List the daily figures of a real asset between two dates, inclusive.
  ///
  /// Endpoint: `GET /real_assets/:id/days?from_date=&to_date=`
  ///
  /// Both dates must be `YYYY-MM-DD`.
  #[instrument(skip(self))]
  pub async fn days_between(&self, id: &str, from_date: &str, to_date: &str) -> Result<Vec<RealAssetDay>> {
    validate_date(from_date)?;
    validate_date(to_date)?;

    let query = [
      ("from_date".to_string(), from_date.to_string()),
      ("to_date".to_string(), to_date.to_string()),
    ];
    let url = self.transport.build_url(&[paths::REAL_ASSETS, id, paths::DAYS], &query)?;
    self.fetch_list(url).await
  }

  /// List the real assets (series) of a conceptual asset.
  ///
  /// Endpoint: `GET /conceptual_assets/:id/real_assets`
  #[instrument(skip(self))]
  pub async fn list_by_conceptual_asset(&self, conceptual_asset_id: &str) -> Result<Vec<ConceptualAssetRealAsset>> {
    let url = self
      .transport
      .build_url(&[paths::CONCEPTUAL_ASSETS, conceptual_asset_id, paths::REAL_ASSETS], &[])?;
    self.fetch_list(url).await
  }
}

impl_endpoint_base!(RealAssetsEndpoints);

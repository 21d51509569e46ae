//! Bank endpoints

use super::{impl_endpoint_base, EndpointBase};

use crate::query::{encode_query, BankListParams};
use crate::transport::Transport;
use fintual_core::{paths, Result};
use fintual_models::banks::*;
use std::sync::Arc;
use tracing::instrument;

/// Bank endpoints
pub struct BanksEndpoints {
  transport: Arc<Transport>,
}

impl BanksEndpoints {
  /// Create a new banks endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List banks, optionally filtered by name.
  ///
  /// Endpoint: `GET /banks?q=`
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fintual_client::{BankListParams, FintualClient};
  /// # async fn run(client: FintualClient) -> fintual_client::Result<()> {
  /// let all = client.banks().list(None).await?;
  /// let matching = client.banks().list(Some(&BankListParams::query("estado"))).await?;
  /// println!("{} banks, {} matching", all.len(), matching.len());
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self, params: Option<&BankListParams>) -> Result<Vec<Bank>> {
    let url = self.transport.build_url(&[paths::BANKS], &encode_query(params))?;
    self.fetch_list(url).await
  }
}

impl_endpoint_base!(BanksEndpoints);

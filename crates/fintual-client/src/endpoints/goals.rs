//! Goal endpoints (authenticated)

use super::{impl_endpoint_base, EndpointBase};

use crate::session::SessionStore;
use crate::transport::Transport;
use fintual_core::{paths, Result};
use fintual_models::goals::*;
use std::sync::Arc;
use tracing::instrument;

/// Goal endpoints. Every call requires `FintualClient::authenticate` first;
/// the API scopes results to the authenticated user.
pub struct GoalsEndpoints {
  transport: Arc<Transport>,
  session: Arc<SessionStore>,
}

impl GoalsEndpoints {
  /// Create a new goals endpoints instance
  pub fn new(transport: Arc<Transport>, session: Arc<SessionStore>) -> Self {
    Self { transport, session }
  }

  /// List the authenticated user's goals.
  ///
  /// Endpoint: `GET /goals`
  ///
  /// # Errors
  ///
  /// `Error::Unauthenticated` without a session; no request is sent.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use fintual_client::FintualClient;
  /// # async fn run(client: FintualClient) -> fintual_client::Result<()> {
  /// client.authenticate("ana@example.com", "secret").await?;
  /// for goal in client.goals().list().await? {
  ///     println!("{}: {}", goal.attributes.name, goal.attributes.net_asset_value);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Goal>> {
    let query = self.session.authorize(Vec::new()).await?;
    let url = self.transport.build_url(&[paths::GOALS], &query)?;
    self.fetch_list(url).await
  }

  /// Get one of the authenticated user's goals.
  ///
  /// Endpoint: `GET /goals/:id`
  #[instrument(skip(self))]
  pub async fn get(&self, id: &str) -> Result<Goal> {
    let query = self.session.authorize(Vec::new()).await?;
    let url = self.transport.build_url(&[paths::GOALS, id], &query)?;
    self.fetch_one(url).await
  }
}

impl_endpoint_base!(GoalsEndpoints);

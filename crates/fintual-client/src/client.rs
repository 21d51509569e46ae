/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Client entry point: configuration, session handling and endpoint groups

use crate::endpoints::{
  asset_providers::AssetProvidersEndpoints, banks::BanksEndpoints,
  conceptual_assets::ConceptualAssetsEndpoints, goals::GoalsEndpoints,
  real_assets::RealAssetsEndpoints,
};
use crate::session::{Session, SessionStore};
use crate::transport::Transport;
use fintual_core::{paths, Config, Error, Result, ACCESS_TOKEN_TYPE};
use fintual_models::auth::{AccessTokenRequest, AccessTokenResponse};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Main Fintual API client
///
/// Provides access to the Fintual API through endpoint groups and holds the
/// session used by authenticated endpoints. Cloning is cheap and clones share
/// the same session.
///
/// # Examples
///
/// ```ignore
/// use fintual_client::{Config, FintualClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FintualClient::new(Config::from_env()?)?;
///
///     let fund = client.real_assets().get("186").await?;
///     println!("{} last NAV: {:?}", fund.attributes.name, fund.attributes.last_day.net_asset_value);
///
///     client.authenticate("ana@example.com", "secret").await?;
///     let goals = client.goals().list().await?;
///     println!("{} goals", goals.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FintualClient {
  transport: Arc<Transport>,
  session: Arc<SessionStore>,
}

impl FintualClient {
  /// Create a new Fintual API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use fintual_client::{Config, FintualClient};
  ///
  /// let client = FintualClient::new(Config::default()).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport, session: Arc::new(SessionStore::default()) })
  }

  /// Create a client configured from `FINTUAL_*` environment variables
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Exchange credentials for an access token and store it as the session.
  ///
  /// The previous session, if any, is replaced only on success.
  ///
  /// # Errors
  ///
  /// * `Error::AuthenticationFailed` on a 401, or when the response does not
  ///   carry an `access_token` resource with a non-empty token
  /// * any other transport or API error, untouched
  #[instrument(skip(self, password))]
  pub async fn authenticate(&self, email: &str, password: &str) -> Result<()> {
    let url = self.transport.build_url(&[paths::ACCESS_TOKENS], &[])?;
    let request = AccessTokenRequest::new(email, password);

    let response: Option<AccessTokenResponse> = match self.transport.post(url, &request).await {
      Ok(response) => response,
      Err(e) if e.http_status() == Some(401) => {
        warn!("Credentials rejected for {}", email);
        return Err(Error::AuthenticationFailed(e.to_string()));
      }
      Err(e) => return Err(e),
    };

    let token = response
      .as_ref()
      .and_then(|r| r.token_of_kind(ACCESS_TOKEN_TYPE))
      .ok_or_else(|| Error::AuthenticationFailed("didn't get an access token".to_string()))?;

    self.session.set(Session::new(email, token)).await;
    info!("Authenticated as {}", email);
    Ok(())
  }

  /// Install a previously issued token without calling the API
  pub async fn restore_session(&self, email: &str, access_token: &str) {
    self.session.set(Session::new(email, access_token)).await;
  }

  /// Drop the current session
  pub async fn sign_out(&self) {
    self.session.clear().await;
  }

  /// Whether authenticated endpoints can be called
  pub async fn is_authenticated(&self) -> bool {
    self.session.is_authenticated().await
  }

  /// Email of the authenticated account, if any
  pub async fn user_email(&self) -> Option<String> {
    self.session.current().await.ok().map(|s| s.user_email().to_string())
  }

  /// Get access to asset provider endpoints
  pub fn asset_providers(&self) -> AssetProvidersEndpoints {
    AssetProvidersEndpoints::new(self.transport.clone())
  }

  /// Get access to bank endpoints
  pub fn banks(&self) -> BanksEndpoints {
    BanksEndpoints::new(self.transport.clone())
  }

  /// Get access to conceptual asset endpoints
  pub fn conceptual_assets(&self) -> ConceptualAssetsEndpoints {
    ConceptualAssetsEndpoints::new(self.transport.clone())
  }

  /// Get access to real asset endpoints
  pub fn real_assets(&self) -> RealAssetsEndpoints {
    RealAssetsEndpoints::new(self.transport.clone())
  }

  /// Get access to goal endpoints (authenticated)
  pub fn goals(&self) -> GoalsEndpoints {
    GoalsEndpoints::new(self.transport.clone(), self.session.clone())
  }

  /// The underlying transport
  pub fn transport(&self) -> &Transport {
    &self.transport
  }
}

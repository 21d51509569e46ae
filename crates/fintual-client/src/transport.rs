//! HTTP transport layer for Fintual API requests

use fintual_core::{Config, Error, Result};
use fintual_models::ApiErrorBody;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::Url;

const JSON_MIME: &str = "application/json";

/// HTTP transport layer for making requests to the Fintual API
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .timeout(config.timeout())
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url: config.base_url.clone(), timeout: config.timeout() })
  }

  /// Build the full URL for an API request.
  ///
  /// `segments` are appended to the base URL path one by one, so identifiers
  /// are percent-encoded. An empty `query` leaves the URL without a query string.
  pub fn build_url(&self, segments: &[&str], query: &[(String, String)]) -> Result<Url> {
    let mut url = Url::parse(&self.base_url)
      .map_err(|e| Error::MalformedUrl(format!("Invalid base URL {:?}: {}", self.base_url, e)))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::MalformedUrl(format!("Base URL cannot carry a path: {}", self.base_url)))?
      .pop_if_empty()
      .extend(segments);

    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    Ok(url)
  }

  /// Make a GET request.
  ///
  /// Returns `Ok(None)` for a 204 response; the body is never read in that case.
  #[instrument(skip(self, url), fields(path = %url.path()))]
  pub async fn get<T>(&self, url: Url) -> Result<Option<T>>
  where
    T: DeserializeOwned,
  {
    debug!("Making GET request to: {}", url.path());
    let request = self.client.get(url.clone());
    self.send(request, &url).await
  }

  /// Make a POST request with a JSON body.
  #[instrument(skip(self, url, body), fields(path = %url.path()))]
  pub async fn post<B, T>(&self, url: Url, body: &B) -> Result<Option<T>>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    debug!("Making POST request to: {}", url.path());
    let request = self.client.post(url.clone()).json(body);
    self.send(request, &url).await
  }

  async fn send<T>(&self, request: RequestBuilder, url: &Url) -> Result<Option<T>>
  where
    T: DeserializeOwned,
  {
    let response = request.header(ACCEPT, JSON_MIME).send().await.map_err(transport_error)?;
    let status = response.status();

    if !status.is_success() {
      warn!("Request to {} failed with status: {}", url.path(), status);
      return Err(match response.text().await {
        Ok(body) => decode_error_body(status, &body),
        Err(e) => unreadable_error_body(status, &e),
      });
    }

    if status == StatusCode::NO_CONTENT {
      debug!("No content returned from {}", url.path());
      return Ok(None);
    }

    let text = response.text().await.map_err(transport_error)?;
    debug!("Response body length: {} bytes", text.len());

    decode_body(&text).map(Some)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

/// Map a failed (non-2xx) response body to an error.
///
/// Never fails itself: an empty body yields the status line, an unrecognised
/// body is embedded verbatim.
pub fn decode_error_body(status: StatusCode, body: &str) -> Error {
  let code = status.as_u16();

  if body.trim().is_empty() {
    return Error::MalformedResponse {
      http_status: Some(code),
      message: format!(
        "HTTP {}: {} (body empty)",
        code,
        status.canonical_reason().unwrap_or("Unknown Status")
      ),
    };
  }

  match serde_json::from_str::<ApiErrorBody>(body) {
    Ok(api_error) => Error::Api {
      http_status: code,
      code: api_error.code.unwrap_or(code),
      status: api_error.status.unwrap_or_else(|| "error".to_string()),
      message: api_error.message,
    },
    Err(_) => Error::MalformedResponse {
      http_status: Some(code),
      message: format!("couldn't decode error: [{}]", body),
    },
  }
}

fn unreadable_error_body(status: StatusCode, e: &dyn std::fmt::Display) -> Error {
  Error::MalformedResponse {
    http_status: Some(status.as_u16()),
    message: format!(
      "HTTP {}: {} (body unreadable: {})",
      status.as_u16(),
      status.canonical_reason().unwrap_or("Unknown Status"),
      e
    ),
  }
}

fn decode_body<T>(text: &str) -> Result<T>
where
  T: DeserializeOwned,
{
  serde_json::from_str::<T>(text).map_err(|e| {
    let excerpt: String = text.chars().take(200).collect();
    error!("Failed to parse JSON response: {}", e);
    Error::Decode(format!("Failed to parse response: {}. Response: {}", e, excerpt))
  })
}

fn transport_error(e: reqwest::Error) -> Error {
  if e.is_timeout() {
    Error::Timeout(e.to_string())
  } else {
    Error::Connection(e.to_string())
  }
}

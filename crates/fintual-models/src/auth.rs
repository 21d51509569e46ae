//! Access token request and response shapes (`/access_tokens`)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Login credentials. Only ever serialized into the access token request.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
  pub email: String,
  pub password: String,
}

impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials").field("email", &self.email).field("password", &"***").finish()
  }
}

/// Body of `POST /access_tokens`: `{"user": {"email", "password"}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessTokenRequest {
  pub user: Credentials,
}

impl AccessTokenRequest {
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self { user: Credentials { email: email.into(), password: password.into() } }
  }
}

/// Response of `POST /access_tokens`.
///
/// Every field defaults so an incomplete payload still decodes and can be
/// rejected as a failed authentication rather than a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessTokenResponse {
  #[serde(default)]
  pub data: Option<AccessTokenData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessTokenData {
  #[serde(default, rename = "type")]
  pub kind: String,

  #[serde(default)]
  pub attributes: AccessTokenAttributes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AccessTokenAttributes {
  #[serde(default)]
  pub token: String,
}

impl AccessTokenResponse {
  /// The token, provided the discriminator is `expected_kind` and the token is non-empty
  pub fn token_of_kind(&self, expected_kind: &str) -> Option<&str> {
    self
      .data
      .as_ref()
      .filter(|data| data.kind == expected_kind && !data.attributes.token.is_empty())
      .map(|data| data.attributes.token.as_str())
  }
}

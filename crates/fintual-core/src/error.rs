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

use thiserror::Error;

/// The main error type for fintual-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// The HTTP client could not be constructed
  #[error("HTTP error: {0}")]
  Http(String),

  /// Base URL, path and query could not be composed into a valid URL
  #[error("Malformed URL: {0}")]
  MalformedUrl(String),

  /// The connection failed or the body could not be read
  #[error("Connection error: {0}")]
  Connection(String),

  /// The request did not complete within the configured timeout
  #[error("Request timed out: {0}")]
  Timeout(String),

  /// Non-2xx response carrying a structured Fintual error body.
  ///
  /// `code` is the code the body reports; `http_status` is the status line.
  #[error("error {code}: {message}")]
  Api { http_status: u16, code: u16, status: String, message: String },

  /// Non-2xx response with an empty or unrecognised body, or a missing payload
  #[error("{message}")]
  MalformedResponse { http_status: Option<u16>, message: String },

  /// A successful response whose body is not the expected JSON
  #[error("Decode error: {0}")]
  Decode(String),

  /// The access token endpoint rejected the credentials or returned no token
  #[error("Authentication failed: {0}")]
  AuthenticationFailed(String),

  /// An authenticated endpoint was called before `authenticate`
  #[error("client not authenticated, call FintualClient::authenticate with valid credentials")]
  Unauthenticated,

  /// A date argument is not a `YYYY-MM-DD` calendar date
  #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
  InvalidDate(String),
}

impl Error {
  /// True for connection and timeout failures.
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Connection(_) | Error::Timeout(_))
  }

  /// HTTP status attached to the error, when the server answered at all.
  pub fn http_status(&self) -> Option<u16> {
    match self {
      Error::Api { http_status, .. } => Some(*http_status),
      Error::MalformedResponse { http_status, .. } => *http_status,
      _ => None,
    }
  }
}

/// Result type alias for fintual-* crates
pub type Result<T> = std::result::Result<T, Error>;

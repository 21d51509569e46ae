/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Envelope and resource shapes shared by every Fintual API response

use serde::{Deserialize, Serialize};

/// A JSON:API resource: identifier, type discriminator and typed attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<A> {
  /// Resource identifier (numeric ids are sent as strings)
  pub id: String,

  /// Type discriminator, e.g. `"real_asset"`
  #[serde(rename = "type")]
  pub kind: String,

  /// Resource-specific payload
  pub attributes: A,
}

impl<A> Resource<A> {
  /// Check the discriminator against an expected resource type
  pub fn is_kind(&self, kind: &str) -> bool {
    self.kind == kind
  }
}

/// `{"data": {...}}` wrapper returned by "get one" endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleEnvelope<A> {
  pub data: Resource<A>,
}

/// `{"data": [...]}` wrapper returned by "list" endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<A> {
  pub data: Vec<Resource<A>>,
}

/// Error body returned by the Fintual API on failed requests.
///
/// Only `message` is required; the decoder fills a missing `code` from the
/// HTTP status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
  /// The HTTP status code
  #[serde(default)]
  pub code: Option<u16>,

  /// The response status ("error" or "success")
  #[serde(default)]
  pub status: Option<String>,

  /// A short description of the error
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
  struct Named {
    name: String,
  }

  #[test]
  fn test_single_envelope_deserialization() {
    let body = json!({"data": {"id": "7", "type": "asset_provider", "attributes": {"name": "Fintual"}}});
    let envelope: SingleEnvelope<Named> = serde_json::from_value(body).unwrap();

    assert_eq!(envelope.data.id, "7");
    assert!(envelope.data.is_kind("asset_provider"));
    assert!(!envelope.data.is_kind("bank"));
    assert_eq!(envelope.data.attributes.name, "Fintual");
  }

  #[test]
  fn test_list_envelope_empty() {
    let envelope: ListEnvelope<Named> = serde_json::from_str(r#"{"data": []}"#).unwrap();
    assert!(envelope.data.is_empty());
  }

  #[test]
  fn test_list_envelope_rejects_object() {
    let body = r#"{"data": {"id": "1", "type": "bank", "attributes": {"name": "x"}}}"#;
    assert!(serde_json::from_str::<ListEnvelope<Named>>(body).is_err());
  }

  #[test]
  fn test_resource_serializes_type_key() {
    let resource = Resource { id: "1".to_string(), kind: "bank".to_string(), attributes: Named { name: "BCI".to_string() } };
    let value = serde_json::to_value(&resource).unwrap();
    assert_eq!(value["type"], "bank");
    assert!(value.get("kind").is_none());
  }

  #[test]
  fn test_api_error_body_optional_fields() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"message": "Not found"}"#).unwrap();
    assert_eq!(body.code, None);
    assert_eq!(body.status, None);
    assert_eq!(body.message, "Not found");

    assert!(serde_json::from_str::<ApiErrorBody>(r#"{"errors": ["boom"]}"#).is_err());
  }
}

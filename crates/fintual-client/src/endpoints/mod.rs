//! Endpoint groups, one per Fintual resource

pub mod asset_providers;
pub mod banks;
pub mod conceptual_assets;
pub mod goals;
pub mod real_assets;

use crate::transport::Transport;
use fintual_core::{Error, Result};
use fintual_models::{ListEnvelope, Resource, SingleEnvelope};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Base trait for endpoint implementations
///
/// Unwraps the `{"data": ...}` envelope for every endpoint group.
pub(crate) trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// GET a single resource. A 204 has no resource to return and is an error.
  async fn fetch_one<A>(&self, url: Url) -> Result<Resource<A>>
  where
    A: DeserializeOwned,
  {
    match self.transport().get::<SingleEnvelope<A>>(url).await? {
      Some(envelope) => Ok(envelope.data),
      None => Err(Error::MalformedResponse {
        http_status: Some(204),
        message: "expected a resource but the response had no content".to_string(),
      }),
    }
  }

  /// GET a collection. A 204 is an empty collection.
  async fn fetch_list<A>(&self, url: Url) -> Result<Vec<Resource<A>>>
  where
    A: DeserializeOwned,
  {
    let envelope = self.transport().get::<ListEnvelope<A>>(url).await?;
    Ok(envelope.map(|e| e.data).unwrap_or_default())
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

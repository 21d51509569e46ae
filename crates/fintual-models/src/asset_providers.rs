//! Asset provider models (`/asset_providers`)

use crate::common::Resource;
use serde::{Deserialize, Serialize};

/// An institution managing one or more conceptual assets
pub type AssetProvider = Resource<AssetProviderAttributes>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetProviderAttributes {
  pub name: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::ListEnvelope;

  #[test]
  fn test_asset_provider_list_deserialization() {
    let json = r#"{
      "data": [
        {"id": "1", "type": "asset_provider", "attributes": {"name": "Fintual"}},
        {"id": "2", "type": "asset_provider", "attributes": {"name": "BTG Pactual"}}
      ]
    }"#;

    let envelope: ListEnvelope<AssetProviderAttributes> = serde_json::from_str(json).unwrap();
    let providers: Vec<AssetProvider> = envelope.data;
    assert_eq!(providers.len(), 2);
    assert_eq!(providers[1].attributes.name, "BTG Pactual");
  }
}

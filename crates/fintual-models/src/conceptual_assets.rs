//! Conceptual asset models (`/conceptual_assets`)
//!
//! A conceptual asset is a fund as marketed (e.g. "Risky Norris"); its series
//! are exposed as real assets.

use crate::common::Resource;
use serde::{Deserialize, Serialize};

pub type ConceptualAsset = Resource<ConceptualAssetAttributes>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptualAssetAttributes {
  /// Fund name
  pub name: String,

  /// Ticker-like symbol
  pub symbol: String,

  /// Asset category (e.g. "mutual_fund", "pension_fund")
  pub category: String,

  /// Currency code the fund is quoted in
  pub currency: String,

  /// Decimal places used when quoting prices
  pub max_scale: i32,

  /// Regulator registration number (RUN)
  pub run: String,

  /// Origin of the price data
  pub data_source: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::SingleEnvelope;
  use serde_json::json;

  #[test]
  fn test_conceptual_asset_round_trip() {
    let attributes = ConceptualAssetAttributes {
      name: "Risky Norris".to_string(),
      symbol: "FFMM-FINTUAL-A".to_string(),
      category: "mutual_fund".to_string(),
      currency: "CLP".to_string(),
      max_scale: 4,
      run: "9570".to_string(),
      data_source: "fintual".to_string(),
    };
    let envelope = json!({"data": {"id": "186", "type": "conceptual_asset", "attributes": attributes}});

    let decoded: SingleEnvelope<ConceptualAssetAttributes> = serde_json::from_value(envelope).unwrap();
    assert_eq!(decoded.data.id, "186");
    assert_eq!(decoded.data.attributes, attributes);
  }
}

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

//! Real asset models (`/real_assets`)
//!
//! A real asset is one series of a conceptual asset. Daily figures come back
//! either embedded as `last_day` or from the `/days` sub-resource, where every
//! metric is paired with a `<metric>_type` string describing its origin.

use crate::common::Resource;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type RealAsset = Resource<RealAssetAttributes>;
pub type ExpenseRatio = Resource<ExpenseRatioAttributes>;
pub type RealAssetDay = Resource<RealAssetDayAttributes>;
pub type ConceptualAssetRealAsset = Resource<ConceptualAssetRealAssetAttributes>;

/// Attributes of `GET /real_assets/:id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealAssetAttributes {
  pub name: String,
  pub symbol: String,

  /// Series letter (A, APV, D, ...)
  pub serie: String,

  pub start_date: String,
  pub end_date: Option<String>,

  /// Id of the series this one replaced, if any
  pub previous_asset_id: Option<i64>,

  /// Latest published figures
  pub last_day: LastDay,

  pub conceptual_asset_id: i64,
}

/// Latest daily figures embedded in a real asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastDay {
  pub fixed_management_fee: Option<f64>,
  pub iva_exclusive_expenses: Option<f64>,
  pub iva_inclusive_expenses: Option<f64>,
  pub net_asset_value: Option<Decimal>,
  pub purchase_fee: Option<f64>,
  pub redemption_fee: Option<f64>,
  pub total_assets: Option<Decimal>,
  pub total_net_assets: Option<Decimal>,
  pub variable_management_fee: Option<f64>,
  pub fixed_fee: Option<f64>,
  pub new_shares: Option<f64>,
  pub outstanding_shares: Option<f64>,
  pub redeemed_shares: Option<f64>,
  pub institutional_investors: Option<f64>,
  pub shareholders: Option<f64>,
  pub date: String,
}

impl LastDay {
  /// `date` as a calendar date, if it is well formed
  pub fn parsed_date(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
  }
}

/// Attributes of `GET /real_assets/:id/expense_ratio`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRatioAttributes {
  pub expense_ratio: f64,
}

/// One day of figures from `GET /real_assets/:id/days`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealAssetDayAttributes {
  pub date: String,

  /// Share price for the day
  pub price: Decimal,

  pub fixed_management_fee: Option<f64>,
  pub fixed_management_fee_type: Option<String>,
  pub iva_exclusive_expenses: Option<f64>,
  pub iva_exclusive_expenses_type: Option<String>,
  pub iva_inclusive_expenses: Option<f64>,
  pub iva_inclusive_expenses_type: Option<String>,
  pub net_asset_value: Option<Decimal>,
  pub net_asset_value_type: Option<String>,
  pub purchase_fee: Option<f64>,
  pub purchase_fee_type: Option<String>,
  pub redemption_fee: Option<f64>,
  pub redemption_fee_type: Option<String>,
  pub total_assets: Option<Decimal>,
  pub total_assets_type: Option<String>,
  pub total_net_assets: Option<Decimal>,
  pub total_net_assets_type: Option<String>,
  pub variable_management_fee: Option<f64>,
  pub variable_management_fee_type: Option<String>,
  pub fixed_fee: Option<f64>,
  pub fixed_fee_type: Option<String>,
  pub new_shares: Option<f64>,
  pub new_shares_type: Option<String>,
  pub outstanding_shares: Option<f64>,
  pub outstanding_shares_type: Option<String>,
  pub redeemed_shares: Option<f64>,
  pub redeemed_shares_type: Option<String>,
  pub institutional_investors: Option<f64>,
  pub institutional_investors_type: Option<String>,
  pub shareholders: Option<f64>,
  pub shareholders_type: Option<String>,
}

impl RealAssetDayAttributes {
  pub fn parsed_date(&self) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
  }
}

/// Real asset as listed under `GET /conceptual_assets/:id/real_assets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptualAssetRealAssetAttributes {
  pub name: String,
  pub symbol: String,
  pub serie: String,
  pub start_date: String,
  pub end_date: Option<String>,
  pub previous_asset_id: Option<i64>,
  pub last_day: ConceptualAssetRealAssetLastDay,
  pub conceptual_asset_id: i64,
}

/// Abbreviated last day: share value and its date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptualAssetRealAssetLastDay {
  pub rate: Decimal,
  pub date: String,
}

//! Goal models (`/goals`, authenticated)

use crate::common::Resource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A savings goal belonging to the authenticated user
pub type Goal = Resource<GoalAttributes>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAttributes {
  pub name: String,
  pub name_without_suffix: String,

  /// Current net asset value of the goal
  #[serde(rename = "nav")]
  pub net_asset_value: Decimal,

  pub created_at: String,

  /// Investment horizon in months
  pub timeframe: i32,

  pub deposited: Decimal,
  pub hidden: bool,
  pub profit: Decimal,
  pub investments: Vec<Investment>,
  pub public_link: Option<String>,
  pub param_id: i64,
  pub goal_type: String,
  pub translated_goal_type: String,

  /// Tax regime (e.g. "APV-A"), absent for regular goals
  pub regime: Option<String>,

  pub completed: bool,
  pub has_any_withdrawals: bool,
  pub eligible_for_deposits: bool,
  pub eligible_for_internal_mlt: bool,
  pub monthly_deposit: Option<Decimal>,
  pub simulated_deposit: Option<Decimal>,
  pub funds_source: Option<String>,
  pub funds_source_description: Option<String>,
  pub not_net_deposited: Decimal,
  pub withdrawn: Decimal,
  pub group_goal_id: Option<i64>,
}

/// Allocation of a goal to a single real asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
  pub weight: f64,
  pub asset_id: i64,
}

impl GoalAttributes {
  /// Profit over deposited capital, `None` when nothing has been deposited
  pub fn return_ratio(&self) -> Option<Decimal> {
    self.profit.checked_div(self.deposited)
  }

  /// Weight allocated to `asset_id`, if the goal invests in it
  pub fn asset_weight(&self, asset_id: i64) -> Option<f64> {
    self.investments.iter().find(|inv| inv.asset_id == asset_id).map(|inv| inv.weight)
  }
}

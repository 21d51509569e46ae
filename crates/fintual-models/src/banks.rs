//! Bank models (`/banks`)

use crate::common::Resource;
use serde::{Deserialize, Serialize};

pub type Bank = Resource<BankAttributes>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAttributes {
  pub name: String,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::ServiceId;

/// Catalog entry with a standard price.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub amount: Decimal,
}

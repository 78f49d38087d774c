use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, TaxId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub tax_id: Option<TaxId>,
}

impl Client {
    /// Display name used by selection controls.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, SubjectId, TaxId};

/// A subject (associate) tied to exactly one client in the current workflow.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: SubjectId,
    pub client_id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub tax_id: Option<TaxId>,
}

impl Subject {
    /// Last-name-first rendering used by the work description template.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }
}

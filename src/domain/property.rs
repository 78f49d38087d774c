use serde::{Deserialize, Serialize};

use crate::domain::types::{PropertyId, SubjectId};

/// A property tied to exactly one subject.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    pub subject_id: SubjectId,
    pub address: String,
    pub city: Option<String>,
}

impl Property {
    /// `"address, city"`, or the address alone when the city is absent.
    pub fn location(&self) -> String {
        match self.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => format!("{}, {}", self.address, city),
            None => self.address.clone(),
        }
    }
}

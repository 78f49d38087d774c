use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::domain::types::{ClientId, PropertyId, ServiceId, SubjectId};
use crate::domain::work::{NewWork, UpdateWork};
use crate::drafts::work::WorkDraft;

/// Submit payload for creating or updating a work order.
#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveWorkForm {
    pub client_id: ClientId,
    pub subject_id: SubjectId,
    pub property_id: PropertyId,
    pub service_id: ServiceId,
    /// Derived or free-typed description.
    #[validate(length(min = 1))]
    pub description: String,
    pub amount: Decimal,
}

impl SaveWorkForm {
    /// Builds the payload from the draft; `None` while the four-step
    /// selection is incomplete.
    pub fn from_draft(draft: &WorkDraft) -> Option<Self> {
        Some(Self {
            client_id: draft.client_id?,
            subject_id: draft.subject_id?,
            property_id: draft.property_id?,
            service_id: draft.service_id?,
            description: draft.description.as_str().to_string(),
            amount: draft.amount,
        })
    }
}

impl From<&SaveWorkForm> for NewWork {
    fn from(form: &SaveWorkForm) -> Self {
        Self {
            client_id: form.client_id,
            subject_id: form.subject_id,
            property_id: form.property_id,
            service_id: form.service_id,
            description: form.description.clone(),
            amount: form.amount,
        }
    }
}

impl From<&SaveWorkForm> for UpdateWork {
    fn from(form: &SaveWorkForm) -> Self {
        Self {
            property_id: form.property_id,
            service_id: form.service_id,
            description: form.description.clone(),
            amount: form.amount,
        }
    }
}

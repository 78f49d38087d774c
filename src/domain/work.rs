use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, PropertyId, ServiceId, SubjectId, WorkId};

/// Progress state of a work order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkStatus {
    ToStart,
    InProgress,
    Completed,
    Canceled,
}

/// Settlement state of a work order, maintained by the backend as payments
/// are applied.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkPaymentStatus {
    Unpaid,
    PartiallyPaid,
    Paid,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: WorkId,
    pub client_id: ClientId,
    pub subject_id: Option<SubjectId>,
    pub property_id: Option<PropertyId>,
    pub service_id: Option<ServiceId>,
    pub description: String,
    pub amount: Decimal,
    pub amount_paid: Decimal,
    pub status: WorkStatus,
    pub payment_status: WorkPaymentStatus,
    pub acquisition_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
}

/// Projection of a work order with an outstanding balance, as returned by the
/// unpaid-works listing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnpaidWork {
    pub id: WorkId,
    pub description: String,
    pub amount: Decimal,
    pub amount_paid: Decimal,
    pub payment_status: WorkPaymentStatus,
}

impl UnpaidWork {
    /// Balance still owed on this work, clamped at zero.
    pub fn outstanding(&self) -> Decimal {
        (self.amount - self.amount_paid).max(Decimal::ZERO)
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewWork {
    pub client_id: ClientId,
    pub subject_id: SubjectId,
    pub property_id: PropertyId,
    pub service_id: ServiceId,
    pub description: String,
    pub amount: Decimal,
}

/// Fields that may change on an existing work: client and subject are fixed
/// once the work has been created.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWork {
    pub property_id: PropertyId,
    pub service_id: ServiceId,
    pub description: String,
    pub amount: Decimal,
}

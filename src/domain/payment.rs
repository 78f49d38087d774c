use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClientId, PaymentId, WorkId};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    Card,
    Check,
}

/// State of the payment record itself, distinct from the per-work settlement
/// status tracked on [`crate::domain::work::Work`].
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentState {
    #[default]
    Pending,
    Completed,
    Canceled,
}

/// Association between a payment and one of the works it covers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkPayment {
    pub work_id: WorkId,
    pub amount_paid: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub client_id: ClientId,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentState,
    pub work_payments: Vec<WorkPayment>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub client_id: ClientId,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentState,
    pub work_payments: Vec<WorkPayment>,
}

/// Replacement state for an existing payment. Unlike works, every field of a
/// payment stays editable, so the payload mirrors [`NewPayment`].
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayment {
    pub client_id: ClientId,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub status: PaymentState,
    pub work_payments: Vec<WorkPayment>,
}

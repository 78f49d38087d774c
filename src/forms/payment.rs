use rust_decimal::Decimal;
use serde::Serialize;
use validator::Validate;

use crate::domain::payment::{NewPayment, PaymentMethod, PaymentState, UpdatePayment, WorkPayment};
use crate::domain::types::{ClientId, WorkId};
use crate::drafts::payment::PaymentDraft;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPaymentForm {
    pub work_id: WorkId,
    pub amount_paid: Decimal,
}

/// Submit payload for recording a payment across the selected works.
#[derive(Debug, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SavePaymentForm {
    pub client_id: ClientId,
    pub method: PaymentMethod,
    pub status: PaymentState,
    /// At least one work must be covered.
    #[validate(length(min = 1))]
    pub work_payments: Vec<WorkPaymentForm>,
    /// Always the sum of the per-work allocations.
    pub amount: Decimal,
}

impl SavePaymentForm {
    /// Builds the payload from the draft; `None` until a client and a
    /// payment method have been chosen.
    pub fn from_draft(draft: &PaymentDraft) -> Option<Self> {
        Some(Self {
            client_id: draft.client_id?,
            method: draft.method?,
            status: draft.status,
            work_payments: draft
                .selected_works()
                .iter()
                .map(|sw| WorkPaymentForm {
                    work_id: sw.work_id,
                    amount_paid: sw.amount_paid,
                })
                .collect(),
            amount: draft.total_amount(),
        })
    }

    fn work_payment_records(&self) -> Vec<WorkPayment> {
        self.work_payments
            .iter()
            .map(|wp| WorkPayment {
                work_id: wp.work_id,
                amount_paid: wp.amount_paid,
            })
            .collect()
    }
}

impl From<&SavePaymentForm> for NewPayment {
    fn from(form: &SavePaymentForm) -> Self {
        Self {
            client_id: form.client_id,
            amount: form.amount,
            method: form.method,
            status: form.status,
            work_payments: form.work_payment_records(),
        }
    }
}

impl From<&SavePaymentForm> for UpdatePayment {
    fn from(form: &SavePaymentForm) -> Self {
        Self {
            client_id: form.client_id,
            amount: form.amount,
            method: form.method,
            status: form.status,
            work_payments: form.work_payment_records(),
        }
    }
}

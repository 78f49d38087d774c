use rust_decimal::Decimal;

use crate::domain::payment::{Payment, PaymentMethod, PaymentState};
use crate::domain::types::{ClientId, PaymentId, WorkId};
use crate::domain::work::UnpaidWork;
use crate::drafts::DraftError;

/// One unpaid work included in the payment, with its editable allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedWork {
    pub work_id: WorkId,
    /// Balance the work had outstanding when it was selected; the base for
    /// `amount_to_pay` after manual edits.
    pub outstanding: Decimal,
    pub amount_paid: Decimal,
    pub amount_to_pay: Decimal,
}

/// Mutable draft of a payment distributed across unpaid works.
///
/// `selected_works` and `total_amount` stay private: every mutation goes
/// through a method that re-establishes `total_amount == Σ amount_paid`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentDraft {
    pub id: Option<PaymentId>,
    pub client_id: Option<ClientId>,
    pub method: Option<PaymentMethod>,
    pub status: PaymentState,
    selected_works: Vec<SelectedWork>,
    total_amount: Decimal,
}

impl PaymentDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft preloaded from an existing payment. Allocation bases are looked
    /// up in the unpaid list for the payment's client; associations whose
    /// work no longer appears there keep the recorded allocation as base.
    pub fn for_edit(payment: &Payment, unpaid_works: &[UnpaidWork]) -> Self {
        let selected_works = payment
            .work_payments
            .iter()
            .map(|wp| {
                let outstanding = unpaid_works
                    .iter()
                    .find(|work| work.id == wp.work_id)
                    .map(UnpaidWork::outstanding)
                    .unwrap_or(wp.amount_paid);
                SelectedWork {
                    work_id: wp.work_id,
                    outstanding,
                    amount_paid: wp.amount_paid,
                    amount_to_pay: (outstanding - wp.amount_paid).max(Decimal::ZERO),
                }
            })
            .collect();

        let mut draft = Self {
            id: Some(payment.id),
            client_id: Some(payment.client_id),
            method: Some(payment.method),
            status: payment.status,
            selected_works,
            total_amount: Decimal::ZERO,
        };
        draft.recompute_total();
        draft
    }

    pub fn selected_works(&self) -> &[SelectedWork] {
        &self.selected_works
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn is_selected(&self, work_id: WorkId) -> bool {
        self.selected_works.iter().any(|sw| sw.work_id == work_id)
    }

    /// Switches the client: the works belong to the previous one, so the
    /// whole selection is dropped and the total returns to zero.
    pub fn select_client(&mut self, client_id: ClientId) {
        self.client_id = Some(client_id);
        self.selected_works.clear();
        self.recompute_total();
    }

    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = Some(method);
    }

    pub fn set_status(&mut self, status: PaymentState) {
        self.status = status;
    }

    /// Adds the work to the selection with its outstanding balance as the
    /// default allocation, or removes it if already selected. Idempotent per
    /// id: a work never appears twice.
    pub fn toggle_work(&mut self, work: &UnpaidWork) {
        if let Some(position) = self
            .selected_works
            .iter()
            .position(|sw| sw.work_id == work.id)
        {
            self.selected_works.remove(position);
        } else {
            let outstanding = work.outstanding();
            self.selected_works.push(SelectedWork {
                work_id: work.id,
                outstanding,
                amount_paid: outstanding,
                amount_to_pay: outstanding,
            });
        }
        self.recompute_total();
    }

    /// Overrides the allocation for an already-selected work. Rejects
    /// negative values and unknown ids, leaving the prior state untouched.
    pub fn set_amount_paid(&mut self, work_id: WorkId, value: Decimal) -> Result<(), DraftError> {
        if value < Decimal::ZERO {
            return Err(DraftError::NegativeAmount);
        }
        let entry = self
            .selected_works
            .iter_mut()
            .find(|sw| sw.work_id == work_id)
            .ok_or(DraftError::NotSelected(work_id))?;

        entry.amount_paid = value;
        entry.amount_to_pay = (entry.outstanding - value).max(Decimal::ZERO);
        self.recompute_total();
        Ok(())
    }

    fn recompute_total(&mut self) {
        self.total_amount = self
            .selected_works
            .iter()
            .map(|sw| sw.amount_paid)
            .sum();
    }
}

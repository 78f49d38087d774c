//! Orchestration of the payment dialog: unpaid-work reloads per client and
//! validated submission of the allocation draft.

use rust_decimal::Decimal;

use crate::domain::client::Client;
use crate::domain::payment::{NewPayment, Payment, PaymentMethod, PaymentState, UpdatePayment};
use crate::domain::types::{ClientId, WorkId};
use crate::domain::work::UnpaidWork;
use crate::drafts::dialog::Dialog;
use crate::drafts::payment::PaymentDraft;
use crate::drafts::reference::ReferenceList;
use crate::forms::payment::SavePaymentForm;
use crate::repository::{ClientReader, PaymentWriter, WorkReader};
use crate::services::{ServiceError, ServiceResult};
use validator::Validate;

/// State behind the "Nuovo Pagamento" / "Modifica Pagamento" dialog.
#[derive(Debug, Default)]
pub struct PaymentDialog {
    dialog: Dialog<PaymentDraft>,
    pub clients: ReferenceList<Client>,
    pub unpaid_works: ReferenceList<UnpaidWork>,
}

impl PaymentDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn draft(&self) -> Option<&PaymentDraft> {
        self.dialog.draft()
    }

    /// Opens the dialog on an empty draft, loading the client list. The
    /// unpaid-work list stays empty until a client is chosen.
    pub fn open_create<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: ClientReader + ?Sized,
    {
        self.reload_clients(repo);
        self.unpaid_works.clear();
        self.dialog = Dialog::open_create(PaymentDraft::new());
        Ok(())
    }

    /// Opens the dialog preloaded from an existing payment, with the
    /// unpaid-work list filtered to its client.
    pub fn open_edit<R>(&mut self, repo: &R, payment: &Payment) -> ServiceResult<()>
    where
        R: ClientReader + WorkReader + ?Sized,
    {
        self.reload_clients(repo);
        self.reload_unpaid_works(repo, payment.client_id);
        self.dialog = Dialog::open_edit(PaymentDraft::for_edit(
            payment,
            self.unpaid_works.items(),
        ));
        Ok(())
    }

    /// Client selection: drops the current work selection and reloads the
    /// unpaid-work list for the new client.
    pub fn select_client<R>(&mut self, repo: &R, client_id: ClientId) -> ServiceResult<()>
    where
        R: WorkReader + ?Sized,
    {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .select_client(client_id);
        self.reload_unpaid_works(repo, client_id);
        Ok(())
    }

    /// Includes or excludes the given unpaid work from the payment.
    pub fn toggle_work(&mut self, work_id: WorkId) -> ServiceResult<()> {
        let work = self
            .unpaid_works
            .find(|work| work.id == work_id)
            .cloned()
            .ok_or(ServiceError::NotFound)?;
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .toggle_work(&work);
        Ok(())
    }

    pub fn set_amount_paid(&mut self, work_id: WorkId, value: Decimal) -> ServiceResult<()> {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .set_amount_paid(work_id, value)?;
        Ok(())
    }

    pub fn set_method(&mut self, method: PaymentMethod) -> ServiceResult<()> {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .set_method(method);
        Ok(())
    }

    pub fn set_status(&mut self, status: PaymentState) -> ServiceResult<()> {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .set_status(status);
        Ok(())
    }

    /// Validates the draft and hands it to the backend. On failure the
    /// dialog stays open with the draft intact for a retry.
    pub fn submit<R>(&mut self, repo: &R) -> ServiceResult<Payment>
    where
        R: PaymentWriter + ?Sized,
    {
        let draft = self.dialog.draft().ok_or(ServiceError::DialogClosed)?;
        let form = SavePaymentForm::from_draft(draft)
            .ok_or_else(|| ServiceError::Form("Selezione incompleta".to_string()))?;

        if let Err(err) = form.validate() {
            log::error!("Failed to validate payment form: {err}");
            return Err(ServiceError::Form(
                "Errore di validazione del modulo".to_string(),
            ));
        }

        let saved = match draft.id {
            Some(id) => repo.update_payment(id, &UpdatePayment::from(&form)),
            None => repo.create_payment(&NewPayment::from(&form)),
        }
        .map_err(|err| {
            log::error!("Failed to save payment: {err}");
            err
        })?;

        self.dialog.close();
        Ok(saved)
    }

    pub fn cancel(&mut self) {
        self.dialog.close();
    }

    fn reload_clients<R: ClientReader + ?Sized>(&mut self, repo: &R) {
        let ticket = self.clients.begin_reload();
        let items = match repo.list_clients() {
            Ok(items) => items,
            Err(err) => {
                log::error!("Failed to load clients: {err}");
                Vec::new()
            }
        };
        self.clients.apply(ticket, items);
    }

    fn reload_unpaid_works<R: WorkReader + ?Sized>(&mut self, repo: &R, client_id: ClientId) {
        let ticket = self.unpaid_works.begin_reload();
        let items = match repo.list_unpaid_works(client_id) {
            Ok(items) => items,
            Err(err) => {
                log::error!("Failed to load unpaid works for client {client_id}: {err}");
                Vec::new()
            }
        };
        self.unpaid_works.apply(ticket, items);
    }
}

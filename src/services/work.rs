//! Orchestration of the work dialog: reference-list reloads around the
//! cascading selection, and validated submission of the draft.

use crate::domain::client::Client;
use crate::domain::property::Property;
use crate::domain::service::Service;
use crate::domain::subject::Subject;
use crate::domain::types::{ClientId, PropertyId, ServiceId, SubjectId};
use crate::domain::work::{NewWork, UpdateWork, Work};
use crate::drafts::dialog::Dialog;
use crate::drafts::reference::ReferenceList;
use crate::drafts::work::{ReferenceContext, WorkDraft};
use crate::forms::work::SaveWorkForm;
use crate::repository::{ClientReader, PropertyReader, ServiceReader, SubjectReader, WorkWriter};
use crate::services::{ServiceError, ServiceResult};
use validator::Validate;

/// State behind the "Nuova Pratica" / "Modifica Pratica" dialog.
#[derive(Debug, Default)]
pub struct WorkDialog {
    dialog: Dialog<WorkDraft>,
    pub clients: ReferenceList<Client>,
    pub subjects: ReferenceList<Subject>,
    pub properties: ReferenceList<Property>,
    pub services: ReferenceList<Service>,
}

impl WorkDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_open()
    }

    pub fn draft(&self) -> Option<&WorkDraft> {
        self.dialog.draft()
    }

    /// Opens the dialog on an empty draft, loading the client and service
    /// catalogs.
    pub fn open_create<R>(&mut self, repo: &R) -> ServiceResult<()>
    where
        R: ClientReader + ServiceReader + ?Sized,
    {
        self.reload_clients(repo);
        self.reload_services(repo);
        self.subjects.clear();
        self.properties.clear();
        self.dialog = Dialog::open_create(WorkDraft::new());
        Ok(())
    }

    /// Opens the dialog preloaded from an existing work. Client and subject
    /// are fixed in this mode, so their dependent lists are loaded once from
    /// the stored selection.
    pub fn open_edit<R>(&mut self, repo: &R, work: &Work) -> ServiceResult<()>
    where
        R: ClientReader + ServiceReader + SubjectReader + PropertyReader + ?Sized,
    {
        self.reload_clients(repo);
        self.reload_services(repo);
        self.reload_subjects(repo, work.client_id);
        match work.subject_id {
            Some(subject_id) => self.reload_properties(repo, subject_id),
            None => self.properties.clear(),
        }
        self.dialog = Dialog::open_edit(WorkDraft::for_edit(work));
        Ok(())
    }

    /// Client selection: resets the downstream draft state and reloads the
    /// subject list for the new client.
    pub fn select_client<R>(&mut self, repo: &R, client_id: ClientId) -> ServiceResult<()>
    where
        R: SubjectReader + ?Sized,
    {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .select_client(client_id)?;
        self.properties.clear();
        self.reload_subjects(repo, client_id);
        Ok(())
    }

    /// Subject selection: clears the dependent property choice and reloads
    /// the property list for the new subject.
    pub fn select_subject<R>(&mut self, repo: &R, subject_id: SubjectId) -> ServiceResult<()>
    where
        R: PropertyReader + ?Sized,
    {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .select_subject(subject_id)?;
        self.reload_properties(repo, subject_id);
        Ok(())
    }

    pub fn select_property(&mut self, property_id: PropertyId) -> ServiceResult<()> {
        let refs = ReferenceContext::new(
            self.subjects.items(),
            self.properties.items(),
            self.services.items(),
        );
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .select_property(property_id, &refs);
        Ok(())
    }

    pub fn select_service(&mut self, service_id: ServiceId) -> ServiceResult<()> {
        let refs = ReferenceContext::new(
            self.subjects.items(),
            self.properties.items(),
            self.services.items(),
        );
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .select_service(service_id, &refs);
        Ok(())
    }

    pub fn edit_description<S: Into<String>>(&mut self, text: S) -> ServiceResult<()> {
        self.dialog
            .draft_mut()
            .ok_or(ServiceError::DialogClosed)?
            .edit_description(text);
        Ok(())
    }

    /// Validates the draft and hands it to the backend. On failure the
    /// dialog stays open with the draft intact for a retry.
    pub fn submit<R>(&mut self, repo: &R) -> ServiceResult<Work>
    where
        R: WorkWriter + ?Sized,
    {
        let draft = self.dialog.draft().ok_or(ServiceError::DialogClosed)?;
        let form = SaveWorkForm::from_draft(draft)
            .ok_or_else(|| ServiceError::Form("Selezione incompleta".to_string()))?;

        if let Err(err) = form.validate() {
            log::error!("Failed to validate work form: {err}");
            return Err(ServiceError::Form(
                "Errore di validazione del modulo".to_string(),
            ));
        }

        let saved = match draft.id {
            Some(id) => repo.update_work(id, &UpdateWork::from(&form)),
            None => repo.create_work(&NewWork::from(&form)),
        }
        .map_err(|err| {
            log::error!("Failed to save work: {err}");
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

    fn reload_services<R: ServiceReader + ?Sized>(&mut self, repo: &R) {
        let ticket = self.services.begin_reload();
        let items = match repo.list_services() {
            Ok(items) => items,
            Err(err) => {
                log::error!("Failed to load services: {err}");
                Vec::new()
            }
        };
        self.services.apply(ticket, items);
    }

    fn reload_subjects<R: SubjectReader + ?Sized>(&mut self, repo: &R, client_id: ClientId) {
        let ticket = self.subjects.begin_reload();
        let items = match repo.list_subjects_by_client(client_id) {
            Ok(items) => items,
            Err(err) => {
                log::error!("Failed to load subjects for client {client_id}: {err}");
                Vec::new()
            }
        };
        self.subjects.apply(ticket, items);
    }

    fn reload_properties<R: PropertyReader + ?Sized>(&mut self, repo: &R, subject_id: SubjectId) {
        let ticket = self.properties.begin_reload();
        let items = match repo.list_properties_by_subject(subject_id) {
            Ok(items) => items,
            Err(err) => {
                log::error!("Failed to load properties for subject {subject_id}: {err}");
                Vec::new()
            }
        };
        self.properties.apply(ticket, items);
    }
}

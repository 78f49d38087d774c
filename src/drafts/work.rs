use rust_decimal::Decimal;

use crate::domain::property::Property;
use crate::domain::service::Service;
use crate::domain::subject::Subject;
use crate::domain::types::{ClientId, PropertyId, ServiceId, SubjectId, WorkId};
use crate::domain::work::Work;
use crate::drafts::DraftError;
use crate::drafts::description::{self, DescriptionField};

/// Resolved reference data the work draft derives from. Lookups that miss
/// (stale or still-loading lists) simply skip the derivation.
#[derive(Clone, Copy, Debug)]
pub struct ReferenceContext<'a> {
    subjects: &'a [Subject],
    properties: &'a [Property],
    services: &'a [Service],
}

impl<'a> ReferenceContext<'a> {
    pub fn new(
        subjects: &'a [Subject],
        properties: &'a [Property],
        services: &'a [Service],
    ) -> Self {
        Self {
            subjects,
            properties,
            services,
        }
    }

    fn subject(&self, id: SubjectId) -> Option<&'a Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    fn property(&self, id: PropertyId) -> Option<&'a Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    fn service(&self, id: ServiceId) -> Option<&'a Service> {
        self.services.iter().find(|s| s.id == id)
    }
}

/// Mutable draft of a work order edited across the four-step selection.
///
/// `description` and `amount` are derived from the selection; downstream
/// selections never survive an upstream change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WorkDraft {
    pub id: Option<WorkId>,
    pub client_id: Option<ClientId>,
    pub subject_id: Option<SubjectId>,
    pub property_id: Option<PropertyId>,
    pub service_id: Option<ServiceId>,
    pub description: DescriptionField,
    pub amount: Decimal,
}

impl WorkDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft preloaded from an existing work. The stored description counts
    /// as derived, so a new property/service selection replaces it.
    pub fn for_edit(work: &Work) -> Self {
        Self {
            id: Some(work.id),
            client_id: Some(work.client_id),
            subject_id: work.subject_id,
            property_id: work.property_id,
            service_id: work.service_id,
            description: DescriptionField::Derived(work.description.clone()),
            amount: work.amount,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Switches the client, resetting every dependent selection along with
    /// the derived description and amount.
    pub fn select_client(&mut self, client_id: ClientId) -> Result<(), DraftError> {
        if self.is_edit() {
            return Err(DraftError::SelectionLocked);
        }
        self.client_id = Some(client_id);
        self.subject_id = None;
        self.property_id = None;
        self.service_id = None;
        self.description.reset();
        self.amount = Decimal::ZERO;
        Ok(())
    }

    /// Switches the subject. Property choices depend on the subject, so the
    /// property selection and any property-derived description are cleared.
    pub fn select_subject(&mut self, subject_id: SubjectId) -> Result<(), DraftError> {
        if self.is_edit() {
            return Err(DraftError::SelectionLocked);
        }
        self.subject_id = Some(subject_id);
        self.property_id = None;
        self.description.clear_derived();
        Ok(())
    }

    /// Selects a property; recomputes the description when a service is
    /// already chosen.
    pub fn select_property(&mut self, property_id: PropertyId, refs: &ReferenceContext<'_>) {
        self.property_id = Some(property_id);
        if self.service_id.is_some() {
            self.recompose(refs);
        }
    }

    /// Selects a service, taking its catalog price as the draft amount (zero
    /// when the lookup misses); recomputes the description when subject and
    /// property are already chosen.
    pub fn select_service(&mut self, service_id: ServiceId, refs: &ReferenceContext<'_>) {
        self.service_id = Some(service_id);
        self.amount = refs
            .service(service_id)
            .map(|service| service.amount)
            .unwrap_or(Decimal::ZERO);
        if self.subject_id.is_some() && self.property_id.is_some() {
            self.recompose(refs);
        }
    }

    /// Records a free-typed description, overriding the derived one.
    pub fn edit_description<S: Into<String>>(&mut self, text: S) {
        self.description.user_edit(text);
    }

    fn recompose(&mut self, refs: &ReferenceContext<'_>) {
        let (Some(subject_id), Some(property_id), Some(service_id)) =
            (self.subject_id, self.property_id, self.service_id)
        else {
            return;
        };
        let (Some(subject), Some(property), Some(service)) = (
            refs.subject(subject_id),
            refs.property(property_id),
            refs.service(service_id),
        ) else {
            return;
        };
        self.description
            .derive(description::compose(subject, service, property));
    }
}

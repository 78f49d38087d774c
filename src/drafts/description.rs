use crate::domain::property::Property;
use crate::domain::service::Service;
use crate::domain::subject::Subject;

/// Work description with an explicit origin tag.
///
/// The value is either derived from the current selection or free-typed by
/// the user. Cascade resets clear only derived content, so a manual edit is
/// never silently discarded by an unrelated upstream change; a new full
/// (subject, property, service) selection re-derives and replaces whatever is
/// there, like the original form did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescriptionField {
    Derived(String),
    UserEdited(String),
}

impl DescriptionField {
    pub fn empty() -> Self {
        Self::Derived(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Derived(text) | Self::UserEdited(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }

    pub fn is_user_edited(&self) -> bool {
        matches!(self, Self::UserEdited(_))
    }

    /// Records a free-typed value.
    pub fn user_edit<S: Into<String>>(&mut self, text: S) {
        *self = Self::UserEdited(text.into());
    }

    /// Installs a newly derived value, replacing any previous content.
    pub fn derive<S: Into<String>>(&mut self, text: S) {
        *self = Self::Derived(text.into());
    }

    /// Clears derived content only; manual edits survive.
    pub fn clear_derived(&mut self) {
        if matches!(self, Self::Derived(_)) {
            *self = Self::empty();
        }
    }

    /// Clears unconditionally.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    pub fn into_inner(self) -> String {
        match self {
            Self::Derived(text) | Self::UserEdited(text) => text,
        }
    }
}

impl Default for DescriptionField {
    fn default() -> Self {
        Self::empty()
    }
}

/// Deterministic description template: subject name, service name, property
/// location.
pub fn compose(subject: &Subject, service: &Service, property: &Property) -> String {
    format!(
        "{} - {} presso {}",
        subject.display_name(),
        service.name,
        property.location()
    )
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::types::{PropertyId, ServiceId, SubjectId};

    fn subject() -> Subject {
        Subject {
            id: SubjectId::new(1).expect("valid id"),
            client_id: crate::domain::types::ClientId::new(1).expect("valid id"),
            first_name: "Mario".to_string(),
            last_name: "Rossi".to_string(),
            tax_id: None,
        }
    }

    fn service() -> Service {
        Service {
            id: ServiceId::new(1).expect("valid id"),
            name: "Certificazione energetica".to_string(),
            amount: Decimal::from(250),
        }
    }

    fn property(city: Option<&str>) -> Property {
        Property {
            id: PropertyId::new(1).expect("valid id"),
            subject_id: SubjectId::new(1).expect("valid id"),
            address: "Via Roma 1".to_string(),
            city: city.map(str::to_string),
        }
    }

    #[test]
    fn template_has_three_slots() {
        let text = compose(&subject(), &service(), &property(Some("Milano")));
        assert_eq!(
            text,
            "Rossi Mario - Certificazione energetica presso Via Roma 1, Milano"
        );
    }

    #[test]
    fn template_is_idempotent() {
        let first = compose(&subject(), &service(), &property(Some("Milano")));
        let second = compose(&subject(), &service(), &property(Some("Milano")));
        assert_eq!(first, second);
    }

    #[test]
    fn template_falls_back_to_address_without_city() {
        let text = compose(&subject(), &service(), &property(None));
        assert_eq!(
            text,
            "Rossi Mario - Certificazione energetica presso Via Roma 1"
        );
    }

    #[test]
    fn clear_derived_preserves_manual_edits() {
        let mut field = DescriptionField::empty();
        field.user_edit("nota manuale");
        field.clear_derived();
        assert_eq!(field.as_str(), "nota manuale");

        field.derive("testo derivato");
        field.clear_derived();
        assert!(field.is_empty());
    }
}

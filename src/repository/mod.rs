use crate::domain::client::Client;
use crate::domain::payment::{NewPayment, Payment, UpdatePayment};
use crate::domain::property::Property;
use crate::domain::service::Service;
use crate::domain::subject::Subject;
use crate::domain::types::{ClientId, PaymentId, SubjectId, WorkId};
use crate::domain::work::{NewWork, UnpaidWork, UpdateWork, Work};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod rest;

pub use rest::RestRepository;

pub trait ClientReader {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>>;
    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>>;
}

pub trait SubjectReader {
    fn list_subjects_by_client(&self, client_id: ClientId) -> RepositoryResult<Vec<Subject>>;
}

pub trait PropertyReader {
    fn list_properties_by_subject(&self, subject_id: SubjectId) -> RepositoryResult<Vec<Property>>;
}

pub trait ServiceReader {
    fn list_services(&self) -> RepositoryResult<Vec<Service>>;
}

pub trait WorkReader {
    fn get_work_by_id(&self, id: WorkId) -> RepositoryResult<Option<Work>>;
    fn list_unpaid_works(&self, client_id: ClientId) -> RepositoryResult<Vec<UnpaidWork>>;
}

pub trait WorkWriter {
    fn create_work(&self, new_work: &NewWork) -> RepositoryResult<Work>;
    fn update_work(&self, id: WorkId, updates: &UpdateWork) -> RepositoryResult<Work>;
    fn delete_work(&self, id: WorkId) -> RepositoryResult<()>;
}

pub trait PaymentReader {
    fn list_payments(&self) -> RepositoryResult<Vec<Payment>>;
    fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<Payment>>;
}

pub trait PaymentWriter {
    fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment>;
    fn update_payment(&self, id: PaymentId, updates: &UpdatePayment) -> RepositoryResult<Payment>;
    fn delete_payment(&self, id: PaymentId) -> RepositoryResult<()>;
}

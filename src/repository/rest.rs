//! Repository implementation backed by the studio REST API.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client as HttpClient, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::client::Client;
use crate::domain::payment::{NewPayment, Payment, UpdatePayment};
use crate::domain::property::Property;
use crate::domain::service::Service;
use crate::domain::subject::Subject;
use crate::domain::types::{ClientId, PaymentId, SubjectId, WorkId};
use crate::domain::work::{NewWork, UnpaidWork, UpdateWork, Work};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    ClientReader, PaymentReader, PaymentWriter, PropertyReader, ServiceReader, SubjectReader,
    WorkReader, WorkWriter,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP client for the backend, with optional bearer-token auth.
#[derive(Clone, Debug)]
pub struct RestRepository {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl RestRepository {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> RepositoryResult<Self> {
        let http = HttpClient::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn check(response: Response) -> RepositoryResult<Response> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(RepositoryError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> RepositoryResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.get(self.url(path)))
            .query(query)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn post_json<B, T>(&self, path: &str, body: &B) -> RepositoryResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.post(self.url(path)))
            .json(body)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn put_json<B, T>(&self, path: &str, body: &B) -> RepositoryResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .authorize(self.http.put(self.url(path)))
            .json(body)
            .send()?;
        Ok(Self::check(response)?.json()?)
    }

    fn delete(&self, path: &str) -> RepositoryResult<()> {
        let response = self.authorize(self.http.delete(self.url(path))).send()?;
        Self::check(response)?;
        Ok(())
    }
}

impl ClientReader for RestRepository {
    fn list_clients(&self) -> RepositoryResult<Vec<Client>> {
        self.get_json("/clients", &[])
    }

    fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<Client>> {
        match self.get_json(&format!("/clients/{id}"), &[]) {
            Ok(client) => Ok(Some(client)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl SubjectReader for RestRepository {
    fn list_subjects_by_client(&self, client_id: ClientId) -> RepositoryResult<Vec<Subject>> {
        self.get_json(&format!("/subjects/client/{client_id}"), &[])
    }
}

impl PropertyReader for RestRepository {
    // The backend exposes no per-subject filter on the property collection,
    // so the full list is fetched and narrowed here.
    fn list_properties_by_subject(&self, subject_id: SubjectId) -> RepositoryResult<Vec<Property>> {
        let properties: Vec<Property> = self.get_json("/properties", &[])?;
        Ok(properties
            .into_iter()
            .filter(|property| property.subject_id == subject_id)
            .collect())
    }
}

impl ServiceReader for RestRepository {
    fn list_services(&self) -> RepositoryResult<Vec<Service>> {
        self.get_json("/services", &[])
    }
}

impl WorkReader for RestRepository {
    fn get_work_by_id(&self, id: WorkId) -> RepositoryResult<Option<Work>> {
        match self.get_json(&format!("/work/{id}"), &[]) {
            Ok(work) => Ok(Some(work)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn list_unpaid_works(&self, client_id: ClientId) -> RepositoryResult<Vec<UnpaidWork>> {
        self.get_json("/work/unpaid", &[("clientId", client_id.to_string())])
    }
}

impl WorkWriter for RestRepository {
    fn create_work(&self, new_work: &NewWork) -> RepositoryResult<Work> {
        self.post_json("/work", new_work)
    }

    fn update_work(&self, id: WorkId, updates: &UpdateWork) -> RepositoryResult<Work> {
        self.put_json(&format!("/work/{id}"), updates)
    }

    fn delete_work(&self, id: WorkId) -> RepositoryResult<()> {
        self.delete(&format!("/work/{id}"))
    }
}

impl PaymentReader for RestRepository {
    fn list_payments(&self) -> RepositoryResult<Vec<Payment>> {
        self.get_json("/payments", &[])
    }

    fn get_payment_by_id(&self, id: PaymentId) -> RepositoryResult<Option<Payment>> {
        match self.get_json(&format!("/payments/{id}"), &[]) {
            Ok(payment) => Ok(Some(payment)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl PaymentWriter for RestRepository {
    fn create_payment(&self, new_payment: &NewPayment) -> RepositoryResult<Payment> {
        self.post_json("/payments", new_payment)
    }

    fn update_payment(&self, id: PaymentId, updates: &UpdatePayment) -> RepositoryResult<Payment> {
        self.put_json(&format!("/payments/{id}"), updates)
    }

    fn delete_payment(&self, id: PaymentId) -> RepositoryResult<()> {
        self.delete(&format!("/payments/{id}"))
    }
}

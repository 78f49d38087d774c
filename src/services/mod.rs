use thiserror::Error;

use crate::drafts::DraftError;
use crate::repository::errors::RepositoryError;

pub mod payment;
pub mod work;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("No dialog is open")]
    DialogClosed,

    #[error("Form validation error: {0}")]
    Form(String),

    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

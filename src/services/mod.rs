//! Use-case functions invoked by the front-end.
//!
//! Each function either applies its change completely or returns an error
//! before touching the store.

use thiserror::Error;

use crate::forms::FormErrors;
use crate::store::StoreError;

pub mod directory;
pub mod employee;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("employee not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(FormErrors),

    #[error("page {0} is out of range")]
    PageOutOfRange(usize),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

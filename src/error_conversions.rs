//! Error conversion glue between layers.
//!
//! The domain and form layers must not depend on service error types, so the
//! conversions into [`ServiceError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormErrors;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormErrors> for ServiceError {
    fn from(val: FormErrors) -> Self {
        ServiceError::Validation(val)
    }
}

use std::borrow::Cow;

use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::EmployeeId;
use crate::forms::rules::validate_field;
use crate::forms::{EmployeeField, FieldError, FormErrors};
use crate::repository::EmployeeReader;

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email address already exists";

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Form data for adding or editing an employee.
pub struct EmployeeForm {
    #[validate(custom(function = "validate_first_name"))]
    pub first_name: String,
    #[validate(custom(function = "validate_last_name"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    #[validate(custom(function = "validate_department"))]
    pub department: String,
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

fn check(field: EmployeeField, value: &str) -> Result<(), ValidationError> {
    validate_field(field, value).map_err(|err| {
        let mut error = ValidationError::new("invalid");
        error.message = Some(Cow::Owned(err.message));
        error
    })
}

fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    check(EmployeeField::FirstName, value)
}

fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    check(EmployeeField::LastName, value)
}

fn validate_email_field(value: &str) -> Result<(), ValidationError> {
    check(EmployeeField::Email, value)
}

fn validate_department(value: &str) -> Result<(), ValidationError> {
    check(EmployeeField::Department, value)
}

fn validate_role(value: &str) -> Result<(), ValidationError> {
    check(EmployeeField::Role, value)
}

impl From<ValidationErrors> for FormErrors {
    fn from(errors: ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let mut form_errors = FormErrors::default();

        for field in EmployeeField::ALL {
            let Some(field_errors) = by_field.get(field.as_str()) else {
                continue;
            };
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |message| message.to_string());
                form_errors.push(FieldError::new(field, message));
            }
        }

        form_errors
    }
}

impl EmployeeForm {
    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::Email => &self.email,
            EmployeeField::Department => &self.department,
            EmployeeField::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: EmployeeField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EmployeeField::FirstName => self.first_name = value,
            EmployeeField::LastName => self.last_name = value,
            EmployeeField::Email => self.email = value,
            EmployeeField::Department => self.department = value,
            EmployeeField::Role => self.role = value,
        }
    }

    /// Validates every field and checks the email against the live records.
    ///
    /// `exclude_id` is the record being edited, whose own email is not a
    /// collision. All failures are collected, not only the first.
    pub fn validate_record<R>(
        &self,
        reader: &R,
        exclude_id: Option<EmployeeId>,
    ) -> Result<(), FormErrors>
    where
        R: EmployeeReader + ?Sized,
    {
        let mut errors = match self.validate() {
            Ok(()) => FormErrors::default(),
            Err(errors) => FormErrors::from(errors),
        };

        if !errors.has(EmployeeField::Email)
            && reader
                .find_employee_by_email(&self.email, exclude_id)
                .is_some()
        {
            errors.push(FieldError::new(
                EmployeeField::Email,
                DUPLICATE_EMAIL_MESSAGE,
            ));
        }

        errors.into_result()
    }
}

impl From<&Employee> for EmployeeForm {
    /// Pre-fills the edit form with the stored values.
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            department: employee.department.clone(),
            role: employee.role.clone(),
        }
    }
}

impl From<&EmployeeForm> for NewEmployee {
    fn from(form: &EmployeeForm) -> Self {
        NewEmployee::new(
            &form.first_name,
            &form.last_name,
            &form.email,
            form.department.clone(),
            form.role.clone(),
        )
    }
}

impl From<&EmployeeForm> for UpdateEmployee {
    fn from(form: &EmployeeForm) -> Self {
        UpdateEmployee::new(
            &form.first_name,
            &form.last_name,
            &form.email,
            form.department.clone(),
            form.role.clone(),
        )
    }
}

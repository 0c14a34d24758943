//! Form definitions and field validation for employee records.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::domain::types::TypeConstraintError;

pub mod employee;
pub mod rules;

/// Input field of the employee form.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeField {
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl EmployeeField {
    /// Fields in the order they appear on the form.
    pub const ALL: [EmployeeField; 5] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::Email,
        EmployeeField::Department,
        EmployeeField::Role,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "first_name",
            EmployeeField::LastName => "last_name",
            EmployeeField::Email => "email",
            EmployeeField::Department => "department",
            EmployeeField::Role => "role",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EmployeeField::FirstName => "First name",
            EmployeeField::LastName => "Last name",
            EmployeeField::Email => "Email",
            EmployeeField::Department => "Department",
            EmployeeField::Role => "Role",
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        EmployeeField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted || field.as_str().replace('_', "") == wanted)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

/// A single rule violation on one form field.
#[derive(Clone, Debug, Error, Serialize, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    pub field: EmployeeField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: EmployeeField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every violation found while validating a form, in form order.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<FieldError>,
}

impl FormErrors {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded against `field`, if any.
    pub fn get(&self, field: EmployeeField) -> Option<&str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn has(&self, field: EmployeeField) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for FormErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for FormErrors {}

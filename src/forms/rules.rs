//! Field-level validation predicates.

use std::sync::LazyLock;

use regex::Regex;

use crate::forms::{EmployeeField, FieldError};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex pattern"));
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("Invalid regex pattern"));

/// `true` when the value holds something other than whitespace.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Structural email check: `local@domain.tld` with no whitespace anywhere.
pub fn valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Letters, whitespace, apostrophes and hyphens only; at least two characters once trimmed.
pub fn valid_name(value: &str) -> bool {
    NAME_PATTERN.is_match(value) && value.trim().chars().count() >= 2
}

fn required_message(field: EmployeeField) -> &'static str {
    match field {
        EmployeeField::FirstName => "First name is required",
        EmployeeField::LastName => "Last name is required",
        EmployeeField::Email => "Email is required",
        EmployeeField::Department => "Department is required",
        EmployeeField::Role => "Role is required",
    }
}

/// Applies the presence and format rules for `field`, stopping at the first failure.
pub fn validate_field(field: EmployeeField, value: &str) -> Result<(), FieldError> {
    if !required(value) {
        return Err(FieldError::new(field, required_message(field)));
    }

    let (well_formed, message) = match field {
        EmployeeField::FirstName => (valid_name(value), "Please enter a valid first name"),
        EmployeeField::LastName => (valid_name(value), "Please enter a valid last name"),
        EmployeeField::Email => (valid_email(value), "Please enter a valid email address"),
        EmployeeField::Department | EmployeeField::Role => return Ok(()),
    };

    if well_formed {
        Ok(())
    } else {
        Err(FieldError::new(field, message))
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{EmployeeId, normalize_email};

/// One employee entry held by the directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    /// Always trimmed and lower-cased.
    pub email: String,
    pub department: String,
    pub role: String,
    /// Set when the record is added through the directory; seed data may omit it.
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Employee {
    /// Builds a record from already-stored values, normalizing the email.
    #[must_use]
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: &str,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: normalize_email(email),
            department: department.into(),
            role: role.into(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Values for a record that has not been assigned an id yet.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: normalize_email(email),
            department: department.into(),
            role: role.into(),
        }
    }

    /// Materializes the record under the given id and creation time.
    pub fn into_employee(self, id: EmployeeId, created_at: NaiveDateTime) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            department: self.department,
            role: self.role,
            created_at: Some(created_at),
            updated_at: None,
        }
    }
}

/// Replacement values for an existing record. The id is never part of an update.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
}

impl UpdateEmployee {
    #[must_use]
    pub fn new(
        first_name: &str,
        last_name: &str,
        email: &str,
        department: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: normalize_email(email),
            department: department.into(),
            role: role.into(),
        }
    }

    /// Overwrites the editable fields of `employee` and stamps the update time.
    pub fn apply_to(&self, employee: &mut Employee, updated_at: NaiveDateTime) {
        employee.first_name = self.first_name.clone();
        employee.last_name = self.last_name.clone();
        employee.email = self.email.clone();
        employee.department = self.department.clone();
        employee.role = self.role.clone();
        employee.updated_at = Some(updated_at);
    }
}

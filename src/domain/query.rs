//! Filter and sort criteria applied to the employee list.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::employee::Employee;
use crate::domain::types::TypeConstraintError;

/// Conjunctive filter criteria. An empty string places no constraint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeFilter {
    /// Free-text search over first name, last name and email. Stored lower-cased.
    pub search: String,
    /// Case-insensitive substring of the first name.
    pub first_name: String,
    /// Exact department.
    pub department: String,
    /// Exact role.
    pub role: String,
}

/// Partial update of [`EmployeeFilter`]; only the fields that are `Some` change.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct EmployeeFilterPatch {
    pub search: Option<String>,
    pub first_name: Option<String>,
    pub department: Option<String>,
    pub role: Option<String>,
}

impl EmployeeFilterPatch {
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn department(mut self, value: impl Into<String>) -> Self {
        self.department = Some(value.into());
        self
    }

    pub fn role(mut self, value: impl Into<String>) -> Self {
        self.role = Some(value.into());
        self
    }
}

impl EmployeeFilter {
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.first_name.is_empty()
            && self.department.is_empty()
            && self.role.is_empty()
    }

    /// Sets the free-text search term.
    pub fn set_search(&mut self, text: &str) {
        self.search = text.to_lowercase();
    }

    /// Merges the fields carried by `patch` into the current criteria.
    pub fn apply(&mut self, patch: EmployeeFilterPatch) {
        if let Some(search) = patch.search {
            self.set_search(&search);
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(department) = patch.department {
            self.department = department;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
    }

    /// Returns `true` when the employee satisfies every active constraint.
    pub fn matches(&self, employee: &Employee) -> bool {
        if !self.search.is_empty() {
            let hit = [&employee.first_name, &employee.last_name, &employee.email]
                .iter()
                .any(|value| value.to_lowercase().contains(&self.search));
            if !hit {
                return false;
            }
        }

        if !self.first_name.is_empty()
            && !employee
                .first_name
                .to_lowercase()
                .contains(&self.first_name.to_lowercase())
        {
            return false;
        }

        if !self.department.is_empty() && employee.department != self.department {
            return false;
        }

        self.role.is_empty() || employee.role == self.role
    }
}

/// Record attribute the list can be ordered by.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    Department,
    Role,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Id,
        SortField::FirstName,
        SortField::LastName,
        SortField::Email,
        SortField::Department,
        SortField::Role,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::Email => "email",
            SortField::Department => "department",
            SortField::Role => "role",
        }
    }

    fn text(self, employee: &Employee) -> &str {
        match self {
            SortField::Id => "",
            SortField::FirstName => &employee.first_name,
            SortField::LastName => &employee.last_name,
            SortField::Email => &employee.email,
            SortField::Department => &employee.department,
            SortField::Role => &employee.role,
        }
    }

    /// Ascending three-way comparison: ids numerically, text case-insensitively.
    pub fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            _ => self
                .text(a)
                .to_lowercase()
                .cmp(&self.text(b).to_lowercase()),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        match wanted.as_str() {
            "firstname" => return Ok(SortField::FirstName),
            "lastname" => return Ok(SortField::LastName),
            _ => {}
        }
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == wanted)
            .ok_or_else(|| TypeConstraintError::InvalidValue(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(TypeConstraintError::InvalidValue(s.to_string())),
        }
    }
}

/// Field and direction used to order the filtered list.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Newest records first.
    pub const fn newest_first() -> Self {
        Self::new(SortField::Id, SortOrder::Desc)
    }

    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        let ordering = self.field.compare(a, b);
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    /// Stable sort: records comparing equal keep their relative order.
    pub fn sort(&self, employees: &mut [Employee]) {
        employees.sort_by(|a, b| self.compare(a, b));
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::newest_first()
    }
}

use serde::Serialize;

use crate::domain::employee::Employee;
use crate::domain::query::{EmployeeFilter, SortSpec};
use crate::pagination::Paginated;

/// Requested page movement from the pager.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    Number(usize),
    Next,
    Previous,
}

/// Data required to render the directory listing.
#[derive(Serialize)]
pub struct DirectoryPageData {
    /// Current page of employees, with pager state.
    pub employees: Paginated<Employee>,
    /// Active filter criteria, echoed back to the view.
    pub filter: EmployeeFilter,
    pub sort: SortSpec,
    /// Department choices for the filter panel.
    pub departments: Vec<String>,
    /// Role choices for the filter panel.
    pub roles: Vec<String>,
}

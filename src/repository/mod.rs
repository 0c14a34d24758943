//! Read/write seams over the employee record set.
//!
//! Services and the validator depend on these traits rather than on
//! [`EmployeeStore`] directly, so the duplicate-email rule always reads the
//! live records it is given and tests can substitute a mock.

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::EmployeeId;
use crate::store::{EmployeeStore, StoreResult};

#[cfg(feature = "test-mocks")]
pub mod mock;

pub trait EmployeeReader {
    fn get_employee_by_id(&self, id: EmployeeId) -> Option<Employee>;
    /// Finds a record whose email equals `email` ignoring case, skipping `exclude`.
    fn find_employee_by_email(&self, email: &str, exclude: Option<EmployeeId>)
    -> Option<Employee>;
}

pub trait EmployeeWriter {
    fn create_employee(&mut self, new_employee: NewEmployee) -> StoreResult<Employee>;
    fn update_employee(&mut self, id: EmployeeId, updates: &UpdateEmployee) -> Option<Employee>;
    fn delete_employee(&mut self, id: EmployeeId) -> Option<Employee>;
}

impl EmployeeReader for EmployeeStore {
    fn get_employee_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.get(id).cloned()
    }

    fn find_employee_by_email(
        &self,
        email: &str,
        exclude: Option<EmployeeId>,
    ) -> Option<Employee> {
        let wanted = email.trim().to_lowercase();
        self.all()
            .iter()
            .filter(|employee| Some(employee.id) != exclude)
            .find(|employee| employee.email.to_lowercase() == wanted)
            .cloned()
    }
}

impl EmployeeWriter for EmployeeStore {
    fn create_employee(&mut self, new_employee: NewEmployee) -> StoreResult<Employee> {
        self.add(new_employee)
    }

    fn update_employee(&mut self, id: EmployeeId, updates: &UpdateEmployee) -> Option<Employee> {
        self.update(id, updates)
    }

    fn delete_employee(&mut self, id: EmployeeId) -> Option<Employee> {
        self.remove(id)
    }
}

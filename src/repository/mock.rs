//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::EmployeeId;
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::store::StoreResult;

mock! {
    pub Repository {}

    impl EmployeeReader for Repository {
        fn get_employee_by_id(&self, id: EmployeeId) -> Option<Employee>;
        fn find_employee_by_email(
            &self,
            email: &str,
            exclude: Option<EmployeeId>,
        ) -> Option<Employee>;
    }

    impl EmployeeWriter for Repository {
        fn create_employee(&mut self, new_employee: NewEmployee) -> StoreResult<Employee>;
        fn update_employee(
            &mut self,
            id: EmployeeId,
            updates: &UpdateEmployee,
        ) -> Option<Employee>;
        fn delete_employee(&mut self, id: EmployeeId) -> Option<Employee>;
    }
}

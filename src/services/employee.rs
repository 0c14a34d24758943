use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::domain::types::EmployeeId;
use crate::forms::employee::EmployeeForm;
use crate::repository::{EmployeeReader, EmployeeWriter};
use crate::services::{ServiceError, ServiceResult};

/// Fetches a single employee, e.g. to pre-fill the edit form.
pub fn get_employee<R>(repo: &R, id: EmployeeId) -> ServiceResult<Employee>
where
    R: EmployeeReader + ?Sized,
{
    repo.get_employee_by_id(id).ok_or(ServiceError::NotFound)
}

/// Validates the form against the live records and adds a new employee.
pub fn add_employee<R>(repo: &mut R, form: &EmployeeForm) -> ServiceResult<Employee>
where
    R: EmployeeReader + EmployeeWriter + ?Sized,
{
    if let Err(errors) = form.validate_record(&*repo, None) {
        log::error!("Failed to validate form: {errors}");
        return Err(errors.into());
    }

    let created = repo.create_employee(NewEmployee::from(form)).map_err(|e| {
        log::error!("Failed to add employee: {e}");
        ServiceError::from(e)
    })?;
    log::info!("Added employee {} ({})", created.id, created.email);
    Ok(created)
}

/// Validates the form and overwrites the employee `id` with it.
pub fn update_employee<R>(
    repo: &mut R,
    id: EmployeeId,
    form: &EmployeeForm,
) -> ServiceResult<Employee>
where
    R: EmployeeReader + EmployeeWriter + ?Sized,
{
    if let Err(errors) = form.validate_record(&*repo, Some(id)) {
        log::error!("Failed to validate form for employee {id}: {errors}");
        return Err(errors.into());
    }

    let updated = repo
        .update_employee(id, &UpdateEmployee::from(form))
        .ok_or_else(|| {
            log::error!("Cannot update employee {id}: not found");
            ServiceError::NotFound
        })?;
    log::info!("Updated employee {id}");
    Ok(updated)
}

/// Deletes the employee `id`, returning the removed record.
pub fn delete_employee<R>(repo: &mut R, id: EmployeeId) -> ServiceResult<Employee>
where
    R: EmployeeWriter + ?Sized,
{
    let removed = repo.delete_employee(id).ok_or_else(|| {
        log::error!("Cannot delete employee {id}: not found");
        ServiceError::NotFound
    })?;
    log::info!("Deleted employee {id}");
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::EmployeeField;
    use crate::store::EmployeeStore;

    fn store() -> EmployeeStore {
        EmployeeStore::new(vec![
            Employee::new(EmployeeId::new(1).unwrap(), "Alice", "Smith", "alice@x.com", "Eng", "Dev"),
            Employee::new(EmployeeId::new(2).unwrap(), "Bob", "Brown", "bob@x.com", "Sales", "Rep"),
        ])
        .unwrap()
    }

    fn form(first_name: &str, email: &str) -> EmployeeForm {
        EmployeeForm {
            first_name: first_name.to_string(),
            last_name: "Jones".to_string(),
            email: email.to_string(),
            department: "Eng".to_string(),
            role: "Dev".to_string(),
        }
    }

    #[test]
    fn add_stores_normalized_record() {
        let mut store = store();
        let created = add_employee(&mut store, &form("Carl", "CARL@X.com")).unwrap();

        assert_eq!(created.id.get(), 3);
        assert_eq!(created.email, "carl@x.com");
        assert_eq!(store.visible_slice()[0].id, created.id);
    }

    #[test]
    fn invalid_add_leaves_store_untouched() {
        let mut store = store();
        let result = add_employee(&mut store, &form("A", "alice@x.com"));

        match result {
            Err(ServiceError::Validation(errors)) => {
                assert!(errors.has(EmployeeField::FirstName));
                assert!(errors.has(EmployeeField::Email));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(store.len(), 2);
        assert_eq!(store.next_id().get(), 3);
    }

    #[test]
    fn update_allows_keeping_own_email() {
        let mut store = store();
        let alice = EmployeeId::new(1).unwrap();
        let updated = update_employee(&mut store, alice, &form("Alicia", "alice@x.com")).unwrap();
        assert_eq!(updated.first_name, "Alicia");
    }

    #[test]
    fn update_after_removal_is_not_found() {
        let mut store = store();
        let bob = EmployeeId::new(2).unwrap();
        delete_employee(&mut store, bob).unwrap();
        let before = store.all().to_vec();

        let result = update_employee(&mut store, bob, &form("Bobby", "bobby@x.com"));

        assert!(matches!(result, Err(ServiceError::NotFound)));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn delete_unknown_is_not_found() {
        let mut store = store();
        let result = delete_employee(&mut store, EmployeeId::new(99).unwrap());
        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn get_employee_reports_missing_records() {
        let store = store();
        assert_eq!(get_employee(&store, EmployeeId::FIRST).unwrap().first_name, "Alice");
        assert!(matches!(
            get_employee(&store, EmployeeId::new(5).unwrap()),
            Err(ServiceError::NotFound)
        ));
    }

    #[cfg(feature = "test-mocks")]
    #[test]
    fn add_consults_reader_before_writing() {
        use crate::repository::mock::MockRepository;

        let mut repo = MockRepository::new();
        repo.expect_find_employee_by_email()
            .times(1)
            .withf(|email, exclude| email.eq_ignore_ascii_case("carl@x.com") && exclude.is_none())
            .returning(|_, _| None);
        repo.expect_create_employee()
            .times(1)
            .returning(|new| {
                Ok(new.into_employee(EmployeeId::new(7).unwrap(), chrono::Utc::now().naive_utc()))
            });

        let created = add_employee(&mut repo, &form("Carl", "carl@x.com")).unwrap();
        assert_eq!(created.id.get(), 7);
    }

    #[cfg(feature = "test-mocks")]
    #[test]
    fn duplicate_email_never_reaches_writer() {
        use crate::repository::mock::MockRepository;

        let mut repo = MockRepository::new();
        repo.expect_find_employee_by_email()
            .returning(|_, _| {
                Some(Employee::new(EmployeeId::FIRST, "Carl", "Old", "carl@x.com", "Eng", "Dev"))
            });
        repo.expect_create_employee().times(0);

        let result = add_employee(&mut repo, &form("Carl", "carl@x.com"));
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}

use employee_directory::domain::types::EmployeeId;
use employee_directory::dto::directory::PageRequest;
use employee_directory::forms::EmployeeField;
use employee_directory::forms::employee::{DUPLICATE_EMAIL_MESSAGE, EmployeeForm};
use employee_directory::services::{ServiceError, directory, employee};
use employee_directory::store::{EmployeeStore, StoreError};

mod common;

fn form(first: &str, last: &str, email: &str) -> EmployeeForm {
    EmployeeForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        department: "IT".to_string(),
        role: "Developer".to_string(),
    }
}

#[test]
fn test_add_update_delete_flow() {
    let mut store = common::store(3);

    let created =
        employee::add_employee(&mut store, &form("Jane", "O'Hara", "jane@example.com")).unwrap();
    assert_eq!(created.id.get(), 4);

    let mut edit = EmployeeForm::from(&created);
    edit.role = "Lead".to_string();
    let updated = employee::update_employee(&mut store, created.id, &edit).unwrap();
    assert_eq!(updated.role, "Lead");
    assert!(updated.updated_at.is_some());

    let removed = employee::delete_employee(&mut store, created.id).unwrap();
    assert_eq!(removed.id, created.id);
    assert!(matches!(
        employee::get_employee(&store, created.id),
        Err(ServiceError::NotFound)
    ));
}

#[test]
fn test_duplicate_email_is_rejected_except_for_own_record() {
    let mut store = common::store(3);
    let taken = store.get(EmployeeId::new(2).unwrap()).unwrap().email.to_uppercase();

    let Err(ServiceError::Validation(errors)) =
        employee::add_employee(&mut store, &form("Copy", "Cat", &taken))
    else {
        panic!("expected validation error");
    };
    assert_eq!(errors.get(EmployeeField::Email), Some(DUPLICATE_EMAIL_MESSAGE));
    assert_eq!(store.len(), 3);

    let own = EmployeeForm::from(store.get(EmployeeId::new(2).unwrap()).unwrap());
    assert!(employee::update_employee(&mut store, EmployeeId::new(2).unwrap(), &own).is_ok());
}

#[test]
fn test_add_reports_exhausted_ids() {
    let last = EmployeeId::new(i32::MAX - 1).unwrap();
    let mut store = EmployeeStore::new(vec![common::employee(last.get(), "Max", "Out", "IT", "Developer")])
        .unwrap();

    let result = employee::add_employee(&mut store, &form("Late", "Comer", "late@example.com"));

    assert!(matches!(
        result,
        Err(ServiceError::Store(StoreError::IdSpaceExhausted(_)))
    ));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_invalid_form_reports_all_fields() {
    let mut store = common::store(2);
    let bad = EmployeeForm {
        first_name: "J".to_string(),
        last_name: "Sm1th".to_string(),
        email: "no-at-sign".to_string(),
        department: " ".to_string(),
        role: String::new(),
    };

    let Err(ServiceError::Validation(errors)) = employee::add_employee(&mut store, &bad) else {
        panic!("expected validation error");
    };

    assert_eq!(errors.len(), 5);
    assert_eq!(
        errors.get(EmployeeField::FirstName),
        Some("Please enter a valid first name")
    );
    assert_eq!(
        errors.get(EmployeeField::Email),
        Some("Please enter a valid email address")
    );
    assert_eq!(errors.get(EmployeeField::Role), Some("Role is required"));
}

#[test]
fn test_directory_page_after_navigation() {
    let mut store = common::store(25);

    directory::set_items_per_page(&mut store, 10).unwrap();
    assert_eq!(directory::change_page(&mut store, PageRequest::Next).unwrap(), 2);
    assert_eq!(directory::change_page(&mut store, PageRequest::Number(3)).unwrap(), 3);
    assert!(directory::change_page(&mut store, PageRequest::Next).is_err());

    let data = directory::load_directory_page(&store);
    assert_eq!(data.employees.items.len(), 5);
    assert_eq!(data.employees.summary.start, 21);
    assert_eq!(data.employees.summary.end, 25);
    assert!(!data.employees.has_next());
    assert_eq!(data.roles, vec!["Analyst", "Developer", "Manager"]);
}

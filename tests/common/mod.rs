#![allow(dead_code)]

use std::io::Write;
use std::path::Path;

use employee_directory::domain::employee::Employee;
use employee_directory::domain::types::EmployeeId;
use employee_directory::store::EmployeeStore;
use tempfile::NamedTempFile;

const DEPARTMENTS: [&str; 4] = ["HR", "IT", "Sales", "Finance"];
const ROLES: [&str; 3] = ["Manager", "Developer", "Analyst"];

pub fn employee(id: i32, first: &str, last: &str, department: &str, role: &str) -> Employee {
    let email = format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase());
    Employee::new(EmployeeId::new(id).unwrap(), first, last, &email, department, role)
}

/// `count` employees with ids `1..=count`, cycling through departments and roles.
pub fn generated(count: i32) -> Vec<Employee> {
    (1..=count)
        .map(|id| {
            let idx = id as usize;
            employee(
                id,
                &format!("Person{id}"),
                "Tester",
                DEPARTMENTS[idx % DEPARTMENTS.len()],
                ROLES[idx % ROLES.len()],
            )
        })
        .collect()
}

pub fn store(count: i32) -> EmployeeStore {
    EmployeeStore::new(generated(count)).unwrap()
}

/// Seed file written to a temporary location and removed on drop.
pub struct SeedFile {
    file: NamedTempFile,
}

impl SeedFile {
    pub fn new(extension: &str, contents: &str) -> Self {
        let mut file = tempfile::Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        Self { file }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

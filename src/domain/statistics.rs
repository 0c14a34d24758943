use serde::Serialize;

use crate::domain::employee::Employee;

/// Number of records sharing one department or role value.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Tally {
    pub name: String,
    pub count: usize,
}

/// Head-count summary over the full record set.
///
/// Breakdown entries keep the order in which each value was first seen.
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
pub struct EmployeeStatistics {
    pub total: usize,
    pub by_department: Vec<Tally>,
    pub by_role: Vec<Tally>,
}

fn bump(tallies: &mut Vec<Tally>, name: &str) {
    match tallies.iter_mut().find(|tally| tally.name == name) {
        Some(tally) => tally.count += 1,
        None => tallies.push(Tally {
            name: name.to_string(),
            count: 1,
        }),
    }
}

impl EmployeeStatistics {
    pub fn collect<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        let mut stats = Self::default();
        for employee in employees {
            stats.total += 1;
            bump(&mut stats.by_department, &employee.department);
            bump(&mut stats.by_role, &employee.role);
        }
        stats
    }

    pub fn department_count(&self, department: &str) -> usize {
        self.by_department
            .iter()
            .find(|tally| tally.name == department)
            .map_or(0, |tally| tally.count)
    }

    pub fn role_count(&self, role: &str) -> usize {
        self.by_role
            .iter()
            .find(|tally| tally.name == role)
            .map_or(0, |tally| tally.count)
    }
}

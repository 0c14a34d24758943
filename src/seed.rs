//! Loading of the initial employee records.
//!
//! Seeds come either as a JSON array or as a CSV file with a header row; both
//! use the `id, firstName, lastName, email, department, role` field names.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::employee::Employee;
use crate::domain::types::{EmployeeId, TypeConstraintError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("cannot read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV seed: {0}")]
    Csv(#[from] csv::Error),

    #[error("seed record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        source: TypeConstraintError,
    },

    #[error("unsupported seed format: {0}")]
    UnsupportedFormat(String),
}

/// Employee-shaped record as supplied by the seed provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedEmployee {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub role: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl TryFrom<SeedEmployee> for Employee {
    type Error = TypeConstraintError;

    fn try_from(seed: SeedEmployee) -> Result<Self, Self::Error> {
        let mut employee = Employee::new(
            EmployeeId::new(seed.id)?,
            seed.first_name,
            seed.last_name,
            &seed.email,
            seed.department,
            seed.role,
        );
        employee.created_at = seed.created_at;
        Ok(employee)
    }
}

fn into_employees(records: Vec<SeedEmployee>) -> Result<Vec<Employee>, SeedError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Employee::try_from(record).map_err(|source| SeedError::InvalidRecord { index, source })
        })
        .collect()
}

/// Parses a JSON array of employees.
pub fn parse_json<R: Read>(reader: R) -> Result<Vec<Employee>, SeedError> {
    let records: Vec<SeedEmployee> = serde_json::from_reader(reader)?;
    into_employees(records)
}

/// Parses CSV with a header row naming the employee fields.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Employee>, SeedError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let records = rdr
        .deserialize::<SeedEmployee>()
        .collect::<Result<Vec<_>, csv::Error>>()?;
    into_employees(records)
}

/// Loads seed records from `path`, choosing the parser by file extension.
pub fn load_seed(path: &Path) -> Result<Vec<Employee>, SeedError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let employees = match extension.as_str() {
        "json" => parse_json(File::open(path)?)?,
        "csv" => parse_csv(File::open(path)?)?,
        other => return Err(SeedError::UnsupportedFormat(other.to_string())),
    };

    log::info!("Loaded {} seed employees from {}", employees.len(), path.display());
    Ok(employees)
}

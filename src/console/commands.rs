//! Command grammar of the console front-end.

use clap::{Args, Parser, Subcommand};

use crate::domain::query::{SortField, SortOrder};
use crate::domain::types::EmployeeId;
use crate::dto::directory::PageRequest;
use crate::forms::employee::EmployeeForm;
use crate::forms::EmployeeField;

/// One input line, parsed with the first word as the command name.
#[derive(Debug, Parser)]
#[command(multicall = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current page of employees
    #[command(alias = "ls")]
    List,
    /// Search first name, last name and email; no text clears the search
    Search {
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Narrow the list by first name, department or role
    Filter {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        role: Option<String>,
    },
    /// Remove the search text and every filter
    Clear,
    /// Order the list by a field
    Sort {
        field: SortField,
        #[arg(default_value = "asc")]
        order: SortOrder,
    },
    /// Go back to newest-first ordering
    ResetSort,
    /// Jump to a page number, or `next` / `prev`
    Page {
        #[arg(value_parser = parse_page_request)]
        target: PageRequest,
    },
    /// Change how many employees are shown per page
    PerPage { count: usize },
    /// Add a new employee
    Add(FieldArgs),
    /// Edit an existing employee; omitted fields keep their value
    Edit {
        id: EmployeeId,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete an employee
    #[command(alias = "rm")]
    Delete { id: EmployeeId },
    /// Show every field of one employee
    Show { id: EmployeeId },
    /// Check a single field value without saving anything
    Check { field: EmployeeField, value: String },
    /// Head counts by department and role
    Stats,
    /// List the known departments
    Departments,
    /// List the known roles
    Roles,
    /// Leave the directory
    #[command(alias = "exit")]
    Quit,
}

/// Employee form values given as `--first-name` style options.
#[derive(Debug, Default, Args)]
pub struct FieldArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
}

impl FieldArgs {
    /// Overwrites the fields of `form` that were given on the command line.
    pub fn apply_to(self, form: &mut EmployeeForm) {
        let values = [
            (EmployeeField::FirstName, self.first_name),
            (EmployeeField::LastName, self.last_name),
            (EmployeeField::Email, self.email),
            (EmployeeField::Department, self.department),
            (EmployeeField::Role, self.role),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
    }
}

fn parse_page_request(value: &str) -> Result<PageRequest, String> {
    match value.trim().to_lowercase().as_str() {
        "next" | "n" => Ok(PageRequest::Next),
        "prev" | "previous" | "p" => Ok(PageRequest::Previous),
        other => other
            .parse::<usize>()
            .map(PageRequest::Number)
            .map_err(|_| format!("expected a page number, `next` or `prev`, got `{value}`")),
    }
}

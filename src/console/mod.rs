//! Interactive line-oriented front-end over the employee store.
//!
//! Each input line is split shell-style and parsed by [`CommandLine`]. List
//! and detail views are rendered through Tera templates.

use std::io::{BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::query::EmployeeFilterPatch;
use crate::domain::types::EmployeeId;
use crate::forms::FormErrors;
use crate::forms::employee::EmployeeForm;
use crate::forms::rules::validate_field;
use crate::models::config::DirectoryConfig;
use crate::seed::{SeedError, load_seed};
use crate::services::{ServiceError, directory, employee};
use crate::store::{EmployeeStore, StoreError};

pub mod commands;

use commands::{Command, CommandLine, FieldArgs};

pub const PROMPT: &str = "directory> ";

pub const ADDED_MESSAGE: &str = "Employee added successfully";
pub const UPDATED_MESSAGE: &str = "Employee updated successfully";
pub const DELETED_MESSAGE: &str = "Employee deleted successfully";
pub const SAVE_FAILED_MESSAGE: &str = "An error occurred while saving the employee";
pub const DELETE_FAILED_MESSAGE: &str = "An error occurred while deleting the employee";
pub const EMPTY_MESSAGE: &str = "No employees found";

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("cannot load seed data: {0}")]
    Seed(#[from] SeedError),

    #[error("cannot build the store: {0}")]
    Store(#[from] StoreError),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result of handling one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Reply::Output(text.into())
    }
}

pub struct Console {
    store: EmployeeStore,
    tera: Tera,
    latency: Duration,
}

#[derive(Serialize)]
struct FormErrorsView<'a> {
    heading: &'a str,
    errors: Vec<FieldErrorView<'a>>,
}

#[derive(Serialize)]
struct FieldErrorView<'a> {
    label: &'a str,
    message: &'a str,
}

impl Console {
    pub fn new(store: EmployeeStore, tera: Tera, latency: Duration) -> Self {
        Self {
            store,
            tera,
            latency,
        }
    }

    /// Loads the seed file and templates named in `config`.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, ConsoleError> {
        let seed = load_seed(Path::new(&config.seed_path))?;
        let mut store = EmployeeStore::new(seed)?;
        store.set_items_per_page(config.items_per_page)?;

        let tera = Tera::new(&config.templates_dir)?;

        Ok(Self::new(
            store,
            tera,
            Duration::from_millis(config.simulated_latency_ms),
        ))
    }

    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    pub fn log_statistics(&self) {
        let stats = self.store.statistics();
        log::info!(
            "Directory holds {} employees in {} departments with {} roles",
            stats.total,
            stats.by_department.len(),
            stats.by_role.len()
        );
        for tally in &stats.by_department {
            log::debug!("Department {}: {}", tally.name, tally.count);
        }
    }

    /// Reads commands from `input` until end of input or `quit`.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), ConsoleError>
    where
        R: BufRead,
        W: Write,
    {
        if let Reply::Output(text) = self.execute("list") {
            writeln!(output, "{text}")?;
        }

        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Quit => break,
                Reply::Output(text) if text.is_empty() => {}
                Reply::Output(text) => writeln!(output, "{text}")?,
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }

    /// Handles one input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(err) => return Reply::text(format!("Cannot parse command: {err}")),
        };
        if words.is_empty() {
            return Reply::text("");
        }

        let command = match CommandLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(err) => return Reply::text(err.to_string().trim_end()),
        };

        match self.dispatch(command) {
            Ok(reply) => reply,
            Err(err) => {
                log::error!("Command failed: {err}");
                Reply::text(format!("An error occurred: {err}"))
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Reply, ConsoleError> {
        let reply = match command {
            Command::List => self.render_list()?,
            Command::Search { text } => {
                directory::search(&mut self.store, &text.join(" "));
                self.render_list()?
            }
            Command::Filter {
                first_name,
                department,
                role,
            } => {
                let patch = EmployeeFilterPatch {
                    search: None,
                    first_name,
                    department,
                    role,
                };
                directory::apply_filters(&mut self.store, patch);
                self.render_list()?
            }
            Command::Clear => {
                directory::clear_filters(&mut self.store);
                self.render_list()?
            }
            Command::Sort { field, order } => {
                directory::sort(&mut self.store, field, order);
                self.render_list()?
            }
            Command::ResetSort => {
                self.store.reset_sort();
                self.render_list()?
            }
            Command::Page { target } => match directory::change_page(&mut self.store, target) {
                Ok(_) => self.render_list()?,
                Err(err) => Reply::text(capitalize(&err.to_string())),
            },
            Command::PerPage { count } => {
                match directory::set_items_per_page(&mut self.store, count) {
                    Ok(()) => self.render_list()?,
                    Err(err) => Reply::text(capitalize(&err.to_string())),
                }
            }
            Command::Add(fields) => self.add(fields)?,
            Command::Edit { id, fields } => self.edit(id, fields)?,
            Command::Delete { id } => self.delete(id),
            Command::Show { id } => match employee::get_employee(&self.store, id) {
                Ok(found) => {
                    let mut context = Context::new();
                    context.insert("employee", &found);
                    Reply::text(self.tera.render("employee.txt", &context)?)
                }
                Err(_) => Reply::text(format!("Employee {id} not found")),
            },
            Command::Check { field, value } => match validate_field(field, &value) {
                Ok(()) => Reply::text(format!("{} is valid", field.label())),
                Err(err) => Reply::text(err.message),
            },
            Command::Stats => {
                let context = Context::from_serialize(self.store.statistics())?;
                Reply::text(self.tera.render("statistics.txt", &context)?)
            }
            Command::Departments => Reply::text(self.store.unique_departments().join("\n")),
            Command::Roles => Reply::text(self.store.unique_roles().join("\n")),
            Command::Quit => Reply::Quit,
        };
        Ok(reply)
    }

    fn add(&mut self, fields: FieldArgs) -> Result<Reply, ConsoleError> {
        let mut form = EmployeeForm::default();
        fields.apply_to(&mut form);

        // Checked here as well so invalid input skips the latency pause.
        if let Err(errors) = form.validate_record(&self.store, None) {
            return Ok(Reply::text(self.render_errors(&errors)?));
        }
        self.pause();

        let reply = match employee::add_employee(&mut self.store, &form) {
            Ok(created) => Reply::text(format!("{ADDED_MESSAGE} (#{})", created.id)),
            Err(err) => self.save_failure(err)?,
        };
        Ok(reply)
    }

    fn edit(&mut self, id: EmployeeId, fields: FieldArgs) -> Result<Reply, ConsoleError> {
        let mut form = match employee::get_employee(&self.store, id) {
            Ok(existing) => EmployeeForm::from(&existing),
            Err(_) => return Ok(Reply::text(format!("Employee {id} not found"))),
        };
        fields.apply_to(&mut form);

        // Same early check as `add`.
        if let Err(errors) = form.validate_record(&self.store, Some(id)) {
            return Ok(Reply::text(self.render_errors(&errors)?));
        }
        self.pause();

        let reply = match employee::update_employee(&mut self.store, id, &form) {
            Ok(_) => Reply::text(UPDATED_MESSAGE),
            Err(err) => self.save_failure(err)?,
        };
        Ok(reply)
    }

    fn delete(&mut self, id: EmployeeId) -> Reply {
        self.pause();
        match employee::delete_employee(&mut self.store, id) {
            Ok(_) => Reply::text(DELETED_MESSAGE),
            Err(err) => Reply::text(delete_failure(id, &err)),
        }
    }

    fn save_failure(&self, err: ServiceError) -> Result<Reply, ConsoleError> {
        match err {
            ServiceError::Validation(errors) => Ok(Reply::text(self.render_errors(&errors)?)),
            _ => Ok(Reply::text(SAVE_FAILED_MESSAGE)),
        }
    }

    fn pause(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    fn render_list(&self) -> Result<Reply, ConsoleError> {
        let data = directory::load_directory_page(&self.store);
        let mut context = Context::from_serialize(&data)?;
        context.insert("empty_message", EMPTY_MESSAGE);
        Ok(Reply::text(self.tera.render("employees.txt", &context)?))
    }

    fn render_errors(&self, errors: &FormErrors) -> Result<String, ConsoleError> {
        let view = FormErrorsView {
            heading: "Please fix the following:",
            errors: errors
                .iter()
                .map(|error| FieldErrorView {
                    label: error.field.label(),
                    message: &error.message,
                })
                .collect(),
        };
        let context = Context::from_serialize(view)?;
        Ok(self.tera.render("errors.txt", &context)?)
    }
}

fn delete_failure(id: EmployeeId, err: &ServiceError) -> String {
    match err {
        ServiceError::NotFound => format!("Employee {id} not found"),
        _ => DELETE_FAILED_MESSAGE.to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Offline caching is not available in a terminal session.
pub fn register_offline_support() {
    log::debug!("Offline support is not available; continuing without it");
}

/// Loads the directory described by `config` and serves commands on stdin.
pub fn run(config: DirectoryConfig) -> Result<(), ConsoleError> {
    let mut console = Console::from_config(&config)?;
    register_offline_support();
    console.log_statistics();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console.run(stdin.lock(), stdout.lock())
}

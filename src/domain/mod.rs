//! Domain types shared by the record store, the validator and the front-end.

pub mod employee;
pub mod query;
pub mod statistics;
pub mod types;

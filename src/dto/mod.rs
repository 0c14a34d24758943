//! DTO modules that bridge services with the front-end templates.

pub mod directory;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod seed;
#[cfg(feature = "data")]
pub mod services;
#[cfg(feature = "data")]
pub mod store;

#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "console")]
pub mod models;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

#[cfg(feature = "console")]
pub use console::run;

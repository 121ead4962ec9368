//! Active-record access to a SQLite `dogs` table.
//!
//! Callers own the connection: open it through [`db`], pass it to the
//! `DogRecord` operations, and close it with [`db::close_db`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;

pub use db::{DbConfig, DbError, DbLocation, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::dog::{DogId, DogRecord, DogRow};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! SQLite storage bootstrap entry points.
//!
//! # Responsibility
//! - Open, configure and close the SQLite connection used by record APIs.
//! - Resolve connection settings from code or process environment.
//!
//! # Invariants
//! - The connection is owned by the caller; core never keeps a global one.
//! - Opening a connection never creates application tables.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod config;
mod open;

pub use config::{DbConfig, DbLocation, DB_BUSY_TIMEOUT_ENV, DB_PATH_ENV};
pub use open::{close_db, open_db, open_db_in_memory, open_db_with_config};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    InvalidConfig(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::InvalidConfig(message) => write!(f, "invalid database config: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

//! Database layer for the pet clinic.

mod schema;
mod owners;
mod pets;
mod sample;
mod vets;
mod visits;

pub use schema::*;
pub use sample::SAMPLE_DATA;

use chrono::NaiveDate;
use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

use crate::models::DATE_FORMAT;

/// Database errors.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Invalid stored value: {0}")]
    InvalidRow(String),
}

pub type DbResult<T> = Result<T, DbError>;

fn parse_date(value: &str) -> DbResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| DbError::InvalidRow(format!("bad date {:?}: {}", value, e)))
}

fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open database at path, creating if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create in-memory database (for testing).
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Initialize schema.
    fn initialize(&self) -> DbResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Load the sample owners, pets, vets and visits.
    ///
    /// Only meant for a fresh database; rows are inserted with fixed IDs.
    pub fn load_sample_data(&self) -> DbResult<()> {
        self.conn.execute_batch(SAMPLE_DATA)?;
        Ok(())
    }

    /// Get raw connection (for advanced queries).
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

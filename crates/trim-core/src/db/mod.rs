//! Database operations and SQLite management for the booking store.
//!
//! This module provides the persistence collaborator of the booking system.
//! It handles SQLite connections, schema management, and query interfaces
//! for the service catalog, the barber roster, and confirmed bookings. The
//! scheduling engine itself never touches this module; it consumes the
//! [`Snapshot`](crate::models::Snapshot) the store produces.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod booking_queries;
pub mod catalog_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

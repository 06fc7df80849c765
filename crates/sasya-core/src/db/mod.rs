//! Database operations and SQLite management for the catalog and saved plans.
//!
//! This module provides low-level storage for the planner. A [`Database`]
//! wraps a single short-lived SQLite connection; callers open one per
//! operation and pass the path explicitly rather than relying on any global
//! location.
//!
//! Saving a plan and saving its labels are separate statements. A failure
//! between the two leaves a plan row without labels.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod catalog_queries;
pub mod label_queries;
pub mod migrations;
pub mod plan_queries;
pub mod seed;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    ///
    /// The catalog is not seeded here; see [`Database::seed_catalog`].
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

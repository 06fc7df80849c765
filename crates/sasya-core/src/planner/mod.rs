//! High-level planner API tying the planning pipeline to the plan store.
//!
//! The pipeline itself is a chain of pure functions:
//!
//! ```text
//! SiteInput ─▶ selector ─▶ layout ─▶ economics ─▶ assembler ─▶ Plan
//!                                                      │
//!                                          advisor ────┘ (explanatory only)
//! ```
//!
//! [`Planner`] wraps that chain with catalog reads and plan persistence. It
//! holds only configuration: every operation opens its own short-lived
//! [`Database`](crate::db::Database) connection inside
//! [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```rust,no_run
//! use sasya_core::{params::SiteRequest, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("/tmp/sasya.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&SiteRequest::from_values(Some(400.0), None, Some(8000.0), None))
//!     .await?;
//! println!("{plan}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Mutex};

use rand::rngs::StdRng;
use tokio::task;

use crate::{
    db::Database,
    error::{PlannerError, Result, ResultExt},
};

pub mod advisor;
pub mod assembler;
pub mod builder;
pub mod economics;
pub mod layout;
pub mod selector;

mod catalog_ops;
mod plan_ops;


pub use builder::PlannerBuilder;

/// Main planner interface for generating, advising on and storing plans.
pub struct Planner {
    pub(crate) db_path: PathBuf,
    pub(crate) cell_size_m: f64,
    pub(crate) rng: Mutex<StdRng>,
}

impl Planner {
    pub(crate) fn new(db_path: PathBuf, cell_size_m: f64, rng: StdRng) -> Self {
        Self {
            db_path,
            cell_size_m,
            rng: Mutex::new(rng),
        }
    }

    /// Path of the SQLite file backing this planner.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .with_context("Task join error")?
    }

    fn lock_rng(&self) -> Result<std::sync::MutexGuard<'_, StdRng>> {
        self.rng.lock().map_err(|_| PlannerError::Configuration {
            message: "Advisor random generator lock poisoned".to_string(),
        })
    }
}

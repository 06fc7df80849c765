//! Builder for creating and configuring Planner instances.

use std::path::{Path, PathBuf};

use rand::{rngs::StdRng, SeedableRng};
use tokio::task;

use super::{layout::DEFAULT_CELL_SIZE_M, Planner};
use crate::{
    db::Database,
    error::{PlannerError, Result, ResultExt},
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    database_path: Option<PathBuf>,
    cell_size_m: f64,
    seed: Option<u64>,
    seed_catalog: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            cell_size_m: DEFAULT_CELL_SIZE_M,
            seed: None,
            seed_catalog: true,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sasya/sasya.db` or `~/.local/share/sasya/sasya.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the side length of a layout cell in metres.
    pub fn with_cell_size(mut self, cell_size_m: f64) -> Self {
        self.cell_size_m = cell_size_m;
        self
    }

    /// Fixes the advisor's random generator for reproducible advice.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Controls whether empty catalog tables are filled with the built-in
    /// crops and trees on build. Enabled by default.
    pub fn with_catalog_seeding(mut self, enabled: bool) -> Self {
        self.seed_catalog = enabled;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for a non-positive cell size
    /// Returns `PlannerError::FileSystem` if the database path is invalid
    /// Returns `PlannerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Planner> {
        if !self.cell_size_m.is_finite() || self.cell_size_m <= 0.0 {
            return Err(PlannerError::invalid_input("cell_size_m")
                .with_reason("cell size must be a positive number of metres"));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PlannerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        let seed_catalog = self.seed_catalog;
        task::spawn_blocking(move || {
            let db = Database::new(&db_path_clone)?;
            if seed_catalog {
                db.seed_catalog()?;
            }
            Ok::<(), PlannerError>(())
        })
        .await
        .with_context("Task join error")??;

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Planner::new(db_path, self.cell_size_m, rng))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sasya")
            .place_data_file("sasya.db")
            .map_err(|e| PlannerError::XdgDirectory(e.to_string()))
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

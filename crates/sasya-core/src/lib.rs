//! Core library for the Sasya agronomic planner.
//!
//! Given rainfall, soil pH, plot area and an investment tier, the planner
//! picks a primary crop, an intercrop and a boundary tree from a seeded
//! catalog, lays the plot out as a grid of cells, and prices the result.
//! Plans can be saved with one label row per cell.
//!
//! - [`planner`]: the pure pipeline (selector, layout, economics, assembler,
//!   advisor) and the async [`Planner`] facade over it.
//! - [`db`]: SQLite storage for the catalog, plans and labels.
//! - [`models`]: data types; [`display`]: markdown rendering of them.
//! - [`params`]: loosely typed request parameters shared by every interface.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sasya_core::{params::SiteRequest, PlannerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = PlannerBuilder::new()
//!     .with_database_path(Some("sasya.db"))
//!     .build()
//!     .await?;
//!
//! let plan = planner
//!     .generate_plan(&SiteRequest::from_values(Some(400.0), Some(6.5), Some(8000.0), None))
//!     .await?;
//! println!("{} with {}", plan.primary_crop.name, plan.intercrop.name);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;

// Re-export commonly used types
pub use db::Database;
pub use display::{Crops, Labels, LocalDateTime, PlanReport, PlanSummaries, Trees};
pub use error::{PlannerError, Result};
pub use models::{
    Advice, Cell, CellType, CropSpecies, DroughtTolerance, EconomicsSummary, Grid,
    InvestmentLevel, Plan, PlanSummary, SaveOutcome, SavedPlan, SiteInput, TreeSpecies,
};
pub use params::{Id, SavePlan, SiteRequest};
pub use planner::{Planner, PlannerBuilder};

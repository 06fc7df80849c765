//! Data models for the planning pipeline.
//!
//! The models fall into three groups:
//!
//! - **Catalog** ([`CropSpecies`], [`TreeSpecies`]): seeded reference data,
//!   read-only from the planner's point of view.
//! - **Pipeline** ([`SiteInput`], [`Cell`], [`Grid`], [`EconomicsSummary`],
//!   [`Plan`], [`Advice`]): values produced fresh for each request and never
//!   mutated afterwards.
//! - **Storage** ([`SavedPlan`], [`PlanSummary`], [`SaveOutcome`]): what the
//!   plan store returns.
//!
//! Cells refer to species by name rather than by catalog id. Display
//! implementations live in [`crate::display`].

mod advice;
mod catalog;
mod economics;
mod kinds;
mod layout;
mod plan;
mod site;

pub use advice::{Advice, ScoredCrop};
pub use catalog::{CropSpecies, TreeSpecies};
pub use economics::{CropEconomics, EconomicsSummary, SpeciesEconomics, NON_CROP_NOTE};
pub use kinds::{CellType, DroughtTolerance, InvestmentLevel};
pub use layout::{Cell, Grid};
pub use plan::{Explanation, Plan, PlanSummary, SaveOutcome, SavedPlan};
pub use site::{SiteInput, DEFAULT_AREA_M2, DEFAULT_RAINFALL_MM, DEFAULT_SOIL_PH};

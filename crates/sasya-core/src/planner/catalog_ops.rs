//! Catalog reads and plan generation for the Planner.

use log::debug;

use super::{advisor, assembler::assemble_plan, Planner};
use crate::{
    error::Result,
    models::{Advice, CropSpecies, Plan, TreeSpecies},
    params::SiteRequest,
};

impl Planner {
    /// Lists the crop catalog in declaration order.
    pub async fn list_crops(&self) -> Result<Vec<CropSpecies>> {
        self.with_database(|db| db.list_crops()).await
    }

    /// Lists the tree catalog in declaration order.
    pub async fn list_trees(&self) -> Result<Vec<TreeSpecies>> {
        self.with_database(|db| db.list_trees()).await
    }

    /// Generates a deterministic plan for the requested site.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` for malformed site values or a
    /// non-positive area, and `PlannerError::NoCropData` when the crop catalog
    /// is empty.
    pub async fn generate_plan(&self, request: &SiteRequest) -> Result<Plan> {
        let site = request.clone().into_site_input()?;
        let (crops, trees) = self
            .with_database(|db| Ok((db.list_crops()?, db.list_trees()?)))
            .await?;

        let plan = assemble_plan(&site, &crops, &trees, self.cell_size_m)?;
        debug!(
            "Generated plan: {} + {} with {} boundary, {}x{} grid",
            plan.primary_crop.name,
            plan.intercrop.name,
            plan.boundary_tree.name,
            plan.layout.rows,
            plan.layout.cols
        );
        Ok(plan)
    }

    /// Produces stochastic advisory recommendations for the requested site.
    ///
    /// Uses the planner's random generator, so a planner built with a fixed
    /// seed gives a reproducible sequence of advice.
    pub async fn advise(&self, request: &SiteRequest) -> Result<Advice> {
        let site = request.clone().into_site_input()?;
        let crops = self.with_database(|db| db.list_crops()).await?;

        let mut rng = self.lock_rng()?;
        advisor::advise(&site, &crops, &mut *rng)
    }
}

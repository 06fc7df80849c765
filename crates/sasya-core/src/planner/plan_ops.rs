//! Saved plan operations for the Planner.

use log::{info, warn};
use serde_json::Value;

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{Cell, PlanSummary, SaveOutcome, SavedPlan},
    params::{Id, SavePlan},
};

impl Planner {
    /// Stores a plan document and one label row per layout cell.
    ///
    /// The plan row is written first. Labels are taken from the document's
    /// `layout.cells`; if they are missing, malformed or fail to store, the
    /// plan stays saved and `labels_saved` is zero.
    pub async fn save_plan(&self, params: &SavePlan) -> Result<SaveOutcome> {
        let farmer_name = params.resolved_farmer_name();
        let document = params.plan.clone();

        self.with_database(move |db| {
            let plan_id = db.save_plan(&farmer_name, &document)?;
            info!("Saved plan {plan_id} for {farmer_name}");

            let labels_saved = match layout_cells(&document) {
                Ok(cells) => match db.save_labels(plan_id, &cells) {
                    Ok(count) => count,
                    Err(e) => {
                        warn!("Failed to save labels for plan {plan_id}: {e}");
                        0
                    }
                },
                Err(reason) => {
                    warn!("Plan {plan_id} saved without labels: {reason}");
                    0
                }
            };

            Ok(SaveOutcome {
                plan_id,
                labels_saved,
            })
        })
        .await
    }

    /// Retrieves a saved plan by its ID.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` when no plan has that ID.
    pub async fn get_plan(&self, params: &Id) -> Result<SavedPlan> {
        let id = params.id;
        self.with_database(move |db| db.get_plan(id))
            .await?
            .ok_or(PlannerError::PlanNotFound { id })
    }

    /// Lists saved plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        self.with_database(|db| db.list_plans()).await
    }

    /// Lists the label rows of a saved plan. Unknown IDs give an empty list.
    pub async fn get_labels(&self, params: &Id) -> Result<Vec<Cell>> {
        let plan_id = params.id;
        self.with_database(move |db| db.get_labels(plan_id)).await
    }
}

fn layout_cells(document: &Value) -> std::result::Result<Vec<Cell>, String> {
    match document.pointer("/layout/cells") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(cells) => serde_json::from_value(cells.clone())
            .map_err(|e| format!("layout cells are malformed: {e}")),
    }
}

//! Assembled and persisted plan models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CropSpecies, EconomicsSummary, Grid, SiteInput, TreeSpecies};

/// How the plan's species were chosen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Explanation {
    pub method: String,
    pub selected_by: String,
}

impl Default for Explanation {
    fn default() -> Self {
        Self {
            method: "rule-based selection".to_string(),
            selected_by: "rainfall + heuristics".to_string(),
        }
    }
}

/// The full recommendation for one site-input request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Echo of the inputs the plan was generated from
    pub input: SiteInput,

    pub primary_crop: CropSpecies,

    pub intercrop: CropSpecies,

    pub boundary_tree: TreeSpecies,

    pub layout: Grid,

    pub economics: EconomicsSummary,

    #[serde(default)]
    pub explanation: Explanation,
}

/// A plan document as stored, with its storage metadata.
///
/// The document is kept opaque: callers may save documents that did not come
/// from this crate's assembler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlan {
    pub id: u64,
    pub farmer_name: String,
    pub created_at: Timestamp,
    pub document: Value,
}

impl SavedPlan {
    /// Attempts to read the document back as an assembled [`Plan`].
    pub fn as_plan(&self) -> Option<Plan> {
        serde_json::from_value(self.document.clone()).ok()
    }
}

/// Listing entry for a saved plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub farmer_name: String,
    pub created_at: Timestamp,
    /// Number of label rows stored for the plan
    pub label_count: u32,
}

/// Outcome of persisting a plan and its labels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveOutcome {
    pub plan_id: u64,
    /// Number of label rows written; zero when label persistence failed
    pub labels_saved: usize,
}

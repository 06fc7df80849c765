//! Advisory recommendation produced by the stochastic scorer.

use serde::{Deserialize, Serialize};

use super::{CropSpecies, SiteInput};

/// A crop candidate with its advisory score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoredCrop {
    #[serde(flatten)]
    pub crop: CropSpecies,
    pub score: f64,
}

/// Explanatory recommendation for a site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Advice {
    pub input: SiteInput,
    pub primary_crop: CropSpecies,
    pub intercrop: CropSpecies,
    /// Rainfall-suitable candidates, best score first
    pub candidates: Vec<ScoredCrop>,
    pub explanation_points: Vec<String>,
    /// Confidence figure in `[0.75, 0.95]`
    pub confidence: f64,
}

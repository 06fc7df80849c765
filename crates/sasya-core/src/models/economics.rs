//! Economics summary derived from a layout.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Note recorded for species that have no crop economics.
pub const NON_CROP_NOTE: &str = "Tree or non-crop: long-term benefits";

/// Yield and money figures for a species found in the crop catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct CropEconomics {
    pub yield_kg: f64,
    pub revenue: f64,
    pub cost: f64,
    pub net: f64,
}

/// Per-species aggregate over the grid.
///
/// `crop` is present only when the species matched a crop catalog entry;
/// otherwise `notes` explains why no economics were computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeciesEconomics {
    pub area_m2: f64,
    pub cell_count: u32,
    #[serde(flatten)]
    pub crop: Option<CropEconomics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SpeciesEconomics {
    pub fn revenue(&self) -> f64 {
        self.crop.map_or(0.0, |c| c.revenue)
    }

    pub fn cost(&self) -> f64 {
        self.crop.map_or(0.0, |c| c.cost)
    }

    pub fn net(&self) -> f64 {
        self.crop.map_or(0.0, |c| c.net)
    }
}

/// Economics for a whole plan, keyed by species name in alphabetical order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EconomicsSummary {
    pub by_species: BTreeMap<String, SpeciesEconomics>,
    pub total_revenue: f64,
    pub total_cost: f64,
    pub total_net: f64,
}

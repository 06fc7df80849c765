//! Catalog reference data: crop and tree species.

use serde::{Deserialize, Serialize};

use super::DroughtTolerance;

/// A crop species with its rainfall band and per-hectare economics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropSpecies {
    /// Row identifier in the catalog store
    pub id: u64,

    /// Unique species name, used as the soft reference from layout cells
    pub name: String,

    /// Lower bound of the rainfall band in mm
    pub min_rainfall: i64,

    /// Upper bound of the rainfall band in mm
    pub max_rainfall: i64,

    /// Growing season (free text, e.g. "Kharif")
    pub season: String,

    pub typical_yield_kg_per_ha: f64,

    pub input_cost_per_ha: f64,

    pub market_price_per_kg: f64,
}

impl CropSpecies {
    /// Whether the rainfall lies inside this crop's band (inclusive).
    pub fn tolerates_rainfall(&self, rainfall_mm: f64) -> bool {
        self.min_rainfall as f64 <= rainfall_mm && rainfall_mm <= self.max_rainfall as f64
    }
}

/// A tree species suitable for boundary planting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TreeSpecies {
    /// Row identifier in the catalog store (0 for the built-in default)
    pub id: u64,

    /// Unique species name
    pub name: String,

    pub drought_tolerance: DroughtTolerance,

    /// Canopy diameter in metres
    pub canopy_m: f64,

    /// Recommended spacing between trees in metres
    pub spacing_m: f64,

    /// Uses of the tree (free text)
    pub uses: String,
}

impl TreeSpecies {
    /// Boundary tree used when the tree catalog is empty.
    pub fn default_boundary() -> Self {
        Self {
            id: 0,
            name: "Neem".to_string(),
            drought_tolerance: DroughtTolerance::High,
            canopy_m: 8.0,
            spacing_m: 8.0,
            uses: "boundary, pest control, medicinal".to_string(),
        }
    }
}

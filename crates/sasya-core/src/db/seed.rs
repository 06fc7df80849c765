//! Built-in catalog seed data.

use log::info;

use crate::{
    error::Result,
    models::{CropSpecies, DroughtTolerance, TreeSpecies},
};

// name, min_rainfall, max_rainfall, season, yield kg/ha, input cost/ha, price/kg
const SEED_CROPS: [(&str, i64, i64, &str, f64, f64, f64); 8] = [
    ("Pearl Millet", 200, 600, "Kharif", 800.0, 10000.0, 10.0),
    ("Sorghum", 300, 800, "Kharif", 1200.0, 12000.0, 9.0),
    ("Pigeon Pea", 300, 900, "Kharif/Rabi", 700.0, 9000.0, 22.0),
    ("Greengram", 300, 700, "Kharif", 500.0, 7000.0, 30.0),
    ("Sesame", 250, 600, "Kharif", 400.0, 6000.0, 40.0),
    ("Groundnut", 400, 900, "Kharif", 2000.0, 15000.0, 18.0),
    ("Horsegram", 250, 700, "Kharif", 600.0, 5000.0, 20.0),
    ("Cowpea", 300, 800, "Kharif", 700.0, 6000.0, 20.0),
];

// name, drought tolerance, canopy m, spacing m, uses
const SEED_TREES: [(&str, DroughtTolerance, f64, f64, &str); 4] = [
    ("Neem", DroughtTolerance::High, 8.0, 8.0, "boundary, pest control, medicinal"),
    ("Tamarind", DroughtTolerance::Medium, 10.0, 10.0, "fruit, boundary"),
    ("Gliricidia", DroughtTolerance::High, 4.0, 2.5, "fodder, nitrogen fixer"),
    ("Mahogany", DroughtTolerance::Low, 12.0, 12.0, "timber, shade"),
];

/// The seeded crop catalog, with ids in insertion order starting at 1.
pub fn seed_crops() -> Vec<CropSpecies> {
    SEED_CROPS
        .iter()
        .zip(1u64..)
        .map(|(&(name, min, max, season, yield_kg, cost, price), id)| CropSpecies {
            id,
            name: name.to_string(),
            min_rainfall: min,
            max_rainfall: max,
            season: season.to_string(),
            typical_yield_kg_per_ha: yield_kg,
            input_cost_per_ha: cost,
            market_price_per_kg: price,
        })
        .collect()
}

/// The seeded tree catalog, with ids in insertion order starting at 1.
pub fn seed_trees() -> Vec<TreeSpecies> {
    SEED_TREES
        .iter()
        .zip(1u64..)
        .map(|(&(name, tolerance, canopy, spacing, uses), id)| TreeSpecies {
            id,
            name: name.to_string(),
            drought_tolerance: tolerance,
            canopy_m: canopy,
            spacing_m: spacing,
            uses: uses.to_string(),
        })
        .collect()
}

impl super::Database {
    /// Seeds the crop and tree tables independently, each only when empty.
    ///
    /// Returns the number of crops and trees inserted.
    pub fn seed_catalog(&self) -> Result<(usize, usize)> {
        let mut crops_added = 0;
        if self.count_crops()? == 0 {
            for crop in seed_crops() {
                self.insert_crop(&crop)?;
                crops_added += 1;
            }
        }

        let mut trees_added = 0;
        if self.count_trees()? == 0 {
            for tree in seed_trees() {
                self.insert_tree(&tree)?;
                trees_added += 1;
            }
        }

        if crops_added + trees_added > 0 {
            info!("Seeded catalog with {crops_added} crops and {trees_added} trees");
        }
        Ok((crops_added, trees_added))
    }
}

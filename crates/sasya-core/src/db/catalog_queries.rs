//! Crop and tree catalog queries.

use rusqlite::{params, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{CropSpecies, DroughtTolerance, TreeSpecies},
};

const INSERT_CROP_SQL: &str = "INSERT INTO crops (name, min_rainfall, max_rainfall, season, typical_yield_kg_per_ha, input_cost_per_ha, market_price_per_kg) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_CROPS_SQL: &str = "SELECT id, name, min_rainfall, max_rainfall, season, typical_yield_kg_per_ha, input_cost_per_ha, market_price_per_kg FROM crops ORDER BY id";
const COUNT_CROPS_SQL: &str = "SELECT COUNT(1) FROM crops";
const INSERT_TREE_SQL: &str = "INSERT INTO trees (name, drought_tolerance, canopy_m, spacing_m, uses) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TREES_SQL: &str =
    "SELECT id, name, drought_tolerance, canopy_m, spacing_m, uses FROM trees ORDER BY id";
const COUNT_TREES_SQL: &str = "SELECT COUNT(1) FROM trees";

impl super::Database {
    /// Inserts a crop species, ignoring its `id`, and returns the new row id.
    pub fn insert_crop(&self, crop: &CropSpecies) -> Result<u64> {
        self.connection
            .execute(
                INSERT_CROP_SQL,
                params![
                    crop.name,
                    crop.min_rainfall,
                    crop.max_rainfall,
                    crop.season,
                    crop.typical_yield_kg_per_ha,
                    crop.input_cost_per_ha,
                    crop.market_price_per_kg,
                ],
            )
            .db_context("Failed to insert crop")?;
        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Lists all crops in catalog declaration order.
    pub fn list_crops(&self) -> Result<Vec<CropSpecies>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CROPS_SQL)
            .db_context("Failed to prepare crop query")?;

        let crops = stmt
            .query_map([], crop_from_row)
            .db_context("Failed to query crops")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch crops")?;
        Ok(crops)
    }

    pub fn count_crops(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_CROPS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count crops")
    }

    /// Inserts a tree species, ignoring its `id`, and returns the new row id.
    pub fn insert_tree(&self, tree: &TreeSpecies) -> Result<u64> {
        self.connection
            .execute(
                INSERT_TREE_SQL,
                params![
                    tree.name,
                    tree.drought_tolerance.as_str(),
                    tree.canopy_m,
                    tree.spacing_m,
                    tree.uses,
                ],
            )
            .db_context("Failed to insert tree")?;
        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Lists all trees in catalog declaration order.
    pub fn list_trees(&self) -> Result<Vec<TreeSpecies>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TREES_SQL)
            .db_context("Failed to prepare tree query")?;

        let trees = stmt
            .query_map([], tree_from_row)
            .db_context("Failed to query trees")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch trees")?;
        Ok(trees)
    }

    pub fn count_trees(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_TREES_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count trees")
    }
}

fn crop_from_row(row: &Row<'_>) -> rusqlite::Result<CropSpecies> {
    Ok(CropSpecies {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        min_rainfall: row.get(2)?,
        max_rainfall: row.get(3)?,
        season: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        typical_yield_kg_per_ha: row.get(5)?,
        input_cost_per_ha: row.get(6)?,
        market_price_per_kg: row.get(7)?,
    })
}

fn tree_from_row(row: &Row<'_>) -> rusqlite::Result<TreeSpecies> {
    // Unknown or missing tolerance sorts last in tree selection
    let drought_tolerance = row
        .get::<_, Option<String>>(2)?
        .and_then(|value| value.parse::<DroughtTolerance>().ok())
        .unwrap_or(DroughtTolerance::Low);

    Ok(TreeSpecies {
        id: row.get::<_, i64>(0)? as u64,
        name: row.get(1)?,
        drought_tolerance,
        canopy_m: row.get(3)?,
        spacing_m: row.get(4)?,
        uses: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
    })
}

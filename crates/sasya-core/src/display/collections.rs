//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper renders a markdown table and handles the empty case with a
//! one-line message.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Cell, CropSpecies, PlanSummary, TreeSpecies};

/// Newtype wrapper for displaying the crop catalog.
pub struct Crops(pub Vec<CropSpecies>);

impl fmt::Display for Crops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No crops found.");
        }

        writeln!(
            f,
            "| ID | Crop | Rainfall (mm) | Season | Yield (kg/ha) | Cost (/ha) | Price (/kg) |"
        )?;
        writeln!(f, "|---:|---|---|---|---:|---:|---:|")?;
        for crop in &self.0 {
            writeln!(
                f,
                "| {} | {} | {}-{} | {} | {} | {} | {} |",
                crop.id,
                crop.name,
                crop.min_rainfall,
                crop.max_rainfall,
                crop.season,
                crop.typical_yield_kg_per_ha,
                crop.input_cost_per_ha,
                crop.market_price_per_kg
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the tree catalog.
pub struct Trees(pub Vec<TreeSpecies>);

impl fmt::Display for Trees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trees found.");
        }

        writeln!(
            f,
            "| ID | Tree | Drought tolerance | Canopy (m) | Spacing (m) | Uses |"
        )?;
        writeln!(f, "|---:|---|---|---:|---:|---|")?;
        for tree in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                tree.id, tree.name, tree.drought_tolerance, tree.canopy_m, tree.spacing_m, tree.uses
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying saved plan listings.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        writeln!(f, "| ID | Farmer | Saved | Labels |")?;
        writeln!(f, "|---:|---|---|---:|")?;
        for plan in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                plan.id,
                plan.farmer_name,
                LocalDateTime(&plan.created_at),
                plan.label_count
            )?;
        }
        Ok(())
    }
}

/// The stored cell labels of one saved plan.
pub struct Labels {
    pub plan_id: u64,
    pub cells: Vec<Cell>,
}

impl fmt::Display for Labels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Labels for plan {}", self.plan_id)?;
        writeln!(f)?;
        if self.cells.is_empty() {
            return writeln!(f, "No labels found.");
        }

        writeln!(f, "| Cell | Type | Species | x (m) | y (m) | Area (m²) |")?;
        writeln!(f, "|---|---|---|---:|---:|---:|")?;
        for cell in &self.cells {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                cell.cell_id, cell.cell_type, cell.species, cell.x_m, cell.y_m, cell.area_m2
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{} labels", self.cells.len())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::{
        db::seed::{seed_crops, seed_trees},
        models::CellType,
    };

    #[test]
    fn empty_collections_say_so() {
        assert_eq!(Crops(vec![]).to_string(), "No crops found.\n");
        assert_eq!(Trees(vec![]).to_string(), "No trees found.\n");
        assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
        assert!(Labels {
            plan_id: 9,
            cells: vec![]
        }
        .to_string()
        .contains("No labels found."));
    }

    #[test]
    fn catalog_tables_list_every_row() {
        let crops = Crops(seed_crops()).to_string();
        assert!(crops.contains("| 6 | Groundnut | 400-900 | Kharif | 2000 | 15000 | 18 |"));
        assert_eq!(crops.lines().count(), 2 + 8);

        let trees = Trees(seed_trees()).to_string();
        assert!(trees.contains("| 3 | Gliricidia | high | 4 | 2.5 | fodder, nitrogen fixer |"));
    }

    #[test]
    fn plan_summaries_show_label_counts() {
        let summaries = PlanSummaries(vec![PlanSummary {
            id: 4,
            farmer_name: "Kiran".into(),
            created_at: Timestamp::now(),
            label_count: 27,
        }]);
        let output = summaries.to_string();
        assert!(output.contains("| 4 | Kiran |"));
        assert!(output.trim_end().ends_with("| 27 |"));
    }

    #[test]
    fn labels_render_cells() {
        let labels = Labels {
            plan_id: 1,
            cells: vec![Cell {
                cell_id: "r0_c0".into(),
                r: 0,
                c: 0,
                cell_type: CellType::Tree,
                species: "Neem".into(),
                x_m: 0.0,
                y_m: 0.0,
                area_m2: 16.0,
            }],
        };
        let output = labels.to_string();
        assert!(output.contains("| r0_c0 | tree | Neem | 0 | 0 | 16 |"));
        assert!(output.contains("1 labels"));
    }
}

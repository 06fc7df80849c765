//! Plan assembly: selection, layout and economics in one pass.

use super::{
    economics::aggregate,
    layout::{layout, Planting},
    selector::{select_crops, select_tree},
};
use crate::{
    error::Result,
    models::{CropSpecies, Explanation, Plan, SiteInput, TreeSpecies},
};

/// Generates a plan for `site` from the given catalog.
///
/// Economics are always computed from the cells returned by the layout, never
/// re-derived from species names, so the two cannot drift apart.
///
/// # Errors
///
/// Returns [`crate::PlannerError::NoCropData`] for an empty crop catalog and
/// [`crate::PlannerError::InvalidInput`] for a non-positive area or cell size.
pub fn assemble_plan(
    site: &SiteInput,
    crops: &[CropSpecies],
    trees: &[TreeSpecies],
    cell_size_m: f64,
) -> Result<Plan> {
    let selection = select_crops(site.rainfall_mm, crops)?;
    let boundary_tree = select_tree(trees)
        .cloned()
        .unwrap_or_else(TreeSpecies::default_boundary);

    let grid = layout(
        site.area_m2,
        Planting {
            primary: &selection.primary.name,
            intercrop: &selection.intercrop.name,
            tree: &boundary_tree.name,
        },
        cell_size_m,
    )?;
    let economics = aggregate(&grid.cells, crops);

    Ok(Plan {
        input: site.clone(),
        primary_crop: selection.primary,
        intercrop: selection.intercrop,
        boundary_tree,
        layout: grid,
        economics,
        explanation: Explanation::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::seed,
        models::{CellType, InvestmentLevel},
        planner::layout::DEFAULT_CELL_SIZE_M,
        PlannerError,
    };

    #[test]
    fn default_site_plan() {
        let site = SiteInput::default();
        let plan = assemble_plan(
            &site,
            &seed::seed_crops(),
            &seed::seed_trees(),
            DEFAULT_CELL_SIZE_M,
        )
        .unwrap();

        assert_eq!(plan.input, site);
        assert_eq!(plan.primary_crop.name, "Groundnut");
        assert_eq!(plan.intercrop.name, "Sorghum");
        assert_eq!(plan.boundary_tree.name, "Gliricidia");
        assert_eq!((plan.layout.rows, plan.layout.cols), (90, 22));

        let mut names: Vec<&str> = plan.economics.by_species.keys().map(String::as_str).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Gliricidia", "Groundnut", "Sorghum"]);
    }

    #[test]
    fn economics_match_layout_cell_counts() {
        let plan = assemble_plan(
            &SiteInput::default(),
            &seed::seed_crops(),
            &seed::seed_trees(),
            DEFAULT_CELL_SIZE_M,
        )
        .unwrap();

        for (species, record) in &plan.economics.by_species {
            let cells = plan
                .layout
                .cells
                .iter()
                .filter(|c| &c.species == species)
                .count();
            assert_eq!(record.cell_count as usize, cells);
        }
    }

    #[test]
    fn missing_trees_fall_back_to_neem() {
        let plan = assemble_plan(&SiteInput::default(), &seed::seed_crops(), &[], 4.0).unwrap();
        assert_eq!(plan.boundary_tree.name, "Neem");
        assert!(plan
            .layout
            .cells
            .iter()
            .filter(|c| c.cell_type == CellType::Tree)
            .all(|c| c.species == "Neem"));
    }

    #[test]
    fn investment_level_does_not_change_selection() {
        let crops = seed::seed_crops();
        let trees = seed::seed_trees();
        let low = assemble_plan(&SiteInput::default(), &crops, &trees, 4.0).unwrap();
        let high = assemble_plan(
            &SiteInput {
                investment_level: InvestmentLevel::High,
                ..SiteInput::default()
            },
            &crops,
            &trees,
            4.0,
        )
        .unwrap();
        assert_eq!(low.layout, high.layout);
        assert_eq!(low.economics, high.economics);
    }

    #[test]
    fn errors_propagate_unchanged() {
        let err = assemble_plan(&SiteInput::default(), &[], &seed::seed_trees(), 4.0).unwrap_err();
        assert!(matches!(err, PlannerError::NoCropData));

        let site = SiteInput {
            area_m2: 0.0,
            ..SiteInput::default()
        };
        let err = assemble_plan(&site, &seed::seed_crops(), &[], 4.0).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput { .. }));
    }
}

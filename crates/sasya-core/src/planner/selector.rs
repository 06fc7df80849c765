//! Deterministic species selection.

use std::cmp::Ordering;

use crate::{
    error::{PlannerError, Result},
    models::{CropSpecies, TreeSpecies},
};

/// Crops chosen for the interior of the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct CropSelection {
    pub primary: CropSpecies,
    pub intercrop: CropSpecies,
}

/// Crops whose rainfall band contains `rainfall_mm`, or the whole catalog
/// when none do. Catalog order is preserved.
pub fn rainfall_candidates(rainfall_mm: f64, crops: &[CropSpecies]) -> Vec<&CropSpecies> {
    let in_band: Vec<&CropSpecies> = crops
        .iter()
        .filter(|crop| crop.tolerates_rainfall(rainfall_mm))
        .collect();

    if in_band.is_empty() {
        crops.iter().collect()
    } else {
        in_band
    }
}

/// Picks the primary crop and intercrop by descending typical yield.
///
/// The sort is stable, so crops with equal yields keep their catalog order.
/// With a single candidate the intercrop repeats the primary.
///
/// # Errors
///
/// Returns [`PlannerError::NoCropData`] if `crops` is empty.
pub fn select_crops(rainfall_mm: f64, crops: &[CropSpecies]) -> Result<CropSelection> {
    let mut candidates = rainfall_candidates(rainfall_mm, crops);
    candidates.sort_by(|a, b| {
        b.typical_yield_kg_per_ha
            .partial_cmp(&a.typical_yield_kg_per_ha)
            .unwrap_or(Ordering::Equal)
    });

    let primary = candidates.first().ok_or(PlannerError::NoCropData)?;
    let intercrop = candidates.get(1).unwrap_or(primary);

    Ok(CropSelection {
        primary: (*primary).clone(),
        intercrop: (*intercrop).clone(),
    })
}

/// Picks the boundary tree: most drought tolerant first, then tightest
/// spacing. Returns `None` for an empty tree catalog.
pub fn select_tree(trees: &[TreeSpecies]) -> Option<&TreeSpecies> {
    trees.iter().min_by(|a, b| {
        a.drought_tolerance
            .cmp(&b.drought_tolerance)
            .then(a.spacing_m.partial_cmp(&b.spacing_m).unwrap_or(Ordering::Equal))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::seed, models::DroughtTolerance};

    fn crops() -> Vec<CropSpecies> {
        seed::seed_crops()
    }

    #[test]
    fn primary_band_contains_rainfall() {
        let crops = crops();
        for rainfall in [200.0, 250.0, 400.0, 650.0, 900.0] {
            let selection = select_crops(rainfall, &crops).unwrap();
            assert!(
                selection.primary.tolerates_rainfall(rainfall),
                "{} does not tolerate {rainfall}",
                selection.primary.name
            );
            assert!(selection.intercrop.tolerates_rainfall(rainfall));
        }
    }

    #[test]
    fn ranks_by_descending_yield() {
        let selection = select_crops(400.0, &crops()).unwrap();
        assert_eq!(selection.primary.name, "Groundnut");
        assert_eq!(selection.intercrop.name, "Sorghum");
    }

    #[test]
    fn falls_back_to_whole_catalog_outside_every_band() {
        let crops = crops();
        for rainfall in [50.0, 1500.0, -10.0] {
            let selection = select_crops(rainfall, &crops).unwrap();
            assert_eq!(selection.primary.name, "Groundnut");
            assert_eq!(selection.intercrop.name, "Sorghum");
        }
    }

    #[test]
    fn single_candidate_repeats_as_intercrop() {
        let only_millet: Vec<CropSpecies> = crops()
            .into_iter()
            .filter(|c| c.name == "Pearl Millet")
            .collect();
        let selection = select_crops(300.0, &only_millet).unwrap();
        assert_eq!(selection.primary, selection.intercrop);
    }

    #[test]
    fn empty_catalog_is_no_crop_data() {
        let err = select_crops(400.0, &[]).unwrap_err();
        assert!(matches!(err, PlannerError::NoCropData));
    }

    #[test]
    fn tree_prefers_drought_tolerance_then_spacing() {
        let trees = seed::seed_trees();
        let tree = select_tree(&trees).unwrap();
        assert_eq!(tree.name, "Gliricidia");
        assert_eq!(tree.drought_tolerance, DroughtTolerance::High);
    }

    #[test]
    fn tree_selection_on_empty_catalog_is_none() {
        assert!(select_tree(&[]).is_none());
    }
}

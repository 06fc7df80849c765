//! Economics aggregation over a layout.

use std::collections::{BTreeMap, HashMap};

use crate::models::{
    Cell, CropEconomics, CropSpecies, EconomicsSummary, SpeciesEconomics, NON_CROP_NOTE,
};

const M2_PER_HECTARE: f64 = 10_000.0;

/// Aggregates cell areas per species and prices the crop species.
///
/// Species are matched to the crop catalog by name. Names without a match
/// (boundary trees, unknown species) are recorded with their area and a note
/// and contribute nothing to the totals. Species are visited in alphabetical
/// order so totals accumulate identically for identical inputs.
pub fn aggregate(cells: &[Cell], crops: &[CropSpecies]) -> EconomicsSummary {
    let catalog: HashMap<&str, &CropSpecies> =
        crops.iter().map(|crop| (crop.name.as_str(), crop)).collect();

    let mut areas: BTreeMap<&str, (f64, u32)> = BTreeMap::new();
    for cell in cells {
        let entry = areas.entry(cell.species.as_str()).or_insert((0.0, 0));
        entry.0 += cell.area_m2;
        entry.1 += 1;
    }

    let mut summary = EconomicsSummary::default();
    for (species, (area_m2, cell_count)) in areas {
        let record = match catalog.get(species) {
            Some(crop) => {
                let economics = price_area(crop, area_m2);
                summary.total_revenue += economics.revenue;
                summary.total_cost += economics.cost;
                summary.total_net += economics.net;
                SpeciesEconomics {
                    area_m2,
                    cell_count,
                    crop: Some(economics),
                    notes: None,
                }
            }
            None => SpeciesEconomics {
                area_m2,
                cell_count,
                crop: None,
                notes: Some(NON_CROP_NOTE.to_string()),
            },
        };
        summary.by_species.insert(species.to_string(), record);
    }

    summary
}

/// Converts an area in square metres into yield and money figures.
pub fn price_area(crop: &CropSpecies, area_m2: f64) -> CropEconomics {
    let hectares = area_m2 / M2_PER_HECTARE;
    let yield_kg = crop.typical_yield_kg_per_ha * hectares;
    let revenue = yield_kg * crop.market_price_per_kg;
    let cost = crop.input_cost_per_ha * hectares;
    CropEconomics {
        yield_kg,
        revenue,
        cost,
        net: revenue - cost,
    }
}

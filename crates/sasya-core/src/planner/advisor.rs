//! Stochastic advisory scoring with explanation text.
//!
//! This path is explanatory only and never feeds plan generation. All
//! randomness comes from the caller's [`Rng`], so a seeded generator gives
//! reproducible advice.

use std::cmp::Ordering;

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{PlannerError, Result},
    models::{Advice, CropSpecies, ScoredCrop, SiteInput},
};

/// Soil pH at which no penalty is applied.
pub const NEUTRAL_PH: f64 = 6.5;
/// Score penalty per unit of pH away from [`NEUTRAL_PH`].
const PH_PENALTY_PER_UNIT: f64 = 0.05;
const SCORE_JITTER: (f64, f64) = (0.9, 1.1);
const CONFIDENCE_RANGE: (f64, f64) = (0.75, 0.95);

/// Multiplier applied for soil pH; clamped so extreme pH cannot flip the sign
/// of a score.
pub fn ph_factor(soil_ph: f64) -> f64 {
    (1.0 - (soil_ph - NEUTRAL_PH).abs() * PH_PENALTY_PER_UNIT).max(0.0)
}

/// Yield-to-cost score with random jitter and the pH penalty, rounded to
/// three decimals.
pub fn score_crop<R: Rng + ?Sized>(crop: &CropSpecies, soil_ph: f64, rng: &mut R) -> f64 {
    let efficiency = crop.typical_yield_kg_per_ha / crop.input_cost_per_ha.max(1.0);
    let jitter = rng.gen_range(SCORE_JITTER.0..=SCORE_JITTER.1);
    round_to(efficiency * jitter * ph_factor(soil_ph), 3)
}

/// Produces advisory recommendations for a site.
///
/// Only crops whose rainfall band contains the site rainfall are scored. When
/// none qualify, a uniformly random crop is suggested as both primary crop and
/// intercrop.
///
/// # Errors
///
/// Returns [`PlannerError::NoCropData`] if `crops` is empty.
pub fn advise<R: Rng + ?Sized>(site: &SiteInput, crops: &[CropSpecies], rng: &mut R) -> Result<Advice> {
    if crops.is_empty() {
        return Err(PlannerError::NoCropData);
    }

    let mut candidates: Vec<ScoredCrop> = crops
        .iter()
        .filter(|crop| crop.tolerates_rainfall(site.rainfall_mm))
        .map(|crop| ScoredCrop {
            crop: crop.clone(),
            score: score_crop(crop, site.soil_ph, rng),
        })
        .collect();
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let primary = match candidates.first() {
        Some(best) => best.crop.clone(),
        None => crops.choose(rng).cloned().ok_or(PlannerError::NoCropData)?,
    };
    let intercrop = candidates
        .get(1)
        .map_or_else(|| primary.clone(), |second| second.crop.clone());

    let explanation_points = explanation_points(site, &primary, &intercrop);
    let confidence = round_to(rng.gen_range(CONFIDENCE_RANGE.0..=CONFIDENCE_RANGE.1), 2);

    Ok(Advice {
        input: site.clone(),
        primary_crop: primary,
        intercrop,
        candidates,
        explanation_points,
        confidence,
    })
}

fn explanation_points(site: &SiteInput, primary: &CropSpecies, intercrop: &CropSpecies) -> Vec<String> {
    vec![
        format!(
            "Rainfall of {} mm supports crops with moderate water needs like {}.",
            site.rainfall_mm, primary.name
        ),
        format!(
            "Soil pH of {} is well-suited for legumes and coarse cereals such as {}.",
            site.soil_ph, intercrop.name
        ),
        format!(
            "With a '{}' investment strategy, the system prioritizes cost-effective crops with stable yields.",
            site.investment_level.as_str()
        ),
        format!(
            "Primary crop **{}** is recommended for its consistent yield and resilience.",
            primary.name
        ),
        format!(
            "Intercrop **{}** enhances biodiversity and soil fertility.",
            intercrop.name
        ),
        "Tree boundary (e.g., Neem or Gliricidia) offers pest control, nitrogen fixation, and wind protection.".to_string(),
        "Overall, the plan is tuned for sustainability, yield, and long-term soil regeneration.".to_string(),
    ]
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

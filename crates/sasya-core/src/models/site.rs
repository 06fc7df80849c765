//! Site inputs describing the plot to plan for.

use serde::{Deserialize, Serialize};

use super::InvestmentLevel;

/// Rainfall assumed when the request omits it.
pub const DEFAULT_RAINFALL_MM: f64 = 400.0;
/// Soil pH assumed when the request omits it.
pub const DEFAULT_SOIL_PH: f64 = 6.5;
/// Plot area assumed when the request omits it.
pub const DEFAULT_AREA_M2: f64 = 8000.0;

/// Site conditions for a single planning request.
///
/// Values are not range checked here; the pipeline accepts out-of-range
/// rainfall and pH and degrades gracefully. Area is validated by the layout
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteInput {
    /// Annual rainfall in mm
    pub rainfall_mm: f64,

    pub soil_ph: f64,

    /// Plot area in square metres
    pub area_m2: f64,

    #[serde(default)]
    pub investment_level: InvestmentLevel,
}

impl Default for SiteInput {
    fn default() -> Self {
        Self {
            rainfall_mm: DEFAULT_RAINFALL_MM,
            soil_ph: DEFAULT_SOIL_PH,
            area_m2: DEFAULT_AREA_M2,
            investment_level: InvestmentLevel::Low,
        }
    }
}

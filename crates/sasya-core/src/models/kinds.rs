//! Enumerations shared by catalog, site and layout models.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drought tolerance of a tree species.
///
/// Variants are declared most tolerant first so the derived ordering ranks
/// `High < Medium < Low`, which is the boundary-tree preference order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DroughtTolerance {
    High,
    Medium,
    Low,
}

impl FromStr for DroughtTolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(DroughtTolerance::High),
            "medium" => Ok(DroughtTolerance::Medium),
            "low" => Ok(DroughtTolerance::Low),
            _ => Err(format!("Invalid drought tolerance: {s}")),
        }
    }
}

impl DroughtTolerance {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            DroughtTolerance::High => "high",
            DroughtTolerance::Medium => "medium",
            DroughtTolerance::Low => "low",
        }
    }
}

/// Investment tier declared by the farmer.
///
/// Advisory only: it changes explanation text, never which species are picked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum InvestmentLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl FromStr for InvestmentLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(InvestmentLevel::Low),
            "medium" => Ok(InvestmentLevel::Medium),
            "high" => Ok(InvestmentLevel::High),
            _ => Err(format!("Invalid investment level: {s}")),
        }
    }
}

impl InvestmentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentLevel::Low => "low",
            InvestmentLevel::Medium => "medium",
            InvestmentLevel::High => "high",
        }
    }
}

/// Role of a grid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    /// Perimeter cell planted with the boundary tree
    Tree,
    /// Interior cell planted with the primary crop or intercrop
    Crop,
}

impl FromStr for CellType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(CellType::Tree),
            "crop" => Ok(CellType::Crop),
            _ => Err(format!("Invalid cell type: {s}")),
        }
    }
}

impl CellType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Tree => "tree",
            CellType::Crop => "crop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drought_tolerance_orders_most_tolerant_first() {
        let mut levels = vec![
            DroughtTolerance::Low,
            DroughtTolerance::High,
            DroughtTolerance::Medium,
        ];
        levels.sort();
        assert_eq!(
            levels,
            vec![
                DroughtTolerance::High,
                DroughtTolerance::Medium,
                DroughtTolerance::Low
            ]
        );
    }

    #[test]
    fn investment_level_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<InvestmentLevel>(), Ok(InvestmentLevel::High));
        assert_eq!(" medium ".parse::<InvestmentLevel>(), Ok(InvestmentLevel::Medium));
        assert!("lavish".parse::<InvestmentLevel>().is_err());
    }

    #[test]
    fn cell_type_round_trips_through_str() {
        for kind in [CellType::Tree, CellType::Crop] {
            assert_eq!(kind.as_str().parse::<CellType>(), Ok(kind));
        }
    }
}

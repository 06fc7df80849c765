//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models module stays about
//! data. Everything here renders markdown.

use std::fmt;

use crate::models::{
    Advice, CellType, DroughtTolerance, EconomicsSummary, Grid, InvestmentLevel, Plan,
    SaveOutcome, SiteInput,
};

impl fmt::Display for DroughtTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for InvestmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SiteInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Rainfall**: {} mm", self.rainfall_mm)?;
        writeln!(f, "- **Soil pH**: {}", self.soil_ph)?;
        writeln!(f, "- **Area**: {} m²", self.area_m2)?;
        writeln!(f, "- **Investment**: {}", self.investment_level)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trees = self
            .cells
            .iter()
            .filter(|cell| cell.cell_type == CellType::Tree)
            .count();
        writeln!(
            f,
            "- {} rows x {} columns of {} m cells ({} cells)",
            self.rows,
            self.cols,
            self.cell_size_m,
            self.cells.len()
        )?;
        writeln!(
            f,
            "- {} boundary tree cells, {} crop cells",
            trees,
            self.cells.len() - trees
        )
    }
}

impl fmt::Display for EconomicsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "| Species | Cells | Area (m²) | Yield (kg) | Revenue | Cost | Net |"
        )?;
        writeln!(f, "|---|---:|---:|---:|---:|---:|---:|")?;
        for (species, econ) in &self.by_species {
            match &econ.crop {
                Some(crop) => writeln!(
                    f,
                    "| {} | {} | {:.1} | {:.1} | {:.2} | {:.2} | {:.2} |",
                    species,
                    econ.cell_count,
                    econ.area_m2,
                    crop.yield_kg,
                    crop.revenue,
                    crop.cost,
                    crop.net
                )?,
                None => writeln!(
                    f,
                    "| {} | {} | {:.1} | - | - | - | - |",
                    species, econ.cell_count, econ.area_m2
                )?,
            }
        }
        writeln!(
            f,
            "| **Total** | | | | {:.2} | {:.2} | {:.2} |",
            self.total_revenue, self.total_cost, self.total_net
        )?;

        let notes: Vec<_> = self
            .by_species
            .iter()
            .filter_map(|(species, econ)| econ.notes.as_ref().map(|note| (species, note)))
            .collect();
        if !notes.is_empty() {
            writeln!(f)?;
            for (species, note) in notes {
                writeln!(f, "_{species}: {note}_")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Site")?;
        writeln!(f)?;
        write!(f, "{}", self.input)?;

        writeln!(f, "\n## Crops & Trees")?;
        writeln!(f)?;
        writeln!(f, "- **Boundary tree**: {}", self.boundary_tree.name)?;
        writeln!(
            f,
            "- **Primary crop**: {} ({} season)",
            self.primary_crop.name, self.primary_crop.season
        )?;
        writeln!(
            f,
            "- **Intercrop**: {} ({} season)",
            self.intercrop.name, self.intercrop.season
        )?;
        writeln!(
            f,
            "- Selected by {} ({})",
            self.explanation.selected_by, self.explanation.method
        )?;

        writeln!(f, "\n## Layout")?;
        writeln!(f)?;
        write!(f, "{}", self.layout)?;

        writeln!(f, "\n## Economics")?;
        writeln!(f)?;
        write!(f, "{}", self.economics)?;

        writeln!(f, "\n## Action Plan")?;
        writeln!(f)?;
        for (i, step) in action_steps(self).iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, step)?;
        }
        Ok(())
    }
}

fn action_steps(plan: &Plan) -> [String; 6] {
    [
        format!("Plant {} around the boundary.", plan.boundary_tree.name),
        "Prepare the land and add compost.".to_string(),
        format!(
            "Sow {} with {} in rows.",
            plan.primary_crop.name, plan.intercrop.name
        ),
        "Mulch the soil and irrigate during dry spells.".to_string(),
        "Use organic pest repellents.".to_string(),
        "Harvest and record yields.".to_string(),
    ]
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Advisory Recommendation")?;
        writeln!(f)?;
        writeln!(f, "- **Primary crop**: {}", self.primary_crop.name)?;
        writeln!(f, "- **Intercrop**: {}", self.intercrop.name)?;
        writeln!(f, "- **Confidence**: {:.0}%", self.confidence * 100.0)?;

        if !self.candidates.is_empty() {
            writeln!(f, "\n## Candidates")?;
            writeln!(f)?;
            writeln!(f, "| Crop | Rainfall (mm) | Score |")?;
            writeln!(f, "|---|---|---:|")?;
            for candidate in &self.candidates {
                writeln!(
                    f,
                    "| {} | {}-{} | {:.3} |",
                    candidate.crop.name,
                    candidate.crop.min_rainfall,
                    candidate.crop.max_rainfall,
                    candidate.score
                )?;
            }
        }

        writeln!(f, "\n## Why")?;
        writeln!(f)?;
        for point in &self.explanation_points {
            writeln!(f, "- {point}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan saved with ID: {}", self.plan_id)?;
        if self.labels_saved == 0 {
            writeln!(f, "No cell labels were stored.")
        } else {
            writeln!(f, "Stored {} cell labels.", self.labels_saved)
        }
    }
}

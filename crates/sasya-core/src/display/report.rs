//! Printable plan report, the markdown stand-in for a PDF handout.

use std::fmt;

use jiff::Timestamp;

use super::datetime::UtcMinute;
use crate::models::{Plan, SavedPlan};

/// A plan wrapped with the farmer it belongs to and a generation time.
pub struct PlanReport<'a> {
    pub plan: &'a Plan,
    pub farmer_name: Option<&'a str>,
    pub plan_id: Option<u64>,
    pub generated_at: Timestamp,
}

impl<'a> PlanReport<'a> {
    /// Report for an unsaved plan, stamped with the current time.
    pub fn new(plan: &'a Plan) -> Self {
        Self {
            plan,
            farmer_name: None,
            plan_id: None,
            generated_at: Timestamp::now(),
        }
    }

    /// Report for a saved plan, stamped with the time it was saved.
    pub fn for_saved(saved: &'a SavedPlan, plan: &'a Plan) -> Self {
        Self {
            plan,
            farmer_name: Some(&saved.farmer_name),
            plan_id: Some(saved.id),
            generated_at: saved.created_at,
        }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.plan_id {
            Some(id) => writeln!(f, "# Sasya Yojana Land Plan #{id}")?,
            None => writeln!(f, "# Sasya Yojana Land Plan")?,
        }
        writeln!(f)?;
        if let Some(name) = self.farmer_name {
            writeln!(f, "**Farmer**: {name}")?;
            writeln!(f)?;
        }
        write!(f, "{}", self.plan)?;
        writeln!(f)?;
        writeln!(f, "_Generated on {}_", UtcMinute(&self.generated_at))
    }
}

impl fmt::Display for SavedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_plan() {
            Some(plan) => write!(f, "{}", PlanReport::for_saved(self, &plan)),
            None => {
                // Documents not produced by the assembler are shown raw
                writeln!(f, "# Saved Plan #{}", self.id)?;
                writeln!(f)?;
                writeln!(f, "**Farmer**: {}", self.farmer_name)?;
                writeln!(f, "\n```json")?;
                let pretty = serde_json::to_string_pretty(&self.document).map_err(|_| fmt::Error)?;
                writeln!(f, "{pretty}")?;
                writeln!(f, "```")
            }
        }
    }
}

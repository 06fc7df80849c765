//! Command handlers for the terminal interface.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use anyhow::{Context, Result};
use log::debug;
use sasya_core::{
    display::{Crops, Labels, PlanReport, PlanSummaries, Trees},
    params::{Id, SavePlan, SiteRequest},
    Planner,
};
use serde_json::Value;

use crate::{
    args::{GenerateArgs, SaveArgs, SiteArgs},
    renderer::TerminalRenderer,
};

/// Runs one CLI command against a planner and renders the result.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn list_crops(&self) -> Result<()> {
        let crops = self.planner.list_crops().await.context("Failed to list crops")?;
        self.renderer
            .render(&format!("# Crops\n\n{}", Crops(crops)))
    }

    pub async fn list_trees(&self) -> Result<()> {
        let trees = self.planner.list_trees().await.context("Failed to list trees")?;
        self.renderer
            .render(&format!("# Trees\n\n{}", Trees(trees)))
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        debug!("generate: {args:?}");
        let plan = self
            .planner
            .generate_plan(&SiteRequest::from(args.site))
            .await
            .context("Failed to generate plan")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&plan)?);
        } else {
            self.renderer.render(&PlanReport::new(&plan).to_string())?;
        }

        if args.save {
            let outcome = self
                .planner
                .save_plan(&SavePlan {
                    farmer_name: args.farmer_name,
                    plan: serde_json::to_value(&plan)?,
                })
                .await
                .context("Failed to save plan")?;
            // Keep stdout clean for --json
            if args.json {
                eprint!("{outcome}");
            } else {
                self.renderer.render(&format!("\n{outcome}"))?;
            }
        }
        Ok(())
    }

    pub async fn advise(&self, args: SiteArgs) -> Result<()> {
        let advice = self
            .planner
            .advise(&SiteRequest::from(args))
            .await
            .context("Failed to produce advice")?;
        self.renderer.render(&advice.to_string())
    }

    pub async fn save(&self, args: SaveArgs) -> Result<()> {
        let payload = read_payload(args.file.as_deref())?;
        let mut params = SavePlan::from_payload(payload);
        if args.farmer_name.is_some() {
            params.farmer_name = args.farmer_name;
        }

        let outcome = self
            .planner
            .save_plan(&params)
            .await
            .context("Failed to save plan")?;
        self.renderer.render(&outcome.to_string())
    }

    pub async fn show_plan(&self, id: Id) -> Result<()> {
        let saved = self
            .planner
            .get_plan(&id)
            .await
            .with_context(|| format!("Failed to show plan {}", id.id))?;
        self.renderer.render(&saved.to_string())
    }

    pub async fn labels(&self, id: Id) -> Result<()> {
        let cells = self
            .planner
            .get_labels(&id)
            .await
            .context("Failed to get labels")?;
        self.renderer.render(
            &Labels {
                plan_id: id.id,
                cells,
            }
            .to_string(),
        )
    }

    pub async fn list_plans(&self) -> Result<()> {
        let plans = self.planner.list_plans().await.context("Failed to list plans")?;
        self.renderer
            .render(&format!("# Saved Plans\n\n{}", PlanSummaries(plans)))
    }
}

fn read_payload(file: Option<&Path>) -> Result<Value> {
    let text = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read plan from stdin")?;
            buf
        }
    };
    serde_json::from_str(&text).context("Plan document is not valid JSON")
}

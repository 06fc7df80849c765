//! Command-line argument definitions using clap.
//!
//! Argument structs convert into the core parameter types with `From`, so the
//! core stays free of clap derives.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use sasya_core::params::{Id, SiteRequest};

/// Agronomic plot planner for dryland farms
///
/// Sasya picks a primary crop, an intercrop and a boundary tree for a plot
/// from its rainfall and size, lays the plot out as a grid and estimates the
/// economics. Plans can be saved with per-cell labels and served over HTTP or
/// MCP.
#[derive(Parser)]
#[command(version, about, name = "sasya")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sasya/sasya.db
    #[arg(long, global = true, env = "SASYA_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Seed for the advisor's random generator, for reproducible advice
    #[arg(long, global = true, env = "SASYA_SEED")]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, saved plans are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// List the crop catalog
    Crops,
    /// List the tree catalog
    Trees,
    /// Generate a plan for a site
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Get scored advisory recommendations for a site
    Advise(SiteArgs),
    /// Save a plan document from a JSON file or stdin
    Save(SaveArgs),
    /// Show a saved plan as a report
    Show(PlanIdArgs),
    /// List the stored cell labels of a saved plan
    Labels(PlanIdArgs),
    /// List saved plans
    Plans,
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Start the MCP server on stdio
    Mcp,
}

/// Site conditions. Omitted values use the planner defaults.
#[derive(ClapArgs, Debug)]
pub struct SiteArgs {
    /// Annual rainfall in mm [default: 400]
    #[arg(long, visible_alias = "rainfall-mm")]
    pub rainfall: Option<f64>,

    /// Soil pH [default: 6.5]
    #[arg(long)]
    pub soil_ph: Option<f64>,

    /// Plot area in square metres [default: 8000]
    #[arg(long, visible_alias = "area-m2")]
    pub area: Option<f64>,

    /// Investment level: low, medium or high [default: low]
    #[arg(long, visible_alias = "investment-level")]
    pub investment: Option<String>,
}

impl From<SiteArgs> for SiteRequest {
    fn from(val: SiteArgs) -> Self {
        SiteRequest::from_values(val.rainfall, val.soil_ph, val.area, val.investment)
    }
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Print the plan as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Save the generated plan
    #[arg(long)]
    pub save: bool,

    /// Farmer name to store with a saved plan
    #[arg(long, requires = "save")]
    pub farmer_name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct SaveArgs {
    /// JSON file holding `{farmer_name?, plan}` or a bare plan; reads stdin
    /// when omitted or `-`
    pub file: Option<PathBuf>,

    /// Farmer name, overriding any name in the document
    #[arg(long)]
    pub farmer_name: Option<String>,
}

#[derive(ClapArgs, Debug)]
pub struct PlanIdArgs {
    /// ID of the saved plan
    pub id: u64,
}

impl From<PlanIdArgs> for Id {
    fn from(val: PlanIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(ClapArgs, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "SASYA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "SASYA_PORT", default_value_t = 5000)]
    pub port: u16,
}

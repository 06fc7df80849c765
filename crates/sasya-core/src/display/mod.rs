//! Markdown display for planner results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! collections and contextual views use newtype wrappers so the same data can
//! be rendered differently in a list, a report or a confirmation. All output is
//! markdown, rendered by the CLI through termimad and returned verbatim by the
//! MCP tools and the report endpoint.
//!
//! ```rust
//! use sasya_core::{display::Crops, db::seed::seed_crops};
//!
//! let table = Crops(seed_crops()).to_string();
//! assert!(table.contains("| Groundnut |"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;

pub use collections::{Crops, Labels, PlanSummaries, Trees};
pub use datetime::LocalDateTime;
pub use report::PlanReport;

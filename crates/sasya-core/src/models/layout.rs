//! Grid layout models.

use serde::{Deserialize, Serialize};

use super::CellType;

/// One grid unit of fixed area, tagged with a role and a species.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    /// Row/column encoded identifier, `r{row}_c{col}`
    pub cell_id: String,

    /// Row index
    pub r: u32,

    /// Column index
    pub c: u32,

    #[serde(rename = "type")]
    pub cell_type: CellType,

    /// Species name; a soft reference into the crop or tree catalog
    pub species: String,

    /// Top-left x coordinate in metres
    pub x_m: f64,

    /// Top-left y coordinate in metres
    pub y_m: f64,

    pub area_m2: f64,
}

impl Cell {
    /// Builds the identifier for the cell at `(r, c)`.
    pub fn id_for(r: u32, c: u32) -> String {
        format!("r{r}_c{c}")
    }
}

/// A rectangular grid covering the plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
    pub cell_size_m: f64,
    /// Cells in row-major order
    pub cells: Vec<Cell>,
}

impl Grid {
    /// Whether `(r, c)` sits on the grid perimeter.
    pub fn is_boundary(&self, r: u32, c: u32) -> bool {
        r == 0 || c == 0 || r + 1 == self.rows || c + 1 == self.cols
    }
}

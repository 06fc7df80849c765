//! Grid layout engine.
//!
//! The area-to-grid mapping does not conserve area:
//! `cols = max(3, floor(sqrt(area) / cell))` and
//! `rows = max(3, floor(area / (cols * cell)))`. Stored labels of existing
//! plans depend on this exact shape.

use crate::{
    error::{PlannerError, Result},
    models::{Cell, CellType, Grid},
};

/// Default edge length of a grid cell in metres.
pub const DEFAULT_CELL_SIZE_M: f64 = 4.0;

/// Minimum number of rows and columns in any grid.
const MIN_SPAN: u32 = 3;

/// Largest grid the engine will lay out. The grid holds about
/// `area / cell_size` cells, so at the default 4 m cell this is 1600 ha.
pub const MAX_CELLS: u64 = 4_000_000;

/// Species names to plant on the grid.
#[derive(Debug, Clone, Copy)]
pub struct Planting<'a> {
    pub primary: &'a str,
    pub intercrop: &'a str,
    pub tree: &'a str,
}

/// Computes `(rows, cols)` for the given area and cell size.
///
/// # Errors
///
/// Returns [`PlannerError::InvalidInput`] if either value is non-positive or
/// not finite, or if the grid would exceed [`MAX_CELLS`].
pub fn grid_dimensions(area_m2: f64, cell_size_m: f64) -> Result<(u32, u32)> {
    if !area_m2.is_finite() || area_m2 <= 0.0 {
        return Err(PlannerError::invalid_input("area_m2")
            .with_reason(format!("must be a positive number, got {area_m2}")));
    }
    if !cell_size_m.is_finite() || cell_size_m <= 0.0 {
        return Err(PlannerError::invalid_input("cell_size_m")
            .with_reason(format!("must be a positive number, got {cell_size_m}")));
    }

    let min_span = f64::from(MIN_SPAN);
    let cols = (area_m2.sqrt() / cell_size_m).floor().max(min_span);
    let rows = (area_m2 / (cols * cell_size_m)).floor().max(min_span);

    // Both spans are at most MAX_CELLS once the product is in range
    if !(rows * cols).is_finite() || rows * cols > MAX_CELLS as f64 {
        return Err(PlannerError::invalid_input("area_m2").with_reason(format!(
            "{area_m2} m² at {cell_size_m} m cells exceeds the {MAX_CELLS} cell limit"
        )));
    }

    Ok((rows as u32, cols as u32))
}

/// Lays out the plot: trees on the perimeter, crops inside alternating by row
/// parity (even rows primary, odd rows intercrop).
///
/// # Errors
///
/// Propagates [`grid_dimensions`] validation errors.
pub fn layout(area_m2: f64, planting: Planting<'_>, cell_size_m: f64) -> Result<Grid> {
    let (rows, cols) = grid_dimensions(area_m2, cell_size_m)?;
    let cell_area = cell_size_m * cell_size_m;

    let mut grid = Grid {
        rows,
        cols,
        cell_size_m,
        cells: Vec::with_capacity(rows as usize * cols as usize),
    };

    for r in 0..rows {
        for c in 0..cols {
            let (cell_type, species) = if grid.is_boundary(r, c) {
                (CellType::Tree, planting.tree)
            } else if r % 2 == 0 {
                (CellType::Crop, planting.primary)
            } else {
                (CellType::Crop, planting.intercrop)
            };

            grid.cells.push(Cell {
                cell_id: Cell::id_for(r, c),
                r,
                c,
                cell_type,
                species: species.to_string(),
                x_m: round2(f64::from(c) * cell_size_m),
                y_m: round2(f64::from(r) * cell_size_m),
                area_m2: cell_area,
            });
        }
    }

    Ok(grid)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

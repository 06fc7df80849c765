//! Per-cell label rows for saved plans.

use jiff::Timestamp;
use rusqlite::{params, types::Type, Row};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Cell, CellType},
};

const INSERT_LABEL_SQL: &str = "INSERT INTO labels (plan_id, cell_id, r, c, type, species, x_m, y_m, area_m2, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const SELECT_LABELS_SQL: &str = "SELECT cell_id, r, c, type, species, x_m, y_m, area_m2 FROM labels WHERE plan_id = ?1 ORDER BY id";

impl super::Database {
    /// Writes one label row per cell in a single transaction.
    ///
    /// Either every row is written or none are. Returns the number written.
    pub fn save_labels(&mut self, plan_id: u64, cells: &[Cell]) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now_str = Timestamp::now().to_string();
        {
            let mut stmt = tx
                .prepare(INSERT_LABEL_SQL)
                .db_context("Failed to prepare label insert")?;
            for cell in cells {
                stmt.execute(params![
                    plan_id as i64,
                    cell.cell_id,
                    cell.r,
                    cell.c,
                    cell.cell_type.as_str(),
                    cell.species,
                    cell.x_m,
                    cell.y_m,
                    cell.area_m2,
                    &now_str,
                ])
                .db_context("Failed to insert label")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(cells.len())
    }

    /// Lists the labels stored for a plan in insertion order.
    ///
    /// An unknown plan id yields an empty list.
    pub fn get_labels(&self, plan_id: u64) -> Result<Vec<Cell>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LABELS_SQL)
            .db_context("Failed to prepare label query")?;

        let labels = stmt
            .query_map(params![plan_id as i64], label_from_row)
            .db_context("Failed to query labels")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch labels")?;
        Ok(labels)
    }
}

fn label_from_row(row: &Row<'_>) -> rusqlite::Result<Cell> {
    let type_str: String = row.get(3)?;
    let cell_type = type_str.parse::<CellType>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            format!("Invalid cell type: {type_str}").into(),
        )
    })?;

    Ok(Cell {
        cell_id: row.get(0)?,
        r: row.get(1)?,
        c: row.get(2)?,
        cell_type,
        species: row.get(4)?,
        x_m: row.get(5)?,
        y_m: row.get(6)?,
        area_m2: row.get(7)?,
    })
}

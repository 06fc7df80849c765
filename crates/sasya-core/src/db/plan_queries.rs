//! Saved plan storage and queries.

use jiff::{civil::DateTime, tz::TimeZone, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};
use serde_json::Value;

use crate::{
    error::{DatabaseResultExt, Result},
    models::{PlanSummary, SavedPlan},
};

const INSERT_PLAN_SQL: &str =
    "INSERT INTO plans (farmer_name, plan_json, created_at) VALUES (?1, ?2, ?3)";
const SELECT_PLAN_SQL: &str =
    "SELECT id, farmer_name, plan_json, created_at FROM plans WHERE id = ?1";
const SELECT_PLAN_SUMMARIES_SQL: &str = "SELECT p.id, p.farmer_name, p.created_at, \
     (SELECT COUNT(1) FROM labels l WHERE l.plan_id = p.id) AS label_count \
     FROM plans p ORDER BY p.id DESC";

impl super::Database {
    /// Stores a plan document verbatim and returns its new id.
    pub fn save_plan(&self, farmer_name: &str, document: &Value) -> Result<u64> {
        let plan_json = serde_json::to_string(document)?;
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_PLAN_SQL,
                params![farmer_name, plan_json, now.to_string()],
            )
            .db_context("Failed to insert plan")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Retrieves a saved plan by its ID.
    pub fn get_plan(&self, id: u64) -> Result<Option<SavedPlan>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare query")?;

        let row = stmt
            .query_row(params![id as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)? as u64,
                    row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    row.get::<_, String>(2)?,
                    created_at_from_row(row, 3)?,
                ))
            })
            .optional()
            .db_context("Failed to query plan")?;

        let Some((id, farmer_name, plan_json, created_at)) = row else {
            return Ok(None);
        };

        Ok(Some(SavedPlan {
            id,
            farmer_name,
            created_at,
            document: serde_json::from_str(&plan_json)?,
        }))
    }

    /// Lists saved plans, newest first, with their label counts.
    pub fn list_plans(&self) -> Result<Vec<PlanSummary>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SUMMARIES_SQL)
            .db_context("Failed to prepare plan listing")?;

        let plans = stmt
            .query_map([], |row| {
                Ok(PlanSummary {
                    id: row.get::<_, i64>(0)? as u64,
                    farmer_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                    created_at: created_at_from_row(row, 2)?,
                    label_count: row.get::<_, i64>(3)? as u32,
                })
            })
            .db_context("Failed to query plans")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plans")?;
        Ok(plans)
    }
}

/// Reads a `created_at` column written either as an RFC 3339 timestamp or as
/// SQLite's `datetime('now')` text, which is UTC without an offset.
pub(super) fn created_at_from_row(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    let text: String = row.get(idx)?;
    parse_created_at(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn parse_created_at(text: &str) -> std::result::Result<Timestamp, jiff::Error> {
    match text.parse::<Timestamp>() {
        Ok(ts) => Ok(ts),
        Err(_) => text
            .parse::<DateTime>()
            .and_then(|dt| dt.to_zoned(TimeZone::UTC))
            .map(|zoned| zoned.timestamp()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rfc3339_timestamps() {
        let ts = parse_created_at("2024-05-01T10:20:30Z").unwrap();
        assert_eq!(ts.as_second(), 1_714_558_830);
    }

    #[test]
    fn parses_sqlite_datetime_as_utc() {
        let ts = parse_created_at("2024-05-01 10:20:30").unwrap();
        assert_eq!(ts.as_second(), 1_714_558_830);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_created_at("yesterday").is_err());
    }
}

//! Parameter structures for Sasya operations.
//!
//! These are shared across interfaces (CLI, HTTP, MCP). Interface layers
//! either deserialize them directly or build them from their own argument
//! types, so the core stays free of framework derives beyond the optional
//! `schema` feature.
//!
//! Site requests are loose on the wire: numeric fields accept
//! numbers or numeric strings, and several fields have short aliases. Parsing
//! into a typed [`SiteInput`] happens in one place, [`SiteRequest::into_site_input`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{PlannerError, Result},
    models::{InvestmentLevel, SiteInput, DEFAULT_AREA_M2, DEFAULT_RAINFALL_MM, DEFAULT_SOIL_PH},
};

/// Farmer name stored when a save request names nobody.
pub const UNKNOWN_FARMER: &str = "Unknown";

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the saved plan
    pub id: u64,
}

/// Site conditions as submitted by a client.
///
/// Missing fields take their defaults (400 mm, pH 6.5, 8000 m², low).
/// Fields that are present but cannot be parsed are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SiteRequest {
    /// Annual rainfall in mm (number or numeric string)
    #[serde(default, alias = "rainfall", skip_serializing_if = "Option::is_none")]
    pub rainfall_mm: Option<Value>,
    /// Soil pH (number or numeric string)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_ph: Option<Value>,
    /// Plot area in square metres (number or numeric string)
    #[serde(default, alias = "area", skip_serializing_if = "Option::is_none")]
    pub area_m2: Option<Value>,
    /// Investment level: low, medium or high
    #[serde(default, alias = "investment", skip_serializing_if = "Option::is_none")]
    pub investment_level: Option<String>,
}

impl SiteRequest {
    /// Builds a request from already-typed values, as the CLI does.
    pub fn from_values(
        rainfall_mm: Option<f64>,
        soil_ph: Option<f64>,
        area_m2: Option<f64>,
        investment_level: Option<String>,
    ) -> Self {
        Self {
            rainfall_mm: rainfall_mm.map(Value::from),
            soil_ph: soil_ph.map(Value::from),
            area_m2: area_m2.map(Value::from),
            investment_level,
        }
    }

    /// Parses the request into typed site conditions.
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::InvalidInput`] naming the first field that is
    /// present but not a finite number, or an unknown investment level.
    pub fn into_site_input(self) -> Result<SiteInput> {
        let rainfall_mm = parse_number("rainfall_mm", self.rainfall_mm, DEFAULT_RAINFALL_MM)?;
        let soil_ph = parse_number("soil_ph", self.soil_ph, DEFAULT_SOIL_PH)?;
        let area_m2 = parse_number("area_m2", self.area_m2, DEFAULT_AREA_M2)?;
        let investment_level = match self.investment_level {
            None => InvestmentLevel::default(),
            Some(level) => level
                .parse::<InvestmentLevel>()
                .map_err(|reason| PlannerError::invalid_input("investment_level").with_reason(reason))?,
        };

        Ok(SiteInput {
            rainfall_mm,
            soil_ph,
            area_m2,
            investment_level,
        })
    }
}

fn parse_number(field: &str, value: Option<Value>, default: f64) -> Result<f64> {
    let parsed = match value {
        None | Some(Value::Null) => return Ok(default),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(PlannerError::invalid_input(field).with_reason("expected a finite number")),
    }
}

/// Parameters for saving a plan document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SavePlan {
    /// Name of the farmer the plan belongs to
    #[serde(default)]
    pub farmer_name: Option<String>,
    /// The plan document, stored verbatim
    pub plan: Value,
}

impl SavePlan {
    /// Interprets a raw save payload.
    ///
    /// The payload may wrap the document as `{farmer_name?, plan}` or be the
    /// plan document itself.
    pub fn from_payload(payload: Value) -> Self {
        let farmer_name = payload
            .get("farmer_name")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .map(String::from)
            .or_else(|| input_name(&payload));

        let plan = match payload.get("plan") {
            Some(plan) if !plan.is_null() => plan.clone(),
            _ => payload,
        };

        Self { farmer_name, plan }
    }

    /// The farmer name to store: the explicit name, then the plan's
    /// `input.name`, then [`UNKNOWN_FARMER`].
    pub fn resolved_farmer_name(&self) -> String {
        self.farmer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .or_else(|| input_name(&self.plan))
            .unwrap_or_else(|| UNKNOWN_FARMER.to_string())
    }
}

fn input_name(document: &Value) -> Option<String> {
    document
        .pointer("/input/name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_request_uses_defaults() {
        let site = SiteRequest::default().into_site_input().unwrap();
        assert_eq!(site, SiteInput::default());
    }

    #[test]
    fn aliases_and_numeric_strings_are_accepted() {
        let request: SiteRequest = serde_json::from_value(json!({
            "rainfall": "550",
            "area": 1200,
            "soil_ph": " 7.1 ",
            "investment": "HIGH"
        }))
        .unwrap();

        let site = request.into_site_input().unwrap();
        assert_eq!(site.rainfall_mm, 550.0);
        assert_eq!(site.area_m2, 1200.0);
        assert_eq!(site.soil_ph, 7.1);
        assert_eq!(site.investment_level, InvestmentLevel::High);
    }

    #[test]
    fn present_but_invalid_field_is_rejected() {
        let request: SiteRequest = serde_json::from_value(json!({"rainfall_mm": "lots"})).unwrap();
        match request.into_site_input() {
            Err(PlannerError::InvalidInput { field, .. }) => assert_eq!(field, "rainfall_mm"),
            other => panic!("expected invalid input, got {other:?}"),
        }

        let request: SiteRequest = serde_json::from_value(json!({"area_m2": [1, 2]})).unwrap();
        assert!(request.into_site_input().is_err());
    }

    #[test]
    fn unknown_investment_level_is_rejected() {
        let request = SiteRequest::from_values(None, None, None, Some("extreme".into()));
        match request.into_site_input() {
            Err(PlannerError::InvalidInput { field, .. }) => assert_eq!(field, "investment_level"),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn null_counts_as_missing() {
        let request: SiteRequest = serde_json::from_value(json!({"soil_ph": null})).unwrap();
        assert_eq!(request.into_site_input().unwrap().soil_ph, DEFAULT_SOIL_PH);
    }

    #[test]
    fn save_payload_unwraps_plan_and_name() {
        let save = SavePlan::from_payload(json!({
            "farmer_name": "Lakshmi",
            "plan": {"layout": {"cells": []}}
        }));
        assert_eq!(save.resolved_farmer_name(), "Lakshmi");
        assert_eq!(save.plan, json!({"layout": {"cells": []}}));
    }

    #[test]
    fn bare_plan_payload_is_the_document() {
        let payload = json!({"input": {"name": "Ravi"}, "layout": {"cells": []}});
        let save = SavePlan::from_payload(payload.clone());
        assert_eq!(save.plan, payload);
        assert_eq!(save.resolved_farmer_name(), "Ravi");
    }

    #[test]
    fn farmer_name_falls_back_to_unknown() {
        let save = SavePlan {
            farmer_name: Some("   ".into()),
            plan: json!({"input": {"rainfall_mm": 400}}),
        };
        assert_eq!(save.resolved_farmer_name(), UNKNOWN_FARMER);
    }
}

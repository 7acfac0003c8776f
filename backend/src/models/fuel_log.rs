use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ship::ShipId;
use super::voyage::VoyageId;

crate::define_id_type!(FuelLogId, "fuel log");

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeaConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_state: Option<String>,
}

/// One fuel/usage sample taken during a voyage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelLog {
    pub id: FuelLogId,
    pub ship_id: ShipId,
    pub voyage_id: VoyageId,
    pub timestamp: DateTime<Utc>,
    pub fuel_consumption: f64,
    #[serde(default)]
    pub fuel_efficiency: Option<f64>,
    /// Percent of rated load, 0–100.
    #[serde(default)]
    pub engine_load: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPosition>,
    #[serde(default)]
    pub weather: Option<SeaConditions>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFuelLog {
    pub ship_id: ShipId,
    pub voyage_id: VoyageId,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    pub fuel_consumption: f64,
    #[serde(default)]
    pub fuel_efficiency: Option<f64>,
    #[serde(default)]
    pub engine_load: Option<f64>,
    #[serde(default)]
    pub speed: Option<f64>,
    #[serde(default)]
    pub location: Option<GeoPosition>,
    #[serde(default)]
    pub weather: Option<SeaConditions>,
}

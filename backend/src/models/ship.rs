use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id_type!(ShipId, "ship");

/// Propulsion type of a ship. Drives the nominal cruising speed of the basic
/// voyage plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Diesel,
    GasTurbine,
    Electric,
    Hybrid,
}

impl EngineType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Diesel => "diesel",
            EngineType::GasTurbine => "gas_turbine",
            EngineType::Electric => "electric",
            EngineType::Hybrid => "hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipStatus {
    #[default]
    Active,
    Maintenance,
    Retired,
}

/// A registered ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: ShipId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub engine_type: EngineType,
    /// Cargo capacity, same unit as voyage cargo.
    pub capacity: f64,
    pub status: ShipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when registering a ship. The repository assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShip {
    #[serde(default)]
    pub name: Option<String>,
    pub engine_type: EngineType,
    pub capacity: f64,
    #[serde(default)]
    pub status: ShipStatus,
}

/// Compact ship reference embedded in voyage and alert responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipSummary {
    pub id: ShipId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub engine_type: EngineType,
    pub capacity: f64,
}

impl From<&Ship> for ShipSummary {
    fn from(ship: &Ship) -> Self {
        Self {
            id: ship.id,
            name: ship.name.clone(),
            engine_type: ship.engine_type,
            capacity: ship.capacity,
        }
    }
}

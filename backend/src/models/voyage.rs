use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ship::ShipId;

crate::define_id_type!(VoyageId, "voyage");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoyageStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Cancelled,
}

/// Weather conditions recorded at planning time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub forecast: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
}

impl WeatherForecast {
    pub fn from_summary(forecast: impl Into<String>) -> Self {
        Self {
            forecast: forecast.into(),
            ..Default::default()
        }
    }
}

/// Plan produced for a voyage, either by the external optimizer or by the
/// basic fallback formula.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyagePlan {
    #[serde(default)]
    pub estimated_arrival: Option<DateTime<Utc>>,
    /// Knots.
    #[serde(default)]
    pub planned_speed: Option<f64>,
    #[serde(default)]
    pub expected_fuel_use: Option<f64>,
    #[serde(default)]
    pub route: Vec<String>,
    /// Hours.
    #[serde(default)]
    pub estimated_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimization_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Observed figures reported after (or during) a voyage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageActuals {
    #[serde(default)]
    pub actual_arrival: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_speed: Option<f64>,
    #[serde(default)]
    pub actual_fuel_used: Option<f64>,
    #[serde(default)]
    pub actual_route: Vec<String>,
    #[serde(default)]
    pub actual_duration: Option<f64>,
    /// Free-text anomaly notes, e.g. "storm delay at port".
    #[serde(default)]
    pub deviations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voyage {
    pub id: VoyageId,
    pub ship_id: ShipId,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
    pub cargo: f64,
    pub weather: WeatherForecast,
    #[serde(default)]
    pub plan: Option<VoyagePlan>,
    #[serde(default)]
    pub actuals: Option<VoyageActuals>,
    pub status: VoyageStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating a voyage. The repository assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVoyage {
    pub ship_id: ShipId,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub cargo: f64,
    pub weather: WeatherForecast,
    #[serde(default)]
    pub plan: Option<VoyagePlan>,
    #[serde(default)]
    pub actuals: Option<VoyageActuals>,
    #[serde(default)]
    pub status: VoyageStatus,
}

/// Planned side of a variance comparison. Absent fields are excluded from the
/// comparison rather than treated as zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMetrics {
    #[serde(default)]
    pub expected_fuel_use: Option<f64>,
    #[serde(default)]
    pub planned_speed: Option<f64>,
    #[serde(default)]
    pub estimated_duration: Option<f64>,
}

/// Observed side of a variance comparison.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActualMetrics {
    #[serde(default)]
    pub actual_fuel_used: Option<f64>,
    #[serde(default)]
    pub actual_speed: Option<f64>,
    #[serde(default)]
    pub actual_duration: Option<f64>,
    #[serde(default)]
    pub deviations: Vec<String>,
}

impl From<&VoyagePlan> for PlannedMetrics {
    fn from(plan: &VoyagePlan) -> Self {
        Self {
            expected_fuel_use: plan.expected_fuel_use,
            planned_speed: plan.planned_speed,
            estimated_duration: plan.estimated_duration,
        }
    }
}

impl From<&VoyageActuals> for ActualMetrics {
    fn from(actuals: &VoyageActuals) -> Self {
        Self {
            actual_fuel_used: actuals.actual_fuel_used,
            actual_speed: actuals.actual_speed,
            actual_duration: actuals.actual_duration,
            deviations: actuals.deviations.clone(),
        }
    }
}

//! Data Transfer Objects for the HTTP API.
//!
//! Request bodies keep required fields optional so a missing field yields the
//! API's own 400 message instead of a generic deserialization rejection.
//! Response payloads are the service types from [`crate::api`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{ShipId, VoyageId, WeatherForecast};
use crate::optimizer::OptimizerHealth;
use crate::services::maintenance::CompleteMaintenance;
use crate::services::voyages::FeedbackInput;

/// Success envelope wrapping every response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// Weather as either a bare summary (`"clear"`) or a full forecast object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WeatherInput {
    Summary(String),
    Detailed(WeatherForecast),
}

impl From<WeatherInput> for WeatherForecast {
    fn from(input: WeatherInput) -> Self {
        match input {
            WeatherInput::Summary(summary) => WeatherForecast::from_summary(summary),
            WeatherInput::Detailed(forecast) => forecast,
        }
    }
}

/// A single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    /// Blank entries are dropped.
    pub fn into_vec(self) -> Vec<String> {
        let items = match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        };
        items
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .collect()
    }
}

/// Request body for `POST /api/v1/plan-voyage`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanVoyageRequest {
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub weather_forecast: Option<WeatherInput>,
    #[serde(default)]
    pub cargo_load: Option<f64>,
    #[serde(default)]
    pub ship_id: Option<ShipId>,
}

/// Request body for `POST /api/v1/feedback`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[serde(default)]
    pub voyage_id: Option<VoyageId>,
    #[serde(default)]
    pub actual_fuel_used: Option<f64>,
    #[serde(default)]
    pub actual_arrival: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_speed: Option<f64>,
    #[serde(default)]
    pub actual_duration: Option<f64>,
    #[serde(default)]
    pub deviations: Option<OneOrMany>,
}

impl FeedbackRequest {
    pub fn into_input(self, voyage_id: VoyageId) -> FeedbackInput {
        FeedbackInput {
            voyage_id,
            actual_fuel_used: self.actual_fuel_used,
            actual_arrival: self.actual_arrival,
            actual_speed: self.actual_speed,
            actual_duration: self.actual_duration,
            deviations: self.deviations.map(OneOrMany::into_vec).unwrap_or_default(),
        }
    }
}

/// Query parameters for `GET /api/v1/plan-history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams {
    #[serde(default)]
    pub ship_id: Option<ShipId>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Query parameters for `GET /api/v1/maintenance-alerts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertParams {
    #[serde(default)]
    pub ship_id: Option<ShipId>,
    /// Days ahead of now
    #[serde(default)]
    pub timeframe: Option<i64>,
}

/// Request body for `POST /api/v1/maintenance/{id}/complete`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteMaintenanceRequest {
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_duration: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl From<CompleteMaintenanceRequest> for CompleteMaintenance {
    fn from(req: CompleteMaintenanceRequest) -> Self {
        Self {
            completed_date: req.completed_date,
            actual_duration: req.actual_duration,
            cost: req.cost,
        }
    }
}

/// Request body for `POST /api/v1/maintenance/{id}/reschedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub scheduled_date: DateTime<Utc>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository connection status
    pub repository: String,
    /// External optimization service status
    pub optimizer: OptimizerHealth,
}

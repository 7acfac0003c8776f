//! External optimization collaborator.
//!
//! An [`OptimizationService`] may plan routes, predict maintenance and analyze
//! voyage performance. It is optional and unreliable by assumption: the
//! [`Advisor`] wraps it and substitutes the deterministic computations from
//! [`crate::services`] whenever it is absent or fails.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    FuelLog, MaintenanceRecommendation, ShipId, ShipSummary, VoyageActuals, VoyageId, VoyagePlan,
    WeatherForecast,
};

mod advisor;
#[cfg(feature = "ai-service")]
pub mod http_client;

pub use advisor::Advisor;
#[cfg(feature = "ai-service")]
pub use http_client::HttpOptimizer;


pub const PREDICTIVE_MAINTENANCE: &str = "predictive_maintenance";

#[derive(Debug, thiserror::Error)]
pub enum OptimizerError {
    #[error("Optimization service request failed: {0}")]
    Http(String),

    #[error("Optimization service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode optimization service response: {0}")]
    Decode(String),

    #[error("Optimization service unavailable: {0}")]
    Unavailable(String),
}

/// Voyage half of a route optimization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageRequest {
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub cargo_load: f64,
    pub weather_forecast: WeatherForecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteOptimizationRequest {
    pub ship: ShipSummary,
    pub voyage: VoyageRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePredictionRequest {
    pub ship: ShipSummary,
    pub usage_history: Vec<FuelLog>,
    pub analysis_type: String,
}

impl MaintenancePredictionRequest {
    pub fn new(ship: ShipSummary, usage_history: Vec<FuelLog>) -> Self {
        Self {
            ship,
            usage_history,
            analysis_type: PREDICTIVE_MAINTENANCE.to_string(),
        }
    }
}

/// Voyage identity and conditions sent along with plan and actuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoyageSnapshot {
    pub id: VoyageId,
    pub origin: String,
    pub destination: String,
    pub cargo: f64,
    pub weather: WeatherForecast,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalysisRequest {
    pub voyage: VoyageSnapshot,
    pub planned: Option<VoyagePlan>,
    pub actuals: Option<VoyageActuals>,
    pub ship: ShipId,
}

/// Reachability of the external service, reported by `/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerHealth {
    pub status: String,
    pub ai_service_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OptimizerHealth {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            ai_service_available: true,
            error: None,
        }
    }

    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            status: "unhealthy".to_string(),
            ai_service_available: false,
            error: Some(error.into()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            status: "disabled".to_string(),
            ai_service_available: false,
            error: None,
        }
    }
}

#[async_trait]
pub trait OptimizationService: Send + Sync {
    async fn optimize_route(
        &self,
        request: &RouteOptimizationRequest,
    ) -> Result<VoyagePlan, OptimizerError>;

    async fn predict_maintenance(
        &self,
        request: &MaintenancePredictionRequest,
    ) -> Result<Vec<MaintenanceRecommendation>, OptimizerError>;

    async fn analyze_performance(
        &self,
        request: &PerformanceAnalysisRequest,
    ) -> Result<Vec<String>, OptimizerError>;

    async fn health(&self) -> OptimizerHealth;
}

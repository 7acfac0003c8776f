//! Public API surface.
//!
//! Consolidates the serializable types that cross the HTTP boundary. All of
//! them use camelCase field names on the wire.

pub use crate::models::{
    ActualMetrics, AiReasonCode, EngineType, FuelLog, FuelLogId, GeoPosition, MaintenanceId,
    MaintenancePriority, MaintenanceRecommendation, MaintenanceRecord, MaintenanceStatus,
    MaintenanceType, NewFuelLog, NewMaintenance, NewShip, PlannedMetrics, SeaConditions, Ship,
    ShipId, ShipStatus, ShipSummary, Voyage, VoyageActuals, VoyageId, VoyagePlan, VoyageStatus,
    WeatherForecast,
};
pub use crate::optimizer::OptimizerHealth;
pub use crate::services::maintenance::{AlertSummary, MaintenanceOverview};
pub use crate::services::maintenance_alerts::{AlertBuckets, MaintenanceAlert};
pub use crate::services::variance::{MetricVariance, StatusLabel, VarianceReport};
pub use crate::services::voyages::{
    ActualFigures, FeedbackOutcome, HistoryEntry, Pagination, PlanHistory, PlannedFigures,
    PlannedVoyage, RouteEndpoints,
};

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ship::ShipId;

crate::define_id_type!(MaintenanceId, "maintenance");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceType {
    Routine,
    Preventive,
    Corrective,
    Emergency,
    Overhaul,
}

/// Ordered from least to most urgent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "low",
            MaintenancePriority::Medium => "medium",
            MaintenancePriority::High => "high",
            MaintenancePriority::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

/// Why a piece of maintenance was suggested by the recommendation chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AiReasonCode {
    #[default]
    UsageThreshold,
    TimeBased,
    PerformanceDegradation,
    FailurePrediction,
}

/// A scheduled piece of maintenance work on a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,
    pub ship_id: ShipId,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    /// Hours.
    pub estimated_duration: f64,
    #[serde(default)]
    pub actual_duration: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    pub ai_recommended: bool,
    pub ai_reason_code: AiReasonCode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when scheduling maintenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenance {
    pub ship_id: ShipId,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    #[serde(default)]
    pub component: Option<String>,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub estimated_duration: f64,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub priority: MaintenancePriority,
    #[serde(default)]
    pub ai_recommended: bool,
    #[serde(default)]
    pub ai_reason_code: AiReasonCode,
}

/// Suggested maintenance emitted by the recommendation chain. Not persisted
/// until someone schedules it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecommendation {
    pub ship_id: ShipId,
    pub component: String,
    pub description: String,
    pub priority: MaintenancePriority,
    pub suggested_date: DateTime<Utc>,
    pub reason: String,
    pub reason_code: AiReasonCode,
    pub ai_confidence: f64,
    pub source: String,
}

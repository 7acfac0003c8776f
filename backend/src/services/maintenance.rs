//! Maintenance scheduling and the alert overview.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ServiceError, ServiceResult};
use super::maintenance_alerts::{classify_alerts, AlertBuckets};
use crate::db::{
    FuelLogRepository, FullRepository, MaintenanceQuery, MaintenanceRepository, ShipRepository,
};
use crate::models::*;
use crate::optimizer::Advisor;

pub const DEFAULT_TIMEFRAME_DAYS: i64 = 30;
pub const MAX_TIMEFRAME_DAYS: i64 = 3650;
/// Usage history window fed to the recommendation chain.
pub const USAGE_WINDOW_DAYS: i64 = 30;
pub const USAGE_SAMPLE_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertQuery {
    pub ship_id: Option<ShipId>,
    pub timeframe_days: i64,
}

impl Default for AlertQuery {
    fn default() -> Self {
        Self {
            ship_id: None,
            timeframe_days: DEFAULT_TIMEFRAME_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub total_scheduled: usize,
    pub critical_count: usize,
    pub upcoming_count: usize,
    pub overdue_count: usize,
    pub ai_recommendations: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceOverview {
    pub scheduled_alerts: AlertBuckets,
    pub ai_recommendations: Vec<MaintenanceRecommendation>,
    pub summary: AlertSummary,
    pub timeframe: i64,
}

/// Closing details for a maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompleteMaintenance {
    pub completed_date: Option<DateTime<Utc>>,
    pub actual_duration: Option<f64>,
    pub cost: Option<f64>,
}

fn is_open(status: MaintenanceStatus) -> bool {
    !matches!(
        status,
        MaintenanceStatus::Completed | MaintenanceStatus::Cancelled
    )
}

fn non_negative(field: &str, value: Option<f64>) -> ServiceResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ServiceError::validation(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}

/// Open maintenance due within the timeframe, bucketed, plus recommendations
/// when a known ship is given.
pub async fn maintenance_alerts(
    repo: &dyn FullRepository,
    advisor: &Advisor,
    query: AlertQuery,
    now: DateTime<Utc>,
) -> ServiceResult<MaintenanceOverview> {
    if !(0..=MAX_TIMEFRAME_DAYS).contains(&query.timeframe_days) {
        return Err(ServiceError::validation(format!(
            "timeframe must be between 0 and {} days",
            MAX_TIMEFRAME_DAYS
        )));
    }

    let records: Vec<MaintenanceRecord> = repo
        .list_maintenance(MaintenanceQuery {
            ship_id: query.ship_id,
            scheduled_before: Some(now + Duration::days(query.timeframe_days)),
        })
        .await?
        .into_iter()
        // Closed jobs are history, not alerts.
        .filter(|r| is_open(r.status))
        .collect();

    let buckets = classify_alerts(&records, now);

    let recommendations = match query.ship_id {
        Some(ship_id) => ship_recommendations(repo, advisor, ship_id, now).await,
        None => Vec::new(),
    };

    let summary = AlertSummary {
        total_scheduled: records.len(),
        critical_count: buckets.critical.len(),
        upcoming_count: buckets.upcoming.len(),
        overdue_count: buckets.overdue.len(),
        ai_recommendations: recommendations.len(),
    };
    log::debug!(
        "maintenance alerts: {} scheduled, {} overdue, {} critical",
        summary.total_scheduled,
        summary.overdue_count,
        summary.critical_count
    );

    Ok(MaintenanceOverview {
        scheduled_alerts: buckets,
        ai_recommendations: recommendations,
        summary,
        timeframe: query.timeframe_days,
    })
}

// Recommendations are advisory: lookup failures yield none rather than failing the overview.
async fn ship_recommendations(
    repo: &dyn FullRepository,
    advisor: &Advisor,
    ship_id: ShipId,
    now: DateTime<Utc>,
) -> Vec<MaintenanceRecommendation> {
    let ship = match repo.get_ship(ship_id).await {
        Ok(ship) => ship,
        Err(e) if e.is_not_found() => return Vec::new(),
        Err(e) => {
            log::warn!("Skipping recommendations for ship {}: {}", ship_id, e);
            return Vec::new();
        }
    };
    let since = now - Duration::days(USAGE_WINDOW_DAYS);
    let usage = match repo.recent_fuel_logs(ship_id, since, USAGE_SAMPLE_LIMIT).await {
        Ok(usage) => usage,
        Err(e) => {
            log::warn!("Skipping recommendations for ship {}: {}", ship_id, e);
            return Vec::new();
        }
    };
    advisor.recommend_maintenance(&ship, &usage, now).await
}

pub async fn schedule_maintenance(
    repo: &dyn FullRepository,
    record: NewMaintenance,
) -> ServiceResult<MaintenanceRecord> {
    if record.description.trim().is_empty() {
        return Err(ServiceError::validation("description is required"));
    }
    non_negative("estimatedDuration", Some(record.estimated_duration))?;
    non_negative("cost", record.cost)?;

    let stored = repo.insert_maintenance(record).await?;
    log::info!(
        "Scheduled {} maintenance {} for ship {} on {}",
        stored.priority.as_str(),
        stored.id,
        stored.ship_id,
        stored.scheduled_date
    );
    Ok(stored)
}

pub async fn complete_maintenance(
    repo: &dyn FullRepository,
    id: MaintenanceId,
    details: CompleteMaintenance,
    now: DateTime<Utc>,
) -> ServiceResult<MaintenanceRecord> {
    non_negative("actualDuration", details.actual_duration)?;
    non_negative("cost", details.cost)?;

    let mut record = repo.get_maintenance(id).await?;
    if record.status == MaintenanceStatus::Cancelled {
        return Err(ServiceError::validation(
            "cancelled maintenance cannot be completed",
        ));
    }

    record.status = MaintenanceStatus::Completed;
    record.completed_date = Some(details.completed_date.unwrap_or(now));
    if details.actual_duration.is_some() {
        record.actual_duration = details.actual_duration;
    }
    if details.cost.is_some() {
        record.cost = details.cost;
    }

    let stored = repo.update_maintenance(&record).await?;
    log::info!("Completed maintenance {}", stored.id);
    Ok(stored)
}

pub async fn reschedule_maintenance(
    repo: &dyn FullRepository,
    id: MaintenanceId,
    scheduled_date: DateTime<Utc>,
) -> ServiceResult<MaintenanceRecord> {
    let mut record = repo.get_maintenance(id).await?;
    if record.status == MaintenanceStatus::Completed {
        return Err(ServiceError::validation(
            "completed maintenance cannot be rescheduled",
        ));
    }

    record.scheduled_date = scheduled_date;
    record.status = MaintenanceStatus::Scheduled;

    let stored = repo.update_maintenance(&record).await?;
    log::info!("Rescheduled maintenance {} to {}", stored.id, scheduled_date);
    Ok(stored)
}

#[cfg(test)]
#[path = "maintenance_tests.rs"]
mod maintenance_tests;

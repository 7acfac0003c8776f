//! Classification of scheduled maintenance into overdue / critical / upcoming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    MaintenanceId, MaintenancePriority, MaintenanceRecord, MaintenanceStatus, MaintenanceType,
    ShipId,
};

const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

/// Records due within this many days are critical regardless of priority.
pub const CRITICAL_WINDOW_DAYS: i64 = 3;

/// A maintenance record enriched with its distance from the reference time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAlert {
    pub id: MaintenanceId,
    pub ship_id: ShipId,
    #[serde(rename = "type")]
    pub maintenance_type: MaintenanceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    pub description: String,
    pub scheduled_date: DateTime<Utc>,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    /// Signed whole days until `scheduled_date`, rounded up.
    pub days_until: i64,
}

/// The three alert buckets. Every classified record lands in exactly one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AlertBuckets {
    pub critical: Vec<MaintenanceAlert>,
    pub upcoming: Vec<MaintenanceAlert>,
    pub overdue: Vec<MaintenanceAlert>,
}

impl AlertBuckets {
    pub fn total(&self) -> usize {
        self.critical.len() + self.upcoming.len() + self.overdue.len()
    }
}

/// Ceiling of `(scheduled - now)` in days. Negative once the date has passed.
pub fn days_until(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (scheduled - now).num_milliseconds() as f64;
    (millis / MILLIS_PER_DAY).ceil() as i64
}

fn to_alert(record: &MaintenanceRecord, days_until: i64) -> MaintenanceAlert {
    MaintenanceAlert {
        id: record.id,
        ship_id: record.ship_id,
        maintenance_type: record.maintenance_type,
        component: record.component.clone(),
        description: record.description.clone(),
        scheduled_date: record.scheduled_date,
        priority: record.priority,
        status: record.status,
        days_until,
    }
}

/// Partition records into alert buckets relative to `now`.
///
/// Overdue wins over priority; otherwise critical priority or a due date within
/// [`CRITICAL_WINDOW_DAYS`] makes an alert critical. Input order is kept within
/// each bucket, so callers sort by `scheduled_date` beforehand.
pub fn classify_alerts(records: &[MaintenanceRecord], now: DateTime<Utc>) -> AlertBuckets {
    let mut buckets = AlertBuckets::default();

    for record in records {
        let days = days_until(record.scheduled_date, now);
        let alert = to_alert(record, days);

        if days < 0 {
            buckets.overdue.push(alert);
        } else if record.priority == MaintenancePriority::Critical || days <= CRITICAL_WINDOW_DAYS
        {
            buckets.critical.push(alert);
        } else {
            buckets.upcoming.push(alert);
        }
    }

    log::debug!(
        "classified {} maintenance record(s): {} overdue, {} critical, {} upcoming",
        records.len(),
        buckets.overdue.len(),
        buckets.critical.len(),
        buckets.upcoming.len()
    );
    buckets
}

#[cfg(test)]
#[path = "maintenance_alerts_tests.rs"]
mod maintenance_alerts_tests;

//! Basic maintenance recommendations, used whenever the external prediction
//! service is absent or fails.

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    AiReasonCode, FuelLog, MaintenancePriority, MaintenanceRecommendation, Ship,
};

/// The efficiency check needs strictly more samples than this.
pub const MIN_EFFICIENCY_SAMPLES: usize = 10;
/// Mean efficiency below this suggests engine degradation.
pub const EFFICIENCY_THRESHOLD: f64 = 15.0;

pub const BASIC_SOURCE: &str = "basic_analysis";

/// Mean `fuel_efficiency` across all entries. Entries without a value count as
/// zero but still count toward the denominator.
pub fn mean_fuel_efficiency(usage: &[FuelLog]) -> Option<f64> {
    if usage.is_empty() {
        return None;
    }
    let total: f64 = usage.iter().map(|log| log.fuel_efficiency.unwrap_or(0.0)).sum();
    Some(total / usage.len() as f64)
}

/// Recommendations for one ship from its recent usage (newest first).
///
/// Emits an engine check when there are enough samples and the mean efficiency
/// is low, then always a routine general-systems check.
pub fn basic_recommendations(
    ship: &Ship,
    usage: &[FuelLog],
    now: DateTime<Utc>,
) -> Vec<MaintenanceRecommendation> {
    let mut recommendations = Vec::with_capacity(2);

    if usage.len() > MIN_EFFICIENCY_SAMPLES {
        if let Some(mean) = mean_fuel_efficiency(usage) {
            if mean < EFFICIENCY_THRESHOLD {
                log::debug!(
                    "ship {} mean fuel efficiency {:.2} below {}",
                    ship.id,
                    mean,
                    EFFICIENCY_THRESHOLD
                );
                recommendations.push(MaintenanceRecommendation {
                    ship_id: ship.id,
                    component: "Engine".to_string(),
                    description: "Engine efficiency below optimal range".to_string(),
                    priority: MaintenancePriority::Medium,
                    suggested_date: now + Duration::days(7),
                    reason: "Performance degradation detected".to_string(),
                    reason_code: AiReasonCode::PerformanceDegradation,
                    ai_confidence: 0.7,
                    source: BASIC_SOURCE.to_string(),
                });
            }
        }
    }

    recommendations.push(MaintenanceRecommendation {
        ship_id: ship.id,
        component: "General Systems".to_string(),
        description: "Routine maintenance cycle due".to_string(),
        priority: MaintenancePriority::Low,
        suggested_date: now + Duration::days(14),
        reason: "Time-based maintenance schedule".to_string(),
        reason_code: AiReasonCode::TimeBased,
        ai_confidence: 0.9,
        source: BASIC_SOURCE.to_string(),
    });

    recommendations
}

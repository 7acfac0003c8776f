//! Planned-versus-actual variance for a single voyage.
//!
//! Each of the three metric pairs (fuel, speed, duration) is compared only when
//! both sides carry a usable value. Missing data shrinks the report; it never
//! produces an error or a zero-filled entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{ActualMetrics, PlannedMetrics};

/// Qualitative label attached to a metric variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLabel {
    Excellent,
    Good,
    Acceptable,
    Poor,
    NeedsImprovement,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Excellent => "excellent",
            StatusLabel::Good => "good",
            StatusLabel::Acceptable => "acceptable",
            StatusLabel::Poor => "poor",
            StatusLabel::NeedsImprovement => "needs_improvement",
        }
    }
}

/// One compared metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricVariance {
    pub planned: f64,
    pub actual: f64,
    /// Signed percentage, rounded to one decimal.
    pub variance_percent: f64,
    /// Display form of `variance_percent`, e.g. `+15.0%` or `-5.0%`.
    pub variance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusLabel>,
}

/// Per-metric variance report. Serializes as a map holding only the metrics
/// that could be compared.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarianceReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_efficiency: Option<MetricVariance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_accuracy: Option<MetricVariance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_accuracy: Option<MetricVariance>,
}

impl VarianceReport {
    pub fn len(&self) -> usize {
        [
            &self.fuel_efficiency,
            &self.speed_accuracy,
            &self.time_accuracy,
        ]
        .iter()
        .filter(|m| m.is_some())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compact form used by plan history: metric name to display variance.
    pub fn summary(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        if let Some(m) = &self.fuel_efficiency {
            out.insert("fuelEfficiency", m.variance.clone());
        }
        if let Some(m) = &self.speed_accuracy {
            out.insert("speedAccuracy", m.variance.clone());
        }
        if let Some(m) = &self.time_accuracy {
            out.insert("timeAccuracy", m.variance.clone());
        }
        out
    }
}

/// A value takes part in a comparison only if it is present, finite and
/// strictly positive. This also guards the division by the planned value.
pub(crate) fn usable(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

/// Unrounded signed percent change from `planned` to `actual`.
///
/// Thresholds are applied to this value; rounding is for display only.
/// Returns `None` when either side is unusable.
pub fn raw_percent_change(planned: Option<f64>, actual: Option<f64>) -> Option<f64> {
    let planned = usable(planned)?;
    let actual = usable(actual)?;
    let raw = (actual - planned) * 100.0 / planned;
    raw.is_finite().then_some(raw)
}

fn round_percent(raw: f64) -> f64 {
    let rounded = (raw * 10.0).round() / 10.0;
    // Collapse -0.0 so it renders as "0.0%".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Signed percent change from `planned` to `actual`, rounded to one decimal.
///
/// Returns `None` when either side is unusable.
pub fn percent_change(planned: Option<f64>, actual: Option<f64>) -> Option<f64> {
    raw_percent_change(planned, actual).map(round_percent)
}

/// Render a rounded percentage the way the API reports it: `+` for positive
/// values, the minus sign carried by negatives, nothing for zero.
pub fn format_variance(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{:.1}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// Fuel bands compare the signed variance, so any saving counts as good.
pub fn fuel_status(percent: f64) -> StatusLabel {
    if percent <= 5.0 {
        StatusLabel::Good
    } else if percent <= 15.0 {
        StatusLabel::Acceptable
    } else {
        StatusLabel::Poor
    }
}

/// Duration bands compare the absolute variance.
pub fn duration_status(percent: f64) -> StatusLabel {
    let magnitude = percent.abs();
    if magnitude <= 5.0 {
        StatusLabel::Excellent
    } else if magnitude <= 10.0 {
        StatusLabel::Good
    } else {
        StatusLabel::NeedsImprovement
    }
}

fn compare(
    planned: Option<f64>,
    actual: Option<f64>,
    status: Option<fn(f64) -> StatusLabel>,
) -> Option<MetricVariance> {
    let raw = raw_percent_change(planned, actual)?;
    let variance_percent = round_percent(raw);
    Some(MetricVariance {
        planned: usable(planned)?,
        actual: usable(actual)?,
        variance_percent,
        variance: format_variance(variance_percent),
        status: status.map(|f| f(raw)),
    })
}

/// Compute the per-metric variance between a plan and what actually happened.
///
/// Speed carries no status label. A report with no entries is a valid result.
pub fn compute_variance(planned: &PlannedMetrics, actual: &ActualMetrics) -> VarianceReport {
    let report = VarianceReport {
        fuel_efficiency: compare(
            planned.expected_fuel_use,
            actual.actual_fuel_used,
            Some(fuel_status),
        ),
        speed_accuracy: compare(planned.planned_speed, actual.actual_speed, None),
        time_accuracy: compare(
            planned.estimated_duration,
            actual.actual_duration,
            Some(duration_status),
        ),
    };
    log::debug!("variance computed for {} metric(s)", report.len());
    report
}

#[cfg(test)]
#[path = "variance_tests.rs"]
mod variance_tests;

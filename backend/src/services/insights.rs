//! Human-readable advisories derived from a voyage's planned and actual figures.
//!
//! This is the deterministic stand-in for the external performance analysis:
//! the same thresholds as the variance report, phrased as sentences.

use crate::models::{ActualMetrics, PlannedMetrics};
use crate::services::variance::raw_percent_change;

pub const INCOMPLETE_DATA_INSIGHT: &str =
    "Feedback recorded. Complete voyage data needed for detailed insights.";
pub const DEFAULT_INSIGHT: &str =
    "Voyage completed successfully. Data recorded for continuous learning.";
pub const FUEL_NOMINAL_INSIGHT: &str = "Fuel consumption was within expected range.";
pub const WEATHER_DEVIATION_INSIGHT: &str =
    "Weather-related deviations detected. This data improves future weather modeling.";
pub const PORT_DEVIATION_INSIGHT: &str =
    "Port-related delays noted. Consider alternative scheduling for future voyages.";

const WEATHER_KEYWORDS: [&str; 3] = ["weather", "storm", "wind"];
const PORT_KEYWORD: &str = "port";

fn fuel_insight(percent: f64) -> String {
    if percent > 15.0 {
        format!(
            "Fuel consumption was {:.1}% higher than planned. Consider route optimization.",
            percent
        )
    } else if percent < -5.0 {
        format!(
            "Excellent fuel efficiency! Used {:.1}% less fuel than planned.",
            percent.abs()
        )
    } else {
        FUEL_NOMINAL_INSIGHT.to_string()
    }
}

// No sentence for an on-schedule voyage.
fn duration_insight(percent: f64) -> Option<String> {
    if percent > 10.0 {
        Some(format!(
            "Journey took {:.1}% longer than planned. Weather or routing factors may need adjustment.",
            percent
        ))
    } else if percent < -5.0 {
        Some(format!(
            "Journey completed {:.1}% faster than planned. Excellent performance!",
            percent.abs()
        ))
    } else {
        None
    }
}

fn mentions_any(deviations: &[String], keywords: &[&str]) -> bool {
    deviations.iter().any(|entry| {
        let entry = entry.to_lowercase();
        keywords.iter().any(|k| entry.contains(k))
    })
}

/// Generate the ordered advisory list for a voyage.
///
/// Order: fuel, duration, weather deviations, port deviations. Never empty.
pub fn generate_insights(
    planned: Option<&PlannedMetrics>,
    actual: Option<&ActualMetrics>,
) -> Vec<String> {
    let (planned, actual) = match (planned, actual) {
        (Some(p), Some(a)) => (p, a),
        _ => return vec![INCOMPLETE_DATA_INSIGHT.to_string()],
    };

    let mut insights = Vec::new();

    if let Some(percent) = raw_percent_change(planned.expected_fuel_use, actual.actual_fuel_used) {
        insights.push(fuel_insight(percent));
    }

    if let Some(sentence) = raw_percent_change(planned.estimated_duration, actual.actual_duration)
        .and_then(duration_insight)
    {
        insights.push(sentence);
    }

    if mentions_any(&actual.deviations, &WEATHER_KEYWORDS) {
        insights.push(WEATHER_DEVIATION_INSIGHT.to_string());
    }
    if mentions_any(&actual.deviations, &[PORT_KEYWORD]) {
        insights.push(PORT_DEVIATION_INSIGHT.to_string());
    }

    if insights.is_empty() {
        insights.push(DEFAULT_INSIGHT.to_string());
    }
    insights
}

#[cfg(test)]
#[path = "insights_tests.rs"]
mod insights_tests;

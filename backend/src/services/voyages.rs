//! Voyage planning, feedback and plan history.
//!
//! Each operation validates its input, fetches what it needs from the
//! repository, runs the pure computations and persists the result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::{ServiceError, ServiceResult};
use super::variance::{compute_variance, usable, VarianceReport};
use crate::db::{FullRepository, ShipRepository, VoyageQuery, VoyageRepository};
use crate::models::*;
use crate::optimizer::{
    Advisor, PerformanceAnalysisRequest, RouteOptimizationRequest, VoyageRequest, VoyageSnapshot,
};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Validated request to plan a voyage.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanVoyageInput {
    pub ship_id: ShipId,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub weather: WeatherForecast,
    pub cargo_load: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedVoyage {
    pub voyage_id: VoyageId,
    pub ship: ShipSummary,
    pub plan: VoyagePlan,
}

/// Observed figures reported after (or during) a voyage. Only usable values
/// replace stored ones.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackInput {
    pub voyage_id: VoyageId,
    pub actual_fuel_used: Option<f64>,
    pub actual_arrival: Option<DateTime<Utc>>,
    pub actual_speed: Option<f64>,
    pub actual_duration: Option<f64>,
    pub deviations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackOutcome {
    pub voyage_id: VoyageId,
    pub status: VoyageStatus,
    pub performance: VarianceReport,
    /// True when all three metrics could be compared.
    pub data_complete: bool,
    pub insights: Vec<String>,
    pub data_stored_for_learning: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryQuery {
    pub ship_id: Option<ShipId>,
    /// 1-based.
    pub page: usize,
    pub limit: usize,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            ship_id: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEndpoints {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedFigures {
    pub speed: Option<f64>,
    pub fuel: Option<f64>,
    pub duration: Option<f64>,
    pub arrival: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActualFigures {
    pub speed: Option<f64>,
    pub fuel: Option<f64>,
    pub duration: Option<f64>,
    pub arrival: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub voyage_id: VoyageId,
    pub ship: Option<ShipSummary>,
    pub route: RouteEndpoints,
    pub departure_time: DateTime<Utc>,
    pub status: VoyageStatus,
    pub cargo: f64,
    pub planned: PlannedFigures,
    pub actuals: ActualFigures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanHistory {
    pub history: Vec<HistoryEntry>,
    pub pagination: Pagination,
}

fn required_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Plan and persist a voyage for an existing ship.
pub async fn plan_voyage(
    repo: &dyn FullRepository,
    advisor: &Advisor,
    input: PlanVoyageInput,
) -> ServiceResult<PlannedVoyage> {
    let (origin, destination) = match (
        required_text(&input.origin),
        required_text(&input.destination),
    ) {
        (Some(o), Some(d)) => (o, d),
        _ => return Err(ServiceError::validation("All fields are required")),
    };
    if input.weather.forecast.trim().is_empty() || usable(Some(input.cargo_load)).is_none() {
        return Err(ServiceError::validation("All fields are required"));
    }

    let ship = repo
        .get_ship(input.ship_id)
        .await
        .map_err(|e| match e {
            e if e.is_not_found() => ServiceError::not_found("Ship not found"),
            e => e.into(),
        })?;

    if input.cargo_load > ship.capacity {
        return Err(ServiceError::validation("Cargo exceeds ship capacity"));
    }

    let request = RouteOptimizationRequest {
        ship: ShipSummary::from(&ship),
        voyage: VoyageRequest {
            origin: origin.clone(),
            destination: destination.clone(),
            departure_time: input.departure_time,
            cargo_load: input.cargo_load,
            weather_forecast: input.weather.clone(),
        },
    };
    let plan = advisor.plan_route(ship.engine_type, &request).await;

    let voyage = repo
        .insert_voyage(NewVoyage {
            ship_id: ship.id,
            origin,
            destination,
            departure_time: input.departure_time,
            cargo: input.cargo_load,
            weather: input.weather,
            plan: Some(plan.clone()),
            actuals: None,
            status: VoyageStatus::Planned,
        })
        .await?;

    log::info!(
        "Planned voyage {} for ship {}: {} -> {} ({})",
        voyage.id,
        ship.id,
        voyage.origin,
        voyage.destination,
        plan.optimization_method.as_deref().unwrap_or("unknown")
    );

    Ok(PlannedVoyage {
        voyage_id: voyage.id,
        ship: ShipSummary::from(&ship),
        plan,
    })
}

/// Overlay the supplied figures on the stored actuals.
pub fn merge_actuals(existing: Option<VoyageActuals>, input: &FeedbackInput) -> VoyageActuals {
    let mut actuals = existing.unwrap_or_default();
    if let Some(fuel) = usable(input.actual_fuel_used) {
        actuals.actual_fuel_used = Some(fuel);
    }
    if let Some(arrival) = input.actual_arrival {
        actuals.actual_arrival = Some(arrival);
    }
    if let Some(speed) = usable(input.actual_speed) {
        actuals.actual_speed = Some(speed);
    }
    if let Some(duration) = usable(input.actual_duration) {
        actuals.actual_duration = Some(duration);
    }
    if !input.deviations.is_empty() {
        actuals.deviations = input.deviations.clone();
    }
    actuals
}

/// Record actuals for a voyage and report how it went against plan.
pub async fn submit_feedback(
    repo: &dyn FullRepository,
    advisor: &Advisor,
    input: FeedbackInput,
) -> ServiceResult<FeedbackOutcome> {
    let mut voyage = repo.get_voyage(input.voyage_id).await.map_err(|e| match e {
        e if e.is_not_found() => ServiceError::not_found("Voyage not found"),
        e => e.into(),
    })?;

    voyage.actuals = Some(merge_actuals(voyage.actuals.take(), &input));
    if let Some(arrival) = input.actual_arrival {
        voyage.status = VoyageStatus::Completed;
        voyage.arrival_time = Some(arrival);
    }
    let voyage = repo.update_voyage(&voyage).await?;

    let planned = voyage.plan.as_ref().map(PlannedMetrics::from).unwrap_or_default();
    let actual = voyage.actuals.as_ref().map(ActualMetrics::from).unwrap_or_default();
    let performance = compute_variance(&planned, &actual);

    let request = PerformanceAnalysisRequest {
        voyage: VoyageSnapshot {
            id: voyage.id,
            origin: voyage.origin.clone(),
            destination: voyage.destination.clone(),
            cargo: voyage.cargo,
            weather: voyage.weather.clone(),
        },
        planned: voyage.plan.clone(),
        actuals: voyage.actuals.clone(),
        ship: voyage.ship_id,
    };
    let insights = advisor.analyze_performance(&request).await;

    log::info!(
        "Feedback stored for voyage {} ({} metrics compared)",
        voyage.id,
        performance.len()
    );

    Ok(FeedbackOutcome {
        voyage_id: voyage.id,
        status: voyage.status,
        data_complete: performance.len() == 3,
        performance,
        insights,
        data_stored_for_learning: true,
    })
}

fn history_entry(voyage: &Voyage, ship: Option<ShipSummary>) -> HistoryEntry {
    let plan = voyage.plan.clone().unwrap_or_default();
    let actuals = voyage.actuals.clone().unwrap_or_default();

    let performance = match (&voyage.plan, &voyage.actuals) {
        (Some(p), Some(a)) => {
            let report = compute_variance(&PlannedMetrics::from(p), &ActualMetrics::from(a));
            Some(
                report
                    .summary()
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            )
        }
        _ => None,
    };

    HistoryEntry {
        voyage_id: voyage.id,
        ship,
        route: RouteEndpoints {
            origin: voyage.origin.clone(),
            destination: voyage.destination.clone(),
        },
        departure_time: voyage.departure_time,
        status: voyage.status,
        cargo: voyage.cargo,
        planned: PlannedFigures {
            speed: usable(plan.planned_speed),
            fuel: usable(plan.expected_fuel_use),
            duration: usable(plan.estimated_duration),
            arrival: plan.estimated_arrival,
        },
        actuals: ActualFigures {
            speed: usable(actuals.actual_speed),
            fuel: usable(actuals.actual_fuel_used),
            duration: usable(actuals.actual_duration),
            arrival: actuals.actual_arrival,
        },
        performance,
    }
}

/// Page through voyages, newest first.
pub async fn plan_history(
    repo: &dyn FullRepository,
    query: HistoryQuery,
) -> ServiceResult<PlanHistory> {
    if query.page == 0 {
        return Err(ServiceError::validation("page must be at least 1"));
    }
    let limit = query.limit.clamp(1, MAX_PAGE_SIZE);
    let offset = (query.page - 1).saturating_mul(limit);

    let voyages = repo
        .list_voyages(VoyageQuery {
            ship_id: query.ship_id,
            offset,
            limit,
        })
        .await?;
    let total = repo.count_voyages(query.ship_id).await?;

    let mut ships: BTreeMap<ShipId, Option<ShipSummary>> = BTreeMap::new();
    let mut history = Vec::with_capacity(voyages.len());
    for voyage in &voyages {
        if !ships.contains_key(&voyage.ship_id) {
            let summary = match repo.get_ship(voyage.ship_id).await {
                Ok(ship) => Some(ShipSummary::from(&ship)),
                Err(e) if e.is_not_found() => None,
                Err(e) => return Err(e.into()),
            };
            ships.insert(voyage.ship_id, summary);
        }
        let ship = ships.get(&voyage.ship_id).cloned().flatten();
        history.push(history_entry(voyage, ship));
    }

    Ok(PlanHistory {
        history,
        pagination: Pagination {
            current_page: query.page,
            total_pages: total.div_ceil(limit),
            total_items: total,
        },
    })
}

#[cfg(test)]
#[path = "voyages_tests.rs"]
mod voyages_tests;

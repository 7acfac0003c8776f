//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::Utc;

use super::dto::{
    AlertParams, ApiResponse, CompleteMaintenanceRequest, FeedbackRequest, HealthResponse,
    HistoryParams, PlanVoyageRequest, RescheduleRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::ShipRepository;
use crate::models::{
    FuelLog, MaintenanceId, MaintenanceRecord, NewFuelLog, NewMaintenance, NewShip, Ship, ShipId,
};
use crate::services::maintenance::{self as maintenance_service, AlertQuery, MaintenanceOverview};
use crate::services::voyages::{
    self as voyage_service, FeedbackOutcome, HistoryQuery, PlanHistory, PlanVoyageInput,
    PlannedVoyage, DEFAULT_PAGE_SIZE,
};
use crate::services::{fleet, maintenance::DEFAULT_TIMEFRAME_DAYS};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Result type for handlers that create a resource.
pub type CreatedResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), AppError>;

pub const API_GREETING: &str = "Voyage Planner API v1";

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn query<T>(params: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    params
        .map(|Query(value)| value)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

fn ok<T>(message: &str, data: T) -> HandlerResult<T> {
    Ok(Json(ApiResponse::ok(message, data)))
}

fn created<T>(message: &str, data: T) -> CreatedResult<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(message, data))))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Service, repository and optimizer status. 503 when the repository is down.
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, repository) = match state.repository.health_check().await {
        Ok(true) => (StatusCode::OK, "connected".to_string()),
        Ok(false) => (StatusCode::SERVICE_UNAVAILABLE, "disconnected".to_string()),
        Err(e) => (StatusCode::SERVICE_UNAVAILABLE, format!("error: {}", e)),
    };
    let optimizer = state.advisor.health().await;

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
            version: "v1".to_string(),
            repository,
            optimizer,
        }),
    )
}

/// GET /api/v1
pub async fn api_root() -> &'static str {
    API_GREETING
}

// =============================================================================
// Ships
// =============================================================================

/// POST /api/v1/ships
pub async fn create_ship(
    State(state): State<AppState>,
    payload: Result<Json<NewShip>, JsonRejection>,
) -> CreatedResult<Ship> {
    let ship = fleet::register_ship(state.repository.as_ref(), body(payload)?).await?;
    created("Ship registered successfully", ship)
}

/// GET /api/v1/ships/{ship_id}
pub async fn get_ship(
    State(state): State<AppState>,
    Path(ship_id): Path<i64>,
) -> HandlerResult<Ship> {
    let ship = fleet::get_ship(state.repository.as_ref(), ShipId::new(ship_id)).await?;
    ok("Ship retrieved successfully", ship)
}

// =============================================================================
// Voyages
// =============================================================================

/// POST /api/v1/plan-voyage
pub async fn plan_voyage(
    State(state): State<AppState>,
    payload: Result<Json<PlanVoyageRequest>, JsonRejection>,
) -> CreatedResult<PlannedVoyage> {
    let request = body(payload)?;
    let input = match request {
        PlanVoyageRequest {
            origin: Some(origin),
            destination: Some(destination),
            departure_time: Some(departure_time),
            weather_forecast: Some(weather),
            cargo_load: Some(cargo_load),
            ship_id: Some(ship_id),
        } => PlanVoyageInput {
            ship_id,
            origin,
            destination,
            departure_time,
            weather: weather.into(),
            cargo_load,
        },
        _ => return Err(AppError::BadRequest("All fields are required".to_string())),
    };

    let planned =
        voyage_service::plan_voyage(state.repository.as_ref(), &state.advisor, input).await?;
    created("Voyage plan created successfully", planned)
}

/// GET /api/v1/plan-history
pub async fn plan_history(
    State(state): State<AppState>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> HandlerResult<PlanHistory> {
    let params = query(params)?;
    let history = voyage_service::plan_history(
        state.repository.as_ref(),
        HistoryQuery {
            ship_id: params.ship_id,
            page: params.page.unwrap_or(1),
            limit: params.limit.unwrap_or(DEFAULT_PAGE_SIZE),
        },
    )
    .await?;
    ok("History retrieved successfully", history)
}

/// POST /api/v1/feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> HandlerResult<FeedbackOutcome> {
    let request = body(payload)?;
    let voyage_id = request
        .voyage_id
        .ok_or_else(|| AppError::BadRequest("Voyage ID is required".to_string()))?;

    let outcome = voyage_service::submit_feedback(
        state.repository.as_ref(),
        &state.advisor,
        request.into_input(voyage_id),
    )
    .await?;
    ok("Feedback submitted successfully", outcome)
}

// =============================================================================
// Maintenance
// =============================================================================

/// GET /api/v1/maintenance-alerts
pub async fn maintenance_alerts(
    State(state): State<AppState>,
    params: Result<Query<AlertParams>, QueryRejection>,
) -> HandlerResult<MaintenanceOverview> {
    let params = query(params)?;
    let overview = maintenance_service::maintenance_alerts(
        state.repository.as_ref(),
        &state.advisor,
        AlertQuery {
            ship_id: params.ship_id,
            timeframe_days: params.timeframe.unwrap_or(DEFAULT_TIMEFRAME_DAYS),
        },
        Utc::now(),
    )
    .await?;
    ok("Maintenance alerts retrieved successfully", overview)
}

/// POST /api/v1/maintenance
pub async fn schedule_maintenance(
    State(state): State<AppState>,
    payload: Result<Json<NewMaintenance>, JsonRejection>,
) -> CreatedResult<MaintenanceRecord> {
    let record =
        maintenance_service::schedule_maintenance(state.repository.as_ref(), body(payload)?)
            .await?;
    created("Maintenance scheduled successfully", record)
}

/// POST /api/v1/maintenance/{maintenance_id}/complete
pub async fn complete_maintenance(
    State(state): State<AppState>,
    Path(maintenance_id): Path<i64>,
    payload: Result<Json<CompleteMaintenanceRequest>, JsonRejection>,
) -> HandlerResult<MaintenanceRecord> {
    let record = maintenance_service::complete_maintenance(
        state.repository.as_ref(),
        MaintenanceId::new(maintenance_id),
        body(payload)?.into(),
        Utc::now(),
    )
    .await?;
    ok("Maintenance completed successfully", record)
}

/// POST /api/v1/maintenance/{maintenance_id}/reschedule
pub async fn reschedule_maintenance(
    State(state): State<AppState>,
    Path(maintenance_id): Path<i64>,
    payload: Result<Json<RescheduleRequest>, JsonRejection>,
) -> HandlerResult<MaintenanceRecord> {
    let request = body(payload)?;
    let record = maintenance_service::reschedule_maintenance(
        state.repository.as_ref(),
        MaintenanceId::new(maintenance_id),
        request.scheduled_date,
    )
    .await?;
    ok("Maintenance rescheduled successfully", record)
}

// =============================================================================
// Fuel logs
// =============================================================================

/// POST /api/v1/fuel-logs
pub async fn record_fuel_log(
    State(state): State<AppState>,
    payload: Result<Json<NewFuelLog>, JsonRejection>,
) -> CreatedResult<FuelLog> {
    let entry = fleet::record_fuel_log(state.repository.as_ref(), body(payload)?).await?;
    created("Fuel log recorded successfully", entry)
}

//! HTTP request handlers for the roster engine API.
//!
//! This module contains the handler functions for all API endpoints:
//! guard, building, and shift management, assignment recommendation,
//! absence resolution, and payroll aggregation.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Building, BuildingUpdate, EntityStatus, Guard, GuardUpdate, RateSchedule, Shift,
};
use crate::payroll::compute_payment;
use crate::scheduling::{has_sufficient_rest, resolve_absence, select_best_guard};

use super::request::{
    AbsenceRequest, CreateBuildingRequest, CreateGuardRequest, CreateShiftRequest, PayrollRequest,
    RecommendRequest, ShiftListQuery,
};
use super::response::{ApiError, ApiErrorResponse, HealthResponse, SelectedGuard, SelectionResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/guards", post(create_guard_handler).get(list_guards_handler))
        .route("/guards/active", get(list_active_guards_handler))
        .route(
            "/guards/:guard_id",
            get(get_guard_handler)
                .put(update_guard_handler)
                .delete(delete_guard_handler),
        )
        .route(
            "/buildings",
            post(create_building_handler).get(list_buildings_handler),
        )
        .route(
            "/buildings/:building_id",
            get(get_building_handler)
                .put(update_building_handler)
                .delete(delete_building_handler),
        )
        .route("/shifts", post(create_shift_handler).get(list_shifts_handler))
        .route(
            "/shifts/:shift_id",
            get(get_shift_handler).delete(delete_shift_handler),
        )
        .route("/shifts/:shift_id/confirm", post(confirm_shift_handler))
        .route("/assignments/recommend", post(recommend_handler))
        .route("/assignments/absence", post(absence_handler))
        .route("/payroll", post(payroll_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into the common error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The rejection body text is serde's own description of the failure.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // A missing required field is a validation failure, not malformed JSON.
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Maps an engine error onto its HTTP response.
fn error_response(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "roster-engine".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn validate_new_guard(request: &CreateGuardRequest) -> EngineResult<()> {
    if request.email.is_empty() || !request.email.contains('@') {
        return Err(EngineError::ValidationError {
            field: "email".to_string(),
            message: "must be a valid email address".to_string(),
        });
    }
    if request.contract_start > request.contract_end {
        return Err(EngineError::ValidationError {
            field: "contract_end".to_string(),
            message: "contract_end must not be before contract_start".to_string(),
        });
    }
    Ok(())
}

/// Handler for POST /guards.
async fn create_guard_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateGuardRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(error) = validate_new_guard(&request) {
        warn!(correlation_id = %correlation_id, error = %error, "Guard validation failed");
        return error_response(error);
    }

    match state.guards().create(Guard::from(request)) {
        Ok(guard) => {
            info!(
                correlation_id = %correlation_id,
                guard_id = %guard.id,
                "Guard created"
            );
            (StatusCode::CREATED, Json(guard)).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Guard creation failed");
            error_response(error)
        }
    }
}

/// Handler for GET /guards.
async fn list_guards_handler(State(state): State<AppState>) -> Json<Vec<Guard>> {
    Json(state.guards().get_all())
}

/// Handler for GET /guards/active.
async fn list_active_guards_handler(State(state): State<AppState>) -> Json<Vec<Guard>> {
    Json(state.guards().get_active())
}

/// Handler for GET /guards/{id}.
async fn get_guard_handler(
    State(state): State<AppState>,
    Path(guard_id): Path<Uuid>,
) -> Response {
    match state.guards().get(guard_id) {
        Ok(guard) => (StatusCode::OK, Json(guard)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for PUT /guards/{id}.
async fn update_guard_handler(
    State(state): State<AppState>,
    Path(guard_id): Path<Uuid>,
    payload: Result<Json<GuardUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let existing = match state.guards().get(guard_id) {
        Ok(guard) => guard,
        Err(error) => return error_response(error),
    };

    // The contract window must stay coherent after the update.
    let contract_start = update.contract_start.unwrap_or(existing.contract_start);
    let contract_end = update.contract_end.unwrap_or(existing.contract_end);
    if contract_start > contract_end {
        warn!(
            correlation_id = %correlation_id,
            guard_id = %guard_id,
            "Contract window validation failed"
        );
        return error_response(EngineError::ValidationError {
            field: "contract_end".to_string(),
            message: "contract_end must not be before contract_start".to_string(),
        });
    }

    match state.guards().update(guard_id, &update) {
        Ok(guard) => {
            info!(correlation_id = %correlation_id, guard_id = %guard.id, "Guard updated");
            (StatusCode::OK, Json(guard)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Handler for DELETE /guards/{id}.
async fn delete_guard_handler(
    State(state): State<AppState>,
    Path(guard_id): Path<Uuid>,
) -> Response {
    match state.guards().delete(guard_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn validate_building_rates(
    hourly_rate: Option<Decimal>,
    overtime_rate: Option<Decimal>,
    holiday_rate: Option<Decimal>,
) -> EngineResult<()> {
    let rates = [
        ("hourly_rate", hourly_rate),
        ("overtime_rate", overtime_rate),
        ("holiday_rate", holiday_rate),
    ];
    for (field, rate) in rates {
        if let Some(rate) = rate {
            if rate <= Decimal::ZERO {
                return Err(EngineError::ValidationError {
                    field: field.to_string(),
                    message: "must be a positive amount".to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Handler for POST /buildings.
async fn create_building_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBuildingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(error) = validate_building_rates(
        Some(request.hourly_rate),
        request.overtime_rate,
        request.holiday_rate,
    ) {
        warn!(correlation_id = %correlation_id, error = %error, "Building validation failed");
        return error_response(error);
    }

    match state.buildings().create(Building::from(request)) {
        Ok(building) => {
            info!(
                correlation_id = %correlation_id,
                building_id = %building.id,
                "Building created"
            );
            (StatusCode::CREATED, Json(building)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Handler for GET /buildings.
async fn list_buildings_handler(State(state): State<AppState>) -> Json<Vec<Building>> {
    Json(state.buildings().get_all())
}

/// Handler for GET /buildings/{id}.
async fn get_building_handler(
    State(state): State<AppState>,
    Path(building_id): Path<Uuid>,
) -> Response {
    match state.buildings().get(building_id) {
        Ok(building) => (StatusCode::OK, Json(building)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for PUT /buildings/{id}.
async fn update_building_handler(
    State(state): State<AppState>,
    Path(building_id): Path<Uuid>,
    payload: Result<Json<BuildingUpdate>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let update = match payload {
        Ok(Json(update)) => update,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(error) =
        validate_building_rates(update.hourly_rate, update.overtime_rate, update.holiday_rate)
    {
        warn!(correlation_id = %correlation_id, error = %error, "Building validation failed");
        return error_response(error);
    }

    match state.buildings().update(building_id, &update) {
        Ok(building) => {
            info!(
                correlation_id = %correlation_id,
                building_id = %building.id,
                "Building updated"
            );
            (StatusCode::OK, Json(building)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Handler for DELETE /buildings/{id}.
async fn delete_building_handler(
    State(state): State<AppState>,
    Path(building_id): Path<Uuid>,
) -> Response {
    match state.buildings().delete(building_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for POST /shifts.
///
/// Validates the assignment before committing it: the guard and building
/// must exist, the span must be positive, the guard must be available and
/// the building active, and the guard's rest window must be respected.
async fn create_shift_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift creation");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let guard = match state.guards().get(request.guard_id) {
        Ok(guard) => guard,
        Err(error) => return error_response(error),
    };
    let building = match state.buildings().get(request.building_id) {
        Ok(building) => building,
        Err(error) => return error_response(error),
    };

    if request.end_datetime <= request.start_datetime {
        warn!(correlation_id = %correlation_id, "Shift span validation failed");
        return error_response(EngineError::InvalidShift {
            shift_id: Uuid::nil(),
            message: "end_datetime must be after start_datetime".to_string(),
        });
    }

    if !guard.is_available_for_shift(request.start_datetime) {
        warn!(
            correlation_id = %correlation_id,
            guard_id = %guard.id,
            "Guard availability check failed"
        );
        return error_response(EngineError::IneligibleGuard {
            guard_id: guard.id,
            message: "not active or shift start outside the contract window".to_string(),
        });
    }

    if building.status != EntityStatus::Active {
        warn!(
            correlation_id = %correlation_id,
            building_id = %building.id,
            "Building status check failed"
        );
        return error_response(EngineError::ValidationError {
            field: "building_id".to_string(),
            message: "building is not active".to_string(),
        });
    }

    let minimum_rest_hours = state.config().scheduling.minimum_rest_hours;
    let existing_shifts = state.shifts().get_by_guard(guard.id);
    if !has_sufficient_rest(
        guard.id,
        request.start_datetime,
        &existing_shifts,
        minimum_rest_hours,
    ) {
        warn!(
            correlation_id = %correlation_id,
            guard_id = %guard.id,
            "Rest-time validation failed"
        );
        return error_response(EngineError::InsufficientRest {
            guard_id: guard.id,
            minimum_hours: minimum_rest_hours,
        });
    }

    match state.shifts().create(Shift::from(request)) {
        Ok(shift) => {
            info!(
                correlation_id = %correlation_id,
                shift_id = %shift.id,
                guard_id = %shift.guard_id,
                building_id = %shift.building_id,
                "Shift created"
            );
            (StatusCode::CREATED, Json(shift)).into_response()
        }
        Err(error) => error_response(error),
    }
}

/// Handler for GET /shifts.
async fn list_shifts_handler(
    State(state): State<AppState>,
    Query(query): Query<ShiftListQuery>,
) -> Json<Vec<Shift>> {
    let shifts = match (query.guard_id, query.building_id) {
        (Some(guard_id), Some(building_id)) => state
            .shifts()
            .get_by_guard(guard_id)
            .into_iter()
            .filter(|shift| shift.building_id == building_id)
            .collect(),
        (Some(guard_id), None) => state.shifts().get_by_guard(guard_id),
        (None, Some(building_id)) => state.shifts().get_by_building(building_id),
        (None, None) => state.shifts().get_all(),
    };
    Json(shifts)
}

/// Handler for GET /shifts/{id}.
async fn get_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
) -> Response {
    match state.shifts().get(shift_id) {
        Ok(shift) => (StatusCode::OK, Json(shift)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for DELETE /shifts/{id}.
async fn delete_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
) -> Response {
    match state.shifts().delete(shift_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for POST /shifts/{id}/confirm.
async fn confirm_shift_handler(
    State(state): State<AppState>,
    Path(shift_id): Path<Uuid>,
) -> Response {
    match state.shifts().update_confirmation(shift_id, true) {
        Ok(shift) => (StatusCode::OK, Json(shift)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Handler for POST /assignments/recommend.
///
/// Runs the assignment scorer over the active guard pool and returns the
/// winner, or `"selected": null` when nobody is eligible.
async fn recommend_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assignment recommendation");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let building = match state.buildings().get(request.building_id) {
        Ok(building) => building,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                building_id = %request.building_id,
                "Building not found"
            );
            return error_response(error);
        }
    };

    // The explicit reference time keeps the scorer deterministic; the
    // wall clock is consulted only here.
    let reference_time = request
        .reference_time
        .unwrap_or_else(|| Utc::now().naive_utc());
    let candidates = state.guards().get_active();
    let history = state.shifts().get_all();

    let start_time = Instant::now();
    let selected = select_best_guard(
        &candidates,
        &building,
        request.shift_start,
        &history,
        reference_time,
        &state.config().scheduling,
    )
    .map(SelectedGuard::from);

    info!(
        correlation_id = %correlation_id,
        building_id = %building.id,
        candidates_count = candidates.len(),
        selected = selected.is_some(),
        duration_us = start_time.elapsed().as_micros(),
        "Recommendation completed"
    );
    (StatusCode::OK, Json(SelectionResponse { selected })).into_response()
}

/// Handler for POST /assignments/absence.
///
/// Selects a replacement for the shift's assigned guard; with
/// `"reassign": true` the winning guard is committed onto the shift.
async fn absence_handler(
    State(state): State<AppState>,
    payload: Result<Json<AbsenceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing absence resolution");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shift = match state.shifts().get(request.shift_id) {
        Ok(shift) => shift,
        Err(error) => {
            warn!(
                correlation_id = %correlation_id,
                shift_id = %request.shift_id,
                "Shift not found"
            );
            return error_response(error);
        }
    };
    let building = match state.buildings().get(shift.building_id) {
        Ok(building) => building,
        Err(error) => return error_response(error),
    };

    let reference_time = request
        .reference_time
        .unwrap_or_else(|| Utc::now().naive_utc());
    let candidate_pool = state.guards().get_active();
    let history = state.shifts().get_all();

    let selected = resolve_absence(
        shift.guard_id,
        &shift,
        &candidate_pool,
        &building,
        &history,
        reference_time,
        &state.config().scheduling,
    )
    .map(SelectedGuard::from);

    if request.reassign {
        if let Some(replacement) = &selected {
            if let Err(error) = state.shifts().reassign(shift.id, replacement.guard_id) {
                return error_response(error);
            }
            info!(
                correlation_id = %correlation_id,
                shift_id = %shift.id,
                absent_guard_id = %shift.guard_id,
                replacement_guard_id = %replacement.guard_id,
                "Shift reassigned to replacement"
            );
        }
    }

    info!(
        correlation_id = %correlation_id,
        shift_id = %shift.id,
        selected = selected.is_some(),
        "Absence resolution completed"
    );
    (StatusCode::OK, Json(SelectionResponse { selected })).into_response()
}

/// Handler for POST /payroll.
///
/// Aggregates a guard's shifts over the pay period into a payroll
/// summary.
async fn payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if request.period_start > request.period_end {
        warn!(correlation_id = %correlation_id, "Pay period validation failed");
        return error_response(EngineError::ValidationError {
            field: "period_end".to_string(),
            message: "period_end must not be before period_start".to_string(),
        });
    }

    let guard = match state.guards().get(request.guard_id) {
        Ok(guard) => guard,
        Err(error) => return error_response(error),
    };

    let shifts = state
        .shifts()
        .get_in_range(guard.id, request.period_start, request.period_end);
    let rate_table: HashMap<Uuid, RateSchedule> = state
        .buildings()
        .get_all()
        .into_iter()
        .map(|building| (building.id, building.rate_schedule()))
        .collect();

    let start_time = Instant::now();
    match compute_payment(&guard, &shifts, &rate_table, state.config()) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                guard_id = %guard.id,
                shifts_count = shifts.len(),
                total_payment = %summary.total_payment,
                defaulted_count = summary.defaulted_rate_shifts.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payroll computed"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "Payroll failed");
            error_response(error)
        }
    }
}

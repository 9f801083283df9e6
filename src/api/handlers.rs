//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::PayrollError;
use crate::models::{Employee, Timesheet};
use crate::payrun::ensure_period_unlocked;

use super::request::{
    CreateEmployeeRequest, CreateTimesheetRequest, GeneratePayrunRequest, UpdateTimesheetRequest,
};
use super::response::{ApiError, ApiErrorResponse, GeneratePayrunResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(create_employee).get(list_employees))
        .route("/timesheets", post(create_timesheet).get(list_timesheets))
        .route(
            "/timesheets/:id",
            put(update_timesheet).delete(delete_timesheet),
        )
        .route("/payruns", post(generate_payrun).get(list_payruns))
        .route("/payruns/:id", get(get_payrun))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error response.
fn bad_json(rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployeeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(bad_json)?;
    let employee: Employee = request.into();
    state.store().insert_employee(employee.clone()).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees.
async fn list_employees(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let employees = state.store().list_employees().await?;
    Ok(Json(employees))
}

/// Handler for POST /timesheets.
///
/// A timesheet is rejected before any persistence when its employee does
/// not exist, an entry falls outside the period, the employee already has
/// a timesheet for the exact period, or the period touches an
/// already-processed payrun.
async fn create_timesheet(
    State(state): State<AppState>,
    payload: Result<Json<CreateTimesheetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(bad_json)?;
    let correlation_id = Uuid::new_v4();
    let period = request.period();

    if period.start_date > period.end_date {
        return Err(PayrollError::InvalidInput {
            field: "period".to_string(),
            message: format!(
                "start date {} is after end date {}",
                period.start_date, period.end_date
            ),
        }
        .into());
    }

    let store = state.store();
    let employee = store.get_employee(&request.employee_id).await?;

    let committed = store.list_payrun_periods().await?;
    ensure_period_unlocked(&period, &committed)?;

    if store.find_timesheet(&employee.id, &period).await?.is_some() {
        return Err(PayrollError::DuplicateTimesheet {
            employee_id: employee.id,
        }
        .into());
    }

    let timesheet = Timesheet::new(
        employee.id,
        period,
        request.entries.into_iter().map(Into::into).collect(),
        request.allowances,
    )?;
    store.insert_timesheet(timesheet.clone()).await?;

    info!(
        correlation_id = %correlation_id,
        timesheet_id = %timesheet.id,
        employee_id = %timesheet.employee_id,
        "timesheet created"
    );
    Ok((StatusCode::CREATED, Json(timesheet)))
}

/// Handler for GET /timesheets.
async fn list_timesheets(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let timesheets = state.store().list_timesheets().await?;
    Ok(Json(timesheets))
}

/// Handler for PUT /timesheets/{id}.
///
/// A processed timesheet is immutable; edits are also rejected when the
/// new period touches an already-processed payrun.
async fn update_timesheet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateTimesheetRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(bad_json)?;
    let period = request.period();

    if period.start_date > period.end_date {
        return Err(PayrollError::InvalidInput {
            field: "period".to_string(),
            message: format!(
                "start date {} is after end date {}",
                period.start_date, period.end_date
            ),
        }
        .into());
    }

    let store = state.store();
    let existing = store.get_timesheet(id).await?;
    if existing.is_processed() {
        return Err(PayrollError::PeriodLocked {
            start: existing.period.start_date,
            end: existing.period.end_date,
        }
        .into());
    }

    let committed = store.list_payrun_periods().await?;
    ensure_period_unlocked(&period, &committed)?;

    let mut updated = Timesheet::new(
        existing.employee_id,
        period,
        request.entries.into_iter().map(Into::into).collect(),
        request.allowances,
    )?;
    updated.id = existing.id;
    store.update_timesheet(updated.clone()).await?;

    Ok(Json(updated))
}

/// Handler for DELETE /timesheets/{id}.
async fn delete_timesheet(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let store = state.store();
    let existing = store.get_timesheet(id).await?;

    let committed = store.list_payrun_periods().await?;
    ensure_period_unlocked(&existing.period, &committed)?;

    store.delete_timesheet(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /payruns.
///
/// Returns 200 with the full payrun once the commit succeeds; transfer
/// failures after the commit surface only in the per-payslip payment
/// status and the disbursement outcomes.
async fn generate_payrun(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePayrunRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Json(request) = payload.map_err(bad_json)?;
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        period_start = %request.period_start,
        period_end = %request.period_end,
        "processing payrun generation request"
    );

    let generated = state.orchestrator().generate(request.period()).await?;

    info!(
        correlation_id = %correlation_id,
        payrun_id = %generated.payrun.id,
        label = %generated.label,
        "payrun generation completed"
    );
    Ok(Json(GeneratePayrunResponse {
        message: "Payrun generated successfully.".to_string(),
        label: generated.label,
        payrun: generated.payrun,
        disbursements: generated.disbursements,
    }))
}

/// Handler for GET /payruns.
async fn list_payruns(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let payruns = state.store().list_payruns().await?;
    Ok(Json(payruns))
}

/// Handler for GET /payruns/{id}.
async fn get_payrun(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let payrun = state.store().get_payrun(id).await?;
    Ok(Json(payrun))
}

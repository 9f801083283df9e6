//! Response types for the payroll engine API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PayrollError;
use crate::models::Payrun;
use crate::payrun::DisbursementOutcome;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, code: &str, error: &PayrollError) -> Self {
        Self {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        use PayrollError::*;
        match &error {
            InvalidEntry { .. } => Self::new(StatusCode::BAD_REQUEST, "INVALID_ENTRY", &error),
            InvalidInput { .. } => Self::new(StatusCode::BAD_REQUEST, "INVALID_INPUT", &error),
            PeriodOverlap { .. } => Self::new(StatusCode::CONFLICT, "PERIOD_OVERLAP", &error),
            PeriodLocked { .. } => Self::new(StatusCode::CONFLICT, "PERIOD_LOCKED", &error),
            DuplicateTimesheet { .. } => {
                Self::new(StatusCode::CONFLICT, "DUPLICATE_TIMESHEET", &error)
            }
            NoEligibleTimesheets { .. } => {
                Self::new(StatusCode::NOT_FOUND, "NO_ELIGIBLE_TIMESHEETS", &error)
            }
            NoPayableHours => Self::new(StatusCode::NOT_FOUND, "NO_PAYABLE_HOURS", &error),
            EmployeeNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND", &error)
            }
            TimesheetNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "TIMESHEET_NOT_FOUND", &error)
            }
            PayrunNotFound { .. } => Self::new(StatusCode::NOT_FOUND, "PAYRUN_NOT_FOUND", &error),
            PayslipNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "PAYSLIP_NOT_FOUND", &error)
            }
            TransferFailed { .. } => Self::new(StatusCode::BAD_GATEWAY, "TRANSFER_FAILED", &error),
            ConfigNotFound { .. } | ConfigParseError { .. } | InvalidTaxSchedule { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", &error)
            }
        }
    }
}

/// Response body of `POST /payruns`.
///
/// Returned with status 200 once the payrun commit succeeds, whatever the
/// individual disbursement outcomes were.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayrunResponse {
    /// Human-readable confirmation message.
    pub message: String,
    /// The batch label derived from the period boundaries.
    pub label: String,
    /// The committed payrun with its payslips.
    pub payrun: Payrun,
    /// One outcome per payslip, in creation order.
    pub disbursements: Vec<DisbursementOutcome>,
}

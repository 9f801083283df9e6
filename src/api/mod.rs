//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for managing employees and
//! timesheets and for generating, listing, and fetching payruns.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CreateEmployeeRequest, CreateTimesheetRequest, GeneratePayrunRequest, TimesheetEntryRequest,
    UpdateTimesheetRequest,
};
pub use response::{ApiError, GeneratePayrunResponse};
pub use state::AppState;

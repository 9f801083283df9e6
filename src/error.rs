//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.
//!
//! The variants fall into distinct handling groups: validation, conflict
//! and not-found errors are rejected before any persistence; external
//! service errors occur after the payrun commit and are absorbed per item.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::EmployeeNotFound {
///     id: "e-alice".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: e-alice");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A timesheet entry was malformed (bad time range or break deduction).
    #[error("Invalid timesheet entry on {date}: {message}")]
    InvalidEntry {
        /// The date of the offending entry.
        date: NaiveDate,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A calculation input was out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },

    /// The candidate period overlaps an already-committed payrun.
    #[error("A payrun already exists for or overlaps the period {start} - {end}")]
    PeriodOverlap {
        /// The start date of the rejected period.
        start: NaiveDate,
        /// The end date of the rejected period.
        end: NaiveDate,
    },

    /// A timesheet touches a period a payrun has already processed.
    #[error("A payrun has already been processed for the period {start} - {end}")]
    PeriodLocked {
        /// The start date of the locked period.
        start: NaiveDate,
        /// The end date of the locked period.
        end: NaiveDate,
    },

    /// A timesheet already exists for this employee and period.
    #[error("A timesheet already exists for employee '{employee_id}' and this period")]
    DuplicateTimesheet {
        /// The employee the duplicate timesheet belongs to.
        employee_id: String,
    },

    /// No unprocessed timesheets were found within the requested period.
    #[error("No unprocessed timesheets found for the period {start} - {end}")]
    NoEligibleTimesheets {
        /// The start date of the requested period.
        start: NaiveDate,
        /// The end date of the requested period.
        end: NaiveDate,
    },

    /// Eligible timesheets produced no payslip drafts.
    #[error("No payable hours found in this range")]
    NoPayableHours,

    /// The referenced employee does not exist.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// The referenced timesheet does not exist.
    #[error("Timesheet not found: {id}")]
    TimesheetNotFound {
        /// The timesheet id that was not found.
        id: Uuid,
    },

    /// The referenced payrun does not exist.
    #[error("Payrun not found: {id}")]
    PayrunNotFound {
        /// The payrun id that was not found.
        id: Uuid,
    },

    /// The referenced payslip does not exist.
    #[error("Payslip not found: {id}")]
    PayslipNotFound {
        /// The payslip id that was not found.
        id: Uuid,
    },

    /// A payment transfer failed downstream.
    ///
    /// Raised by the disbursement gateway; the orchestrator treats it as
    /// retryable-later and never lets it fail the batch.
    #[error("Transfer failed for employee '{employee_id}': {message}")]
    TransferFailed {
        /// The employee whose transfer failed.
        employee_id: String,
        /// A description of the downstream failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A tax schedule failed validation.
    #[error("Invalid tax schedule: {message}")]
    InvalidTaxSchedule {
        /// A description of the schedule defect.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_overlap_displays_period() {
        let error = PayrollError::PeriodOverlap {
            start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "A payrun already exists for or overlaps the period 2025-06-02 - 2025-06-08"
        );
    }

    #[test]
    fn test_invalid_entry_displays_date_and_message() {
        let error = PayrollError::InvalidEntry {
            date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            message: "end time precedes start time".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timesheet entry on 2025-06-03: end time precedes start time"
        );
    }

    #[test]
    fn test_period_locked_displays_period() {
        let error = PayrollError::PeriodLocked {
            start: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "A payrun has already been processed for the period 2025-06-02 - 2025-06-08"
        );
    }

    #[test]
    fn test_transfer_failed_displays_employee_and_message() {
        let error = PayrollError::TransferFailed {
            employee_id: "e-bob".to_string(),
            message: "destination account rejected".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transfer failed for employee 'e-bob': destination account rejected"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/tax/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/tax/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_payable_hours() -> PayrollResult<()> {
            Err(PayrollError::NoPayableHours)
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_no_payable_hours()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}

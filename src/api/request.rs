//! Request types for the payroll engine API.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, PayPeriod, TimesheetEntry};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The base pay rate in currency per hour.
    pub base_hourly_rate: Decimal,
    /// The superannuation rate as a fraction of gross.
    pub super_rate: Decimal,
    /// The BSB of the employee's bank account.
    pub bank_bsb: String,
    /// The employee's bank account number.
    pub bank_account: String,
    /// Optional external payment destination reference.
    #[serde(default)]
    pub payment_account_id: Option<String>,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Employee {
            id: request.id,
            first_name: request.first_name,
            last_name: request.last_name,
            base_hourly_rate: request.base_hourly_rate,
            super_rate: request.super_rate,
            bank_bsb: request.bank_bsb,
            bank_account: request.bank_account,
            payment_account_id: request.payment_account_id,
        }
    }
}

/// One shift in a timesheet request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetEntryRequest {
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start: NaiveTime,
    /// The end time of the shift.
    pub end: NaiveTime,
    /// Unpaid break time in minutes.
    #[serde(default)]
    pub unpaid_break_mins: u32,
}

impl From<TimesheetEntryRequest> for TimesheetEntry {
    fn from(request: TimesheetEntryRequest) -> Self {
        TimesheetEntry {
            date: request.date,
            start: request.start,
            end: request.end,
            unpaid_break_mins: request.unpaid_break_mins,
        }
    }
}

/// Request body for `POST /timesheets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTimesheetRequest {
    /// The employee the timesheet belongs to.
    pub employee_id: String,
    /// The start date of the reporting period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the reporting period (inclusive).
    pub period_end: NaiveDate,
    /// Flat currency addition paid on top of hourly earnings.
    #[serde(default)]
    pub allowances: Decimal,
    /// The reported shifts.
    pub entries: Vec<TimesheetEntryRequest>,
}

impl CreateTimesheetRequest {
    /// Returns the reporting period of the request.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start_date: self.period_start,
            end_date: self.period_end,
        }
    }
}

/// Request body for `PUT /timesheets/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTimesheetRequest {
    /// The new start date of the reporting period (inclusive).
    pub period_start: NaiveDate,
    /// The new end date of the reporting period (inclusive).
    pub period_end: NaiveDate,
    /// Flat currency addition paid on top of hourly earnings.
    #[serde(default)]
    pub allowances: Decimal,
    /// The replacement set of reported shifts.
    pub entries: Vec<TimesheetEntryRequest>,
}

impl UpdateTimesheetRequest {
    /// Returns the reporting period of the request.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start_date: self.period_start,
            end_date: self.period_end,
        }
    }
}

/// Request body for `POST /payruns`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePayrunRequest {
    /// The start date of the payrun period (inclusive).
    pub period_start: NaiveDate,
    /// The end date of the payrun period (inclusive).
    pub period_end: NaiveDate,
}

impl GeneratePayrunRequest {
    /// Returns the requested payrun period.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start_date: self.period_start,
            end_date: self.period_end,
        }
    }
}

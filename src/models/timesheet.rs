//! Timesheet model and related types.
//!
//! This module defines the [`Timesheet`] and [`TimesheetEntry`] structs for
//! representing one employee's reported hours over a pay period. A timesheet
//! transitions `Unprocessed -> Processed` exactly once, when a payrun
//! consumes it; after that it is immutable and carries a back-reference to
//! the consuming payrun.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

use super::PayPeriod;

/// Processing status of a timesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimesheetStatus {
    /// The timesheet has not yet been consumed by a payrun.
    Unprocessed,
    /// The timesheet has been consumed by exactly one payrun.
    Processed,
}

/// Represents one reported shift within a timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    /// The date of the shift.
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start: NaiveTime,
    /// The end time of the shift.
    pub end: NaiveTime,
    /// Unpaid break time in minutes, deducted from the worked duration.
    #[serde(default)]
    pub unpaid_break_mins: u32,
}

impl TimesheetEntry {
    /// Calculates the worked minutes for this entry.
    ///
    /// Worked minutes are the span between start and end (as minutes of the
    /// day) minus the unpaid break. Fails with `InvalidEntry` if the end
    /// time precedes the start time, or if the break deduction drives the
    /// result negative. Bad input must surface here rather than be clamped
    /// to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::TimesheetEntry;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let entry = TimesheetEntry {
    ///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    ///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
    ///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    ///     unpaid_break_mins: 30,
    /// };
    /// assert_eq!(entry.worked_minutes().unwrap(), 450);
    /// ```
    pub fn worked_minutes(&self) -> PayrollResult<i64> {
        let start_minutes = i64::from(self.start.hour() * 60 + self.start.minute());
        let end_minutes = i64::from(self.end.hour() * 60 + self.end.minute());

        if end_minutes < start_minutes {
            return Err(PayrollError::InvalidEntry {
                date: self.date,
                message: "end time precedes start time".to_string(),
            });
        }

        let worked = end_minutes - start_minutes - i64::from(self.unpaid_break_mins);
        if worked < 0 {
            return Err(PayrollError::InvalidEntry {
                date: self.date,
                message: format!(
                    "unpaid break of {} minutes exceeds the worked duration",
                    self.unpaid_break_mins
                ),
            });
        }

        Ok(worked)
    }
}

/// Represents one employee's reported hours for one pay period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timesheet {
    /// Unique identifier for the timesheet.
    pub id: Uuid,
    /// The employee this timesheet belongs to.
    pub employee_id: String,
    /// The reporting period of the timesheet (inclusive boundaries).
    pub period: PayPeriod,
    /// The reported shifts, in submission order.
    pub entries: Vec<TimesheetEntry>,
    /// Flat currency addition paid on top of hourly earnings.
    pub allowances: Decimal,
    /// The processing status of the timesheet.
    pub status: TimesheetStatus,
    /// Back-reference to the consuming payrun, set when processed.
    #[serde(default)]
    pub payrun_id: Option<Uuid>,
}

impl Timesheet {
    /// Creates a new unprocessed timesheet after validating its entries.
    ///
    /// Every entry date must fall within the timesheet period; an entry
    /// outside the period fails with `InvalidEntry`.
    pub fn new(
        employee_id: String,
        period: PayPeriod,
        entries: Vec<TimesheetEntry>,
        allowances: Decimal,
    ) -> PayrollResult<Self> {
        for entry in &entries {
            if !period.contains_date(entry.date) {
                return Err(PayrollError::InvalidEntry {
                    date: entry.date,
                    message: format!(
                        "entry date falls outside the period {} - {}",
                        period.start_date, period.end_date
                    ),
                });
            }
        }

        Ok(Self {
            id: Uuid::new_v4(),
            employee_id,
            period,
            entries,
            allowances,
            status: TimesheetStatus::Unprocessed,
            payrun_id: None,
        })
    }

    /// Returns true if this timesheet has been consumed by a payrun.
    pub fn is_processed(&self) -> bool {
        self.status == TimesheetStatus::Processed
    }

    /// Marks the timesheet as consumed by the given payrun.
    ///
    /// The transition happens exactly once; the store enforces that a
    /// processed timesheet is never handed back to an orchestrator.
    pub fn mark_processed(&mut self, payrun_id: Uuid) {
        self.status = TimesheetStatus::Processed;
        self.payrun_id = Some(payrun_id);
    }
}

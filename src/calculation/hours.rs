//! Billable hours calculation.
//!
//! This module converts a timesheet's raw time entries into normal and
//! overtime hour totals for one pay period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::TimesheetEntry;

/// The weekly-standard hours threshold above which time is paid as overtime.
///
/// Applied per timesheet regardless of period length; it does not pro-rate
/// for longer or shorter periods.
pub const WEEKLY_STANDARD_HOURS: Decimal = Decimal::from_parts(38, 0, 0, false, 0);

/// The split of a timesheet's worked time into normal and overtime hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Hours up to the weekly-standard threshold.
    pub normal_hours: Decimal,
    /// Hours exceeding the weekly-standard threshold.
    pub overtime_hours: Decimal,
}

/// Calculates billable hours from a timesheet's entries.
///
/// Each entry contributes its worked minutes (span minus unpaid break);
/// the total is converted to hours and split at the
/// [`WEEKLY_STANDARD_HOURS`] threshold.
///
/// # Errors
///
/// Fails with `InvalidEntry` when an entry's end time precedes its start
/// time or the break deduction drives its worked minutes negative. Bad
/// entries surface as errors rather than being clamped to zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_hours;
/// use payroll_engine::models::TimesheetEntry;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let entry = TimesheetEntry {
///     date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     unpaid_break_mins: 30,
/// };
/// let hours = calculate_hours(&[entry]).unwrap();
/// assert_eq!(hours.normal_hours, Decimal::new(75, 1)); // 7.5
/// assert_eq!(hours.overtime_hours, Decimal::ZERO);
/// ```
pub fn calculate_hours(entries: &[TimesheetEntry]) -> PayrollResult<HoursBreakdown> {
    let mut total_minutes: i64 = 0;
    for entry in entries {
        total_minutes += entry.worked_minutes()?;
    }

    let total_hours = Decimal::from(total_minutes) / Decimal::from(60);

    let (normal_hours, overtime_hours) = if total_hours > WEEKLY_STANDARD_HOURS {
        (WEEKLY_STANDARD_HOURS, total_hours - WEEKLY_STANDARD_HOURS)
    } else {
        (total_hours, Decimal::ZERO)
    };

    Ok(HoursBreakdown {
        normal_hours,
        overtime_hours,
    })
}

//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type that defines the date window
//! for timesheets and payruns, and the closed-interval overlap test that the
//! payrun invariants are built on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a pay period with an inclusive date range.
///
/// A pay period defines the time window a timesheet reports against and a
/// payrun settles. Both boundary dates are inclusive, and the overlap test
/// treats shared boundary dates as a collision.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()));
/// assert_eq!(period.label(), "PR-2025-06-02-2025-06-08");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if another period falls entirely within this one.
    ///
    /// Used when selecting timesheets for a payrun: a timesheet is eligible
    /// only when its whole reporting window sits inside the requested period.
    pub fn contains_period(&self, other: &PayPeriod) -> bool {
        other.start_date >= self.start_date && other.end_date <= self.end_date
    }

    /// Checks if two periods intersect.
    ///
    /// Closed-interval test: periods that merely share a boundary date are
    /// considered overlapping.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let june = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
    /// };
    /// let next = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2025, 6, 8).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
    /// };
    /// assert!(june.overlaps(&next)); // shared boundary day counts
    /// ```
    pub fn overlaps(&self, other: &PayPeriod) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    /// Returns the human-readable batch label for this period.
    ///
    /// The label is derived from the period boundaries, e.g.
    /// `PR-2025-06-02-2025-06-08`.
    pub fn label(&self) -> String {
        format!("PR-{}-{}", self.start_date, self.end_date)
    }
}

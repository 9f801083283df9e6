//! Payrun model.
//!
//! This module defines the [`Payrun`] aggregate: one committed payroll batch
//! covering a non-overlapping period, exclusively owning its payslips and
//! weakly referencing the timesheets it consumed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayPeriod, Payslip};

/// Aggregate money totals for a payrun.
///
/// Totals are summed over payslips in their creation order so that the
/// aggregate is reproducible for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrunTotals {
    /// Sum of payslip gross amounts.
    pub gross: Decimal,
    /// Sum of payslip tax withheld.
    pub tax: Decimal,
    /// Sum of payslip superannuation contributions.
    pub super_contribution: Decimal,
    /// Sum of payslip net amounts.
    pub net: Decimal,
}

impl PayrunTotals {
    /// Sums totals over payslips in the given (stable) order.
    pub fn from_payslips(payslips: &[Payslip]) -> Self {
        let mut totals = Self {
            gross: Decimal::ZERO,
            tax: Decimal::ZERO,
            super_contribution: Decimal::ZERO,
            net: Decimal::ZERO,
        };
        for slip in payslips {
            totals.gross += slip.gross;
            totals.tax += slip.tax;
            totals.super_contribution += slip.super_contribution;
            totals.net += slip.net;
        }
        totals
    }
}

/// One committed payroll batch for a non-overlapping period.
///
/// Invariant: for any two committed payruns, their periods never intersect
/// (closed-interval test, boundary dates included). A payrun is created once
/// by the orchestrator and never mutated afterwards except to attach
/// per-payslip disbursement results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payrun {
    /// Unique identifier for the payrun.
    pub id: Uuid,
    /// The period this payrun settles (inclusive boundaries).
    pub period: PayPeriod,
    /// Aggregate money totals across all payslips.
    pub totals: PayrunTotals,
    /// The timesheets consumed by this payrun (weak back-reference, for
    /// audit and display).
    pub timesheet_ids: Vec<Uuid>,
    /// The payslips owned by this payrun, in creation order.
    pub payslips: Vec<Payslip>,
    /// When the payrun was committed.
    pub created_at: DateTime<Utc>,
}

impl Payrun {
    /// Returns the human-readable batch label for this payrun.
    pub fn label(&self) -> String {
        self.period.label()
    }
}

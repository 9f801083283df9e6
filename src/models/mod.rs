//! Domain models for the payroll engine.
//!
//! This module contains the core data types: employees, pay periods,
//! timesheets with their entries, payruns, and payslips.

mod employee;
mod pay_period;
mod payrun;
mod payslip;
mod timesheet;

pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payrun::{Payrun, PayrunTotals};
pub use payslip::{PaymentStatus, Payslip};
pub use timesheet::{Timesheet, TimesheetEntry, TimesheetStatus};

//! Employee model.
//!
//! This module defines the Employee struct used as calculation input and as
//! the payment-destination reference for disbursement. Employee records are
//! owned by the employee-management surface and are immutable during a
//! payrun.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee subject to payroll processing.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "e-alice".to_string(),
///     first_name: "Alice".to_string(),
///     last_name: "Chen".to_string(),
///     base_hourly_rate: Decimal::new(3500, 2),
///     super_rate: Decimal::new(115, 3),
///     bank_bsb: "083-123".to_string(),
///     bank_account: "12345678".to_string(),
///     payment_account_id: None,
/// };
/// assert!(!employee.has_payment_destination());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The base pay rate in currency per hour.
    pub base_hourly_rate: Decimal,
    /// The superannuation contribution rate as a fraction of gross.
    pub super_rate: Decimal,
    /// The BSB of the employee's bank account.
    pub bank_bsb: String,
    /// The employee's bank account number.
    pub bank_account: String,
    /// Reference to the external payment destination, if one is configured.
    ///
    /// Employees without a destination are skipped during disbursement and
    /// their payslips stay pending.
    #[serde(default)]
    pub payment_account_id: Option<String>,
}

impl Employee {
    /// Returns true if a payment destination is configured for disbursement.
    pub fn has_payment_destination(&self) -> bool {
        self.payment_account_id.is_some()
    }

    /// Returns the employee's full name for transfer descriptions.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

//! Superannuation contribution calculation.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

use super::rounding::round_to_cents;

/// Calculates the employer superannuation contribution for a period.
///
/// `super = gross x rate`, rounded to 2 decimal places half-up at the
/// cent. The rate is a per-employee input, a fraction of gross. Super is
/// paid on top of gross and never deducted from net pay.
///
/// # Errors
///
/// Fails with `InvalidInput` if `gross` or `rate` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_super;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = calculate_super(
///     Decimal::from(2328),
///     Decimal::from_str("0.115").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(amount, Decimal::from_str("267.72").unwrap());
/// ```
pub fn calculate_super(gross: Decimal, rate: Decimal) -> PayrollResult<Decimal> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "gross".to_string(),
            message: format!("must not be negative, got {gross}"),
        });
    }
    if rate < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "super_rate".to_string(),
            message: format!("must not be negative, got {rate}"),
        });
    }

    Ok(round_to_cents(gross * rate))
}

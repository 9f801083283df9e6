//! Net pay calculation.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

use super::rounding::round_to_cents;

/// Calculates net pay from gross and tax withheld.
///
/// `net = gross - tax`, rounded to 2 decimal places half-up at the cent.
/// Superannuation is an employer contribution on top of gross and is not
/// part of this deduction.
///
/// # Errors
///
/// Fails with `InvalidInput` if `gross` is negative.
pub fn calculate_net(gross: Decimal, tax: Decimal) -> PayrollResult<Decimal> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "gross".to_string(),
            message: format!("must not be negative, got {gross}"),
        });
    }

    Ok(round_to_cents(gross - tax))
}

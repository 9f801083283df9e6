//! Progressive tax withholding.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::error::{PayrollError, PayrollResult};

use super::rounding::round_to_cents;

/// Calculates the tax withheld from a period's gross pay.
///
/// The schedule's marginal rates are applied directly to the gross: the
/// highest bracket whose threshold the gross exceeds contributes its base
/// tax plus the excess at the marginal rate. Gross at or below the lowest
/// threshold is untaxed. The result is rounded to 2 decimal places,
/// half-up at the cent.
///
/// # Errors
///
/// Fails with `InvalidInput` if `gross` is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::tax_withheld;
/// use payroll_engine::config::TaxSchedule;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let schedule = TaxSchedule::builtin();
/// let tax = tax_withheld(Decimal::from(1325), &schedule).unwrap();
/// // 53 + (1325 - 900) x 0.19 = 133.75
/// assert_eq!(tax, Decimal::from_str("133.75").unwrap());
/// ```
pub fn tax_withheld(gross: Decimal, schedule: &TaxSchedule) -> PayrollResult<Decimal> {
    if gross < Decimal::ZERO {
        return Err(PayrollError::InvalidInput {
            field: "gross".to_string(),
            message: format!("must not be negative, got {gross}"),
        });
    }

    let tax = schedule
        .brackets
        .iter()
        .rev()
        .find(|bracket| gross > bracket.over)
        .map(|bracket| bracket.base_tax + (gross - bracket.over) * bracket.marginal_rate)
        .unwrap_or(Decimal::ZERO);

    Ok(round_to_cents(tax))
}

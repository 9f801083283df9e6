//! Gross pay calculation.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// The multiplier applied to the base rate for overtime hours.
///
/// Overtime is paid at exactly 1.5x the base rate; there are no higher
/// tiers.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Calculates gross pay from billable hours, the base rate, and allowances.
///
/// `gross = normal_hours x base_rate + overtime_hours x base_rate x 1.5 + allowances`
///
/// # Errors
///
/// Fails with `InvalidInput` if any input is negative.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_gross;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let gross = calculate_gross(
///     Decimal::from(38),
///     Decimal::from(7),
///     Decimal::from(48),
///     Decimal::ZERO,
/// )
/// .unwrap();
/// assert_eq!(gross, Decimal::from_str("2328").unwrap());
/// ```
pub fn calculate_gross(
    normal_hours: Decimal,
    overtime_hours: Decimal,
    base_rate: Decimal,
    allowances: Decimal,
) -> PayrollResult<Decimal> {
    for (field, value) in [
        ("normal_hours", normal_hours),
        ("overtime_hours", overtime_hours),
        ("base_rate", base_rate),
        ("allowances", allowances),
    ] {
        if value < Decimal::ZERO {
            return Err(PayrollError::InvalidInput {
                field: field.to_string(),
                message: format!("must not be negative, got {value}"),
            });
        }
    }

    Ok(normal_hours * base_rate + overtime_hours * base_rate * OVERTIME_MULTIPLIER + allowances)
}

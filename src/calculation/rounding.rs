//! Money rounding helper.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to 2 decimal places, half-up at the cent.
pub(crate) fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

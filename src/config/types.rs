//! Tax schedule configuration types.
//!
//! The withholding brackets are modeled as a versioned, swappable table so
//! future periods can change rates without touching calculation logic. The
//! crate ships the current schedule built in; alternative schedules load
//! from YAML via [`load_tax_schedule`](super::load_tax_schedule).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// One progressive withholding bracket.
///
/// A bracket applies to the portion of gross above `over`: the tax is
/// `base_tax` (the accumulated tax of all lower brackets) plus the excess
/// over the threshold at `marginal_rate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The lower gross threshold of this bracket (exclusive).
    pub over: Decimal,
    /// Accumulated tax owed at the threshold.
    pub base_tax: Decimal,
    /// Marginal rate applied to gross above the threshold.
    pub marginal_rate: Decimal,
}

/// A versioned progressive withholding schedule.
///
/// Brackets are ordered by ascending threshold. Gross at or below the
/// lowest threshold is untaxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSchedule {
    /// Identifier of this schedule revision.
    pub version: String,
    /// The withholding brackets, ascending by threshold.
    pub brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Returns the built-in withholding schedule.
    ///
    /// Marginal rates are applied directly to the period's gross, not
    /// annualized.
    pub fn builtin() -> Self {
        fn bracket(over: i64, base_cents: i64, rate_thousandths: i64) -> TaxBracket {
            TaxBracket {
                over: Decimal::from(over),
                base_tax: Decimal::new(base_cents, 2),
                marginal_rate: Decimal::new(rate_thousandths, 3),
            }
        }

        Self {
            version: "builtin".to_string(),
            brackets: vec![
                bracket(370, 0, 100),
                bracket(900, 5_300, 190),
                bracket(1_500, 16_700, 325),
                bracket(3_000, 65_450, 370),
                bracket(5_000, 139_450, 450),
            ],
        }
    }

    /// Validates the structural invariants of the schedule.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidTaxSchedule` when the schedule has no brackets,
    /// thresholds are not strictly ascending, a marginal rate falls outside
    /// `[0, 1]`, or a base tax or threshold is negative.
    pub fn validate(&self) -> PayrollResult<()> {
        if self.brackets.is_empty() {
            return Err(PayrollError::InvalidTaxSchedule {
                message: "schedule has no brackets".to_string(),
            });
        }

        let mut previous: Option<Decimal> = None;
        for bracket in &self.brackets {
            if bracket.over < Decimal::ZERO || bracket.base_tax < Decimal::ZERO {
                return Err(PayrollError::InvalidTaxSchedule {
                    message: format!("negative threshold or base tax at bracket over {}", bracket.over),
                });
            }
            if bracket.marginal_rate < Decimal::ZERO || bracket.marginal_rate > Decimal::ONE {
                return Err(PayrollError::InvalidTaxSchedule {
                    message: format!(
                        "marginal rate {} at bracket over {} is outside [0, 1]",
                        bracket.marginal_rate, bracket.over
                    ),
                });
            }
            if let Some(prev) = previous {
                if bracket.over <= prev {
                    return Err(PayrollError::InvalidTaxSchedule {
                        message: format!(
                            "bracket thresholds must be strictly ascending, {} follows {}",
                            bracket.over, prev
                        ),
                    });
                }
            }
            previous = Some(bracket.over);
        }

        Ok(())
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::builtin()
    }
}

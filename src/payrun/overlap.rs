//! Period overlap guard.
//!
//! The invariant check that keeps payrun periods disjoint and protects
//! already-processed periods from timesheet edits. Both checks share the
//! same closed-interval intersection test; they differ only in which error
//! they surface.

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayPeriod;

/// Checks that a candidate payrun period collides with no committed payrun.
///
/// # Errors
///
/// Fails with `PeriodOverlap` if any committed period satisfies
/// `existing.start <= candidate.end && existing.end >= candidate.start`
/// (inclusive boundaries, so periods sharing a single day collide).
pub fn ensure_period_available(
    candidate: &PayPeriod,
    committed: &[PayPeriod],
) -> PayrollResult<()> {
    if committed.iter().any(|existing| existing.overlaps(candidate)) {
        return Err(PayrollError::PeriodOverlap {
            start: candidate.start_date,
            end: candidate.end_date,
        });
    }
    Ok(())
}

/// Checks that a timesheet period touches no already-processed period.
///
/// Used when creating, editing, or deleting a timesheet: once a payrun has
/// settled a period, timesheets touching it are locked.
///
/// # Errors
///
/// Fails with `PeriodLocked` on the same closed-interval test as
/// [`ensure_period_available`].
pub fn ensure_period_unlocked(
    candidate: &PayPeriod,
    committed: &[PayPeriod],
) -> PayrollResult<()> {
    if committed.iter().any(|existing| existing.overlaps(candidate)) {
        return Err(PayrollError::PeriodLocked {
            start: candidate.start_date,
            end: candidate.end_date,
        });
    }
    Ok(())
}

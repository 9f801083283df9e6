//! Per-payslip disbursement outcomes.
//!
//! Disbursement is a partial-failure batch operation: each payslip's
//! transfer succeeds, is skipped, or fails independently. The outcomes are
//! collected explicitly and returned alongside the payrun so callers can
//! see exactly what happened to each payslip instead of digging through
//! logs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Payrun;

/// The result of one payslip's disbursement attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DisbursementOutcome {
    /// The transfer succeeded and the payslip is paid.
    Paid {
        /// The payslip that was paid.
        payslip_id: Uuid,
        /// The external transfer reference.
        transfer_id: String,
    },
    /// The employee has no configured payment destination; the payslip
    /// stays pending. Not an error.
    SkippedNoDestination {
        /// The payslip that was skipped.
        payslip_id: Uuid,
    },
    /// The transfer failed or timed out; the payslip stays pending and the
    /// transfer can be retried later.
    Failed {
        /// The payslip whose transfer failed.
        payslip_id: Uuid,
        /// A description of the failure.
        reason: String,
    },
}

/// The full result of a payrun generation.
///
/// Returned once the commit succeeds, regardless of how the individual
/// disbursements went: callers must inspect the per-payslip payment status
/// rather than treat the call's success as "everyone was paid".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPayrun {
    /// Human-readable batch label derived from the period boundaries.
    pub label: String,
    /// The committed payrun with its payslips.
    pub payrun: Payrun,
    /// One outcome per payslip, in payslip creation order.
    pub disbursements: Vec<DisbursementOutcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serialization_is_tagged() {
        let outcome = DisbursementOutcome::Failed {
            payslip_id: Uuid::nil(),
            reason: "downstream unavailable".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"failed\""));
        assert!(json.contains("\"reason\":\"downstream unavailable\""));
    }

    #[test]
    fn test_skip_serialization() {
        let outcome = DisbursementOutcome::SkippedNoDestination {
            payslip_id: Uuid::nil(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"status\":\"skipped_no_destination\""));
    }
}

//! Disbursement gateway contract.
//!
//! One payment transfer is issued per payslip. Failure is per-payslip and
//! retryable later; the orchestrator never lets a failed transfer abort or
//! revert the batch.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;

/// A request to transfer a payslip's net amount to an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// The amount in the smallest currency unit (cents).
    pub amount_minor_units: i64,
    /// The ISO currency code of the transfer.
    pub currency: String,
    /// The external payment destination reference.
    pub destination: String,
    /// Human-readable description attached to the transfer.
    pub description: String,
}

/// The downstream acknowledgement of a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// The external transfer reference.
    pub transfer_id: String,
}

/// Issues payment transfers against an external payment provider.
#[async_trait]
pub trait DisbursementGateway: Send + Sync {
    /// Transfers the given amount to the destination.
    ///
    /// # Errors
    ///
    /// Fails with `TransferFailed` on any downstream error. Callers treat
    /// the failure as retryable-later, never as fatal to the batch.
    async fn transfer(&self, request: TransferRequest) -> PayrollResult<TransferReceipt>;
}

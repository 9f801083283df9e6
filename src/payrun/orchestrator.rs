//! Payrun generation workflow.
//!
//! The orchestrator drives a payrun through its states: collect eligible
//! timesheets, calculate payslip drafts, commit the payrun atomically, then
//! disburse and render artifacts best-effort. Everything before the commit
//! is fully rejectable; everything after it is absorbed per payslip and
//! never fails the batch.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tokio::time::timeout;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_gross, calculate_hours, calculate_net, calculate_super, tax_withheld,
};
use crate::config::TaxSchedule;
use crate::error::{PayrollError, PayrollResult};
use crate::gateway::{ArtifactGenerator, DisbursementGateway, TransferRequest};
use crate::models::{Employee, PayPeriod, Payrun, PayrunTotals, Payslip, PaymentStatus};
use crate::store::PayrollStore;

use super::outcome::{DisbursementOutcome, GeneratedPayrun};
use super::overlap::ensure_period_available;

/// Currency of issued transfers.
const DISBURSEMENT_CURRENCY: &str = "usd";

/// Upper bound on a single transfer attempt. The batch itself has no
/// global timeout, so a slow transfer never aborts the others.
const TRANSFER_TIMEOUT: Duration = Duration::from_secs(30);

/// Drives payrun generation end to end.
///
/// Steps 1-3 (overlap check, collection, calculation, commit) run under an
/// internal generation lock, so two concurrent calls for overlapping
/// periods cannot both pass the overlap check and double-process the same
/// timesheets. Steps 4-5 (disbursement, artifacts) run outside the lock.
pub struct PayrunOrchestrator {
    store: Arc<dyn PayrollStore>,
    disbursement: Arc<dyn DisbursementGateway>,
    artifacts: Arc<dyn ArtifactGenerator>,
    tax_schedule: TaxSchedule,
    generation_lock: tokio::sync::Mutex<()>,
}

impl PayrunOrchestrator {
    /// Creates an orchestrator over the given store, gateways, and tax
    /// schedule.
    pub fn new(
        store: Arc<dyn PayrollStore>,
        disbursement: Arc<dyn DisbursementGateway>,
        artifacts: Arc<dyn ArtifactGenerator>,
        tax_schedule: TaxSchedule,
    ) -> Self {
        Self {
            store,
            disbursement,
            artifacts,
            tax_schedule,
            generation_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Generates, commits, and disburses a payrun for the given period.
    ///
    /// Once the commit succeeds the call returns `Ok` with the full payrun
    /// even if every transfer fails; callers inspect the per-payslip
    /// payment status and the returned [`DisbursementOutcome`] sequence.
    ///
    /// # Errors
    ///
    /// Before the commit: `InvalidInput` for an inverted period,
    /// `PeriodOverlap` when the period collides with a committed payrun,
    /// `NoEligibleTimesheets` / `NoPayableHours` when there is nothing to
    /// pay, and `InvalidEntry` when a timesheet contains bad time data.
    /// No persistence has happened when any of these are returned.
    pub async fn generate(&self, period: PayPeriod) -> PayrollResult<GeneratedPayrun> {
        if period.start_date > period.end_date {
            return Err(PayrollError::InvalidInput {
                field: "period".to_string(),
                message: format!(
                    "start date {} is after end date {}",
                    period.start_date, period.end_date
                ),
            });
        }

        let label = period.label();

        // Steps 1-3 are serialized: the lock spans the overlap check
        // through the commit.
        let guard = self.generation_lock.lock().await;

        let committed = self.store.list_payrun_periods().await?;
        ensure_period_available(&period, &committed)?;

        let eligible = self.store.fetch_unprocessed_timesheets(&period).await?;
        if eligible.is_empty() {
            return Err(PayrollError::NoEligibleTimesheets {
                start: period.start_date,
                end: period.end_date,
            });
        }

        let mut payslips = Vec::with_capacity(eligible.len());
        for item in &eligible {
            let hours = calculate_hours(&item.timesheet.entries)?;
            let gross = calculate_gross(
                hours.normal_hours,
                hours.overtime_hours,
                item.employee.base_hourly_rate,
                item.timesheet.allowances,
            )?;
            let tax = tax_withheld(gross, &self.tax_schedule)?;
            let super_contribution = calculate_super(gross, item.employee.super_rate)?;
            let net = calculate_net(gross, tax)?;

            payslips.push(Payslip {
                id: Uuid::new_v4(),
                employee_id: item.employee.id.clone(),
                normal_hours: hours.normal_hours,
                overtime_hours: hours.overtime_hours,
                gross,
                tax,
                super_contribution,
                net,
                payment_status: PaymentStatus::Pending,
                transfer_id: None,
                document_url: None,
            });
        }
        if payslips.is_empty() {
            return Err(PayrollError::NoPayableHours);
        }

        // Totals sum in input order so aggregate rounding is reproducible.
        let totals = PayrunTotals::from_payslips(&payslips);
        let mut payrun = Payrun {
            id: Uuid::new_v4(),
            period,
            totals,
            timesheet_ids: eligible.iter().map(|e| e.timesheet.id).collect(),
            payslips,
            created_at: Utc::now(),
        };

        self.store.commit_payrun(&payrun).await?;
        drop(guard);

        info!(
            payrun_id = %payrun.id,
            label = %label,
            payslips = payrun.payslips.len(),
            gross = %payrun.totals.gross,
            "payrun committed"
        );

        // Steps 4-5: disburse and render per payslip, in creation order.
        // One payslip's failure never blocks or reverts another's.
        let mut disbursements = Vec::with_capacity(payrun.payslips.len());
        for (slip, item) in payrun.payslips.iter_mut().zip(eligible.iter()) {
            let employee = &item.employee;
            let outcome = match &employee.payment_account_id {
                None => {
                    info!(
                        employee_id = %employee.id,
                        payslip_id = %slip.id,
                        "no payment destination configured, payslip stays pending"
                    );
                    DisbursementOutcome::SkippedNoDestination { payslip_id: slip.id }
                }
                Some(destination) => {
                    self.disburse(slip, destination, employee, &label).await
                }
            };
            disbursements.push(outcome);

            if let Some(url) = self
                .artifacts
                .render(slip, employee, &payrun.period)
                .await
            {
                slip.document_url = Some(url.clone());
                if let Err(err) = self.store.record_document(slip.id, &url).await {
                    warn!(payslip_id = %slip.id, error = %err, "failed to record document reference");
                }
            }
        }

        Ok(GeneratedPayrun {
            label,
            payrun,
            disbursements,
        })
    }

    /// Attempts one payslip's transfer and records the result.
    ///
    /// Failures are absorbed into a `Failed` outcome; the payslip stays
    /// pending and can be retried later.
    async fn disburse(
        &self,
        slip: &mut Payslip,
        destination: &str,
        employee: &Employee,
        label: &str,
    ) -> DisbursementOutcome {
        let amount_minor_units = match to_minor_units(slip.net) {
            Ok(amount) => amount,
            Err(err) => {
                warn!(payslip_id = %slip.id, error = %err, "net amount not expressible in minor units");
                return DisbursementOutcome::Failed {
                    payslip_id: slip.id,
                    reason: err.to_string(),
                };
            }
        };

        let request = TransferRequest {
            amount_minor_units,
            currency: DISBURSEMENT_CURRENCY.to_string(),
            destination: destination.to_string(),
            description: format!("Payrun {} - {}", label, employee.full_name()),
        };

        match timeout(TRANSFER_TIMEOUT, self.disbursement.transfer(request)).await {
            Ok(Ok(receipt)) => {
                if let Err(err) = self.store.record_payment(slip.id, &receipt.transfer_id).await {
                    warn!(
                        payslip_id = %slip.id,
                        transfer_id = %receipt.transfer_id,
                        error = %err,
                        "transfer succeeded but payment could not be recorded"
                    );
                    return DisbursementOutcome::Failed {
                        payslip_id: slip.id,
                        reason: err.to_string(),
                    };
                }
                slip.mark_paid(receipt.transfer_id.clone());
                info!(
                    payslip_id = %slip.id,
                    employee_id = %employee.id,
                    transfer_id = %receipt.transfer_id,
                    "payslip disbursed"
                );
                DisbursementOutcome::Paid {
                    payslip_id: slip.id,
                    transfer_id: receipt.transfer_id,
                }
            }
            Ok(Err(err)) => {
                warn!(
                    payslip_id = %slip.id,
                    employee_id = %employee.id,
                    error = %err,
                    "transfer failed, payslip stays pending"
                );
                DisbursementOutcome::Failed {
                    payslip_id: slip.id,
                    reason: err.to_string(),
                }
            }
            Err(_) => {
                warn!(
                    payslip_id = %slip.id,
                    employee_id = %employee.id,
                    timeout_secs = TRANSFER_TIMEOUT.as_secs(),
                    "transfer timed out, payslip stays pending"
                );
                DisbursementOutcome::Failed {
                    payslip_id: slip.id,
                    reason: format!(
                        "transfer timed out after {} seconds",
                        TRANSFER_TIMEOUT.as_secs()
                    ),
                }
            }
        }
    }
}

/// Converts a money amount to the smallest currency unit.
fn to_minor_units(amount: Decimal) -> PayrollResult<i64> {
    (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| PayrollError::InvalidInput {
            field: "net".to_string(),
            message: format!("amount {amount} cannot be expressed in minor units"),
        })
}

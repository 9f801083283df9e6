//! Persistence boundary for the payroll engine.
//!
//! The [`PayrollStore`] trait abstracts the storage backend so the domain
//! layer can work against different implementations without modification.
//! The crate bundles an in-memory backend ([`MemoryStore`]) used by the
//! API state, the tests, and the benchmarks.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::PayrollResult;
use crate::models::{Employee, PayPeriod, Payrun, Timesheet};

pub use memory::MemoryStore;

/// A timesheet eligible for payrun processing, joined with the pay-rate
/// data of the employee who reported it.
#[derive(Debug, Clone, PartialEq)]
pub struct EligibleTimesheet {
    /// The unprocessed timesheet.
    pub timesheet: Timesheet,
    /// The employee the timesheet belongs to.
    pub employee: Employee,
}

/// Storage operations required by the payroll engine.
///
/// The single non-negotiable contract is [`commit_payrun`]: the payrun,
/// its payslips, and the status flip of every consumed timesheet must be
/// persisted as one atomic unit. It is the engine's sole all-or-nothing
/// boundary.
///
/// [`commit_payrun`]: PayrollStore::commit_payrun
#[async_trait]
pub trait PayrollStore: Send + Sync {
    /// Stores a new employee.
    async fn insert_employee(&self, employee: Employee) -> PayrollResult<()>;

    /// Fetches an employee by id.
    async fn get_employee(&self, id: &str) -> PayrollResult<Employee>;

    /// Lists all employees.
    async fn list_employees(&self) -> PayrollResult<Vec<Employee>>;

    /// Stores a new timesheet.
    async fn insert_timesheet(&self, timesheet: Timesheet) -> PayrollResult<()>;

    /// Fetches a timesheet by id.
    async fn get_timesheet(&self, id: Uuid) -> PayrollResult<Timesheet>;

    /// Replaces an existing timesheet (matched by id).
    async fn update_timesheet(&self, timesheet: Timesheet) -> PayrollResult<()>;

    /// Deletes a timesheet by id.
    async fn delete_timesheet(&self, id: Uuid) -> PayrollResult<()>;

    /// Lists all timesheets, most recent period first.
    async fn list_timesheets(&self) -> PayrollResult<Vec<Timesheet>>;

    /// Finds a timesheet for the given employee with this exact period.
    async fn find_timesheet(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> PayrollResult<Option<Timesheet>>;

    /// Returns the periods of all committed payruns, for overlap checking.
    async fn list_payrun_periods(&self) -> PayrollResult<Vec<PayPeriod>>;

    /// Fetches unprocessed timesheets whose period falls entirely within
    /// the given period, joined with employee data, in submission order.
    async fn fetch_unprocessed_timesheets(
        &self,
        period: &PayPeriod,
    ) -> PayrollResult<Vec<EligibleTimesheet>>;

    /// Atomically persists a payrun with its payslips and marks every
    /// consumed timesheet as processed with a link to the payrun.
    ///
    /// Implementations must re-verify the period invariant at the commit
    /// point (unique constraint or equivalent) so that two racing
    /// generation attempts cannot both commit overlapping periods.
    async fn commit_payrun(&self, payrun: &Payrun) -> PayrollResult<()>;

    /// Records a successful transfer against a payslip.
    async fn record_payment(&self, payslip_id: Uuid, transfer_id: &str) -> PayrollResult<()>;

    /// Records a rendered document reference against a payslip.
    async fn record_document(&self, payslip_id: Uuid, url: &str) -> PayrollResult<()>;

    /// Lists all committed payruns, most recent first.
    async fn list_payruns(&self) -> PayrollResult<Vec<Payrun>>;

    /// Fetches a payrun by id.
    async fn get_payrun(&self, id: Uuid) -> PayrollResult<Payrun>;
}

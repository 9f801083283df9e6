//! In-memory storage backend.
//!
//! The bundled [`PayrollStore`] implementation. All state lives behind a
//! single async mutex, so every operation is serialized; `commit_payrun`
//! performs its invariant re-check and all of its writes under one lock
//! acquisition, which makes the commit atomic with respect to concurrent
//! callers.

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use std::collections::HashMap;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayPeriod, Payrun, Timesheet, TimesheetStatus};

use super::{EligibleTimesheet, PayrollStore};

#[derive(Debug, Default)]
struct MemoryState {
    employees: HashMap<String, Employee>,
    // Submission order matters: payrun drafting iterates timesheets in the
    // order they were stored so aggregate totals sum reproducibly.
    timesheets: Vec<Timesheet>,
    payruns: Vec<Payrun>,
}

/// An in-memory [`PayrollStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PayrollStore for MemoryStore {
    async fn insert_employee(&self, employee: Employee) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        if state.employees.contains_key(&employee.id) {
            return Err(PayrollError::InvalidInput {
                field: "id".to_string(),
                message: format!("employee '{}' already exists", employee.id),
            });
        }
        state.employees.insert(employee.id.clone(), employee);
        Ok(())
    }

    async fn get_employee(&self, id: &str) -> PayrollResult<Employee> {
        let state = self.state.lock().await;
        state
            .employees
            .get(id)
            .cloned()
            .ok_or_else(|| PayrollError::EmployeeNotFound { id: id.to_string() })
    }

    async fn list_employees(&self) -> PayrollResult<Vec<Employee>> {
        let state = self.state.lock().await;
        let mut employees: Vec<Employee> = state.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(employees)
    }

    async fn insert_timesheet(&self, timesheet: Timesheet) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        state.timesheets.push(timesheet);
        Ok(())
    }

    async fn get_timesheet(&self, id: Uuid) -> PayrollResult<Timesheet> {
        let state = self.state.lock().await;
        state
            .timesheets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(PayrollError::TimesheetNotFound { id })
    }

    async fn update_timesheet(&self, timesheet: Timesheet) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        let id = timesheet.id;
        match state.timesheets.iter_mut().find(|t| t.id == id) {
            Some(existing) => {
                *existing = timesheet;
                Ok(())
            }
            None => Err(PayrollError::TimesheetNotFound { id }),
        }
    }

    async fn delete_timesheet(&self, id: Uuid) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        let before = state.timesheets.len();
        state.timesheets.retain(|t| t.id != id);
        if state.timesheets.len() == before {
            return Err(PayrollError::TimesheetNotFound { id });
        }
        Ok(())
    }

    async fn list_timesheets(&self) -> PayrollResult<Vec<Timesheet>> {
        let state = self.state.lock().await;
        let mut timesheets = state.timesheets.clone();
        timesheets.sort_by(|a, b| b.period.start_date.cmp(&a.period.start_date));
        Ok(timesheets)
    }

    async fn find_timesheet(
        &self,
        employee_id: &str,
        period: &PayPeriod,
    ) -> PayrollResult<Option<Timesheet>> {
        let state = self.state.lock().await;
        Ok(state
            .timesheets
            .iter()
            .find(|t| t.employee_id == employee_id && t.period == *period)
            .cloned())
    }

    async fn list_payrun_periods(&self) -> PayrollResult<Vec<PayPeriod>> {
        let state = self.state.lock().await;
        Ok(state.payruns.iter().map(|p| p.period).collect())
    }

    async fn fetch_unprocessed_timesheets(
        &self,
        period: &PayPeriod,
    ) -> PayrollResult<Vec<EligibleTimesheet>> {
        let state = self.state.lock().await;
        let mut eligible = Vec::new();
        for timesheet in &state.timesheets {
            if timesheet.status != TimesheetStatus::Unprocessed
                || !period.contains_period(&timesheet.period)
            {
                continue;
            }
            let employee = state
                .employees
                .get(&timesheet.employee_id)
                .cloned()
                .ok_or_else(|| PayrollError::EmployeeNotFound {
                    id: timesheet.employee_id.clone(),
                })?;
            eligible.push(EligibleTimesheet {
                timesheet: timesheet.clone(),
                employee,
            });
        }
        Ok(eligible)
    }

    async fn commit_payrun(&self, payrun: &Payrun) -> PayrollResult<()> {
        let mut state = self.state.lock().await;

        // Commit-point re-check of the period invariant, the in-memory
        // analog of a unique constraint on the period.
        for existing in &state.payruns {
            if existing.period.overlaps(&payrun.period) {
                return Err(PayrollError::PeriodOverlap {
                    start: payrun.period.start_date,
                    end: payrun.period.end_date,
                });
            }
        }

        for id in &payrun.timesheet_ids {
            let timesheet = state
                .timesheets
                .iter()
                .find(|t| t.id == *id)
                .ok_or(PayrollError::TimesheetNotFound { id: *id })?;
            if timesheet.is_processed() {
                return Err(PayrollError::PeriodLocked {
                    start: timesheet.period.start_date,
                    end: timesheet.period.end_date,
                });
            }
        }

        for timesheet in state.timesheets.iter_mut() {
            if payrun.timesheet_ids.contains(&timesheet.id) {
                timesheet.mark_processed(payrun.id);
            }
        }
        state.payruns.push(payrun.clone());
        Ok(())
    }

    async fn record_payment(&self, payslip_id: Uuid, transfer_id: &str) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        let slip = state
            .payruns
            .iter_mut()
            .flat_map(|p| p.payslips.iter_mut())
            .find(|s| s.id == payslip_id)
            .ok_or(PayrollError::PayslipNotFound { id: payslip_id })?;
        slip.mark_paid(transfer_id.to_string());
        Ok(())
    }

    async fn record_document(&self, payslip_id: Uuid, url: &str) -> PayrollResult<()> {
        let mut state = self.state.lock().await;
        let slip = state
            .payruns
            .iter_mut()
            .flat_map(|p| p.payslips.iter_mut())
            .find(|s| s.id == payslip_id)
            .ok_or(PayrollError::PayslipNotFound { id: payslip_id })?;
        slip.document_url = Some(url.to_string());
        Ok(())
    }

    async fn list_payruns(&self) -> PayrollResult<Vec<Payrun>> {
        let state = self.state.lock().await;
        let mut payruns = state.payruns.clone();
        payruns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(payruns)
    }

    async fn get_payrun(&self, id: Uuid) -> PayrollResult<Payrun> {
        let state = self.state.lock().await;
        state
            .payruns
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(PayrollError::PayrunNotFound { id })
    }
}

//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::TaxSchedule;
use crate::gateway::{ArtifactGenerator, DisbursementGateway};
use crate::payrun::PayrunOrchestrator;
use crate::store::PayrollStore;

/// Shared application state.
///
/// Contains the storage backend and the payrun orchestrator wired over it.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn PayrollStore>,
    orchestrator: Arc<PayrunOrchestrator>,
}

impl AppState {
    /// Creates the application state over a store, the external gateways,
    /// and a tax schedule.
    pub fn new(
        store: Arc<dyn PayrollStore>,
        disbursement: Arc<dyn DisbursementGateway>,
        artifacts: Arc<dyn ArtifactGenerator>,
        tax_schedule: TaxSchedule,
    ) -> Self {
        let orchestrator = Arc::new(PayrunOrchestrator::new(
            store.clone(),
            disbursement,
            artifacts,
            tax_schedule,
        ));
        Self {
            store,
            orchestrator,
        }
    }

    /// Returns the storage backend.
    pub fn store(&self) -> &Arc<dyn PayrollStore> {
        &self.store
    }

    /// Returns the payrun orchestrator.
    pub fn orchestrator(&self) -> &PayrunOrchestrator {
        &self.orchestrator
    }
}

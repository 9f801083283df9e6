//! Payslip artifact generation contract.
//!
//! Rendering and storing the payslip document is best-effort: an
//! unconfigured or failing backend yields no document and must never
//! surface an error into the orchestrator.

use async_trait::async_trait;

use crate::models::{Employee, PayPeriod, Payslip};

/// Renders and stores a payslip document.
#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    /// Renders a document for the payslip and returns its reference.
    ///
    /// Returns `None` when the artifact backend is unconfigured or the
    /// render fails; implementations convert internal errors to `None`
    /// rather than propagating them.
    async fn render(
        &self,
        payslip: &Payslip,
        employee: &Employee,
        period: &PayPeriod,
    ) -> Option<String>;
}

/// An artifact generator for deployments without a document backend.
///
/// Always produces no document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopArtifactGenerator;

#[async_trait]
impl ArtifactGenerator for NoopArtifactGenerator {
    async fn render(
        &self,
        _payslip: &Payslip,
        _employee: &Employee,
        _period: &PayPeriod,
    ) -> Option<String> {
        None
    }
}

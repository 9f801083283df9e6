//! Payslip model.
//!
//! This module defines the [`Payslip`] struct, one employee's computed pay
//! result within a payrun. Payslips are created atomically with their parent
//! payrun; only the payment status and the transfer/document references
//! mutate afterwards, and only through the disbursement and artifact steps.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payment state of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// No transfer has succeeded for this payslip yet.
    Pending,
    /// The net amount has been transferred to the employee's destination.
    Paid,
}

/// One employee's computed pay result within a payrun.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for the payslip.
    pub id: Uuid,
    /// The employee this payslip pays.
    pub employee_id: String,
    /// Hours paid at the base rate.
    pub normal_hours: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime_hours: Decimal,
    /// Gross pay before tax.
    pub gross: Decimal,
    /// Tax withheld from gross.
    pub tax: Decimal,
    /// Employer superannuation contribution (not deducted from net).
    pub super_contribution: Decimal,
    /// Net pay transferred to the employee.
    pub net: Decimal,
    /// Whether the net amount has been disbursed.
    pub payment_status: PaymentStatus,
    /// External transfer reference, set when disbursement succeeds.
    #[serde(default)]
    pub transfer_id: Option<String>,
    /// Rendered payslip document reference, set when the artifact backend
    /// produces one.
    #[serde(default)]
    pub document_url: Option<String>,
}

impl Payslip {
    /// Records a successful transfer against this payslip.
    pub fn mark_paid(&mut self, transfer_id: String) {
        self.payment_status = PaymentStatus::Paid;
        self.transfer_id = Some(transfer_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_payslip() -> Payslip {
        Payslip {
            id: Uuid::new_v4(),
            employee_id: "e-bob".to_string(),
            normal_hours: dec("38"),
            overtime_hours: dec("7"),
            gross: dec("2328.00"),
            tax: dec("436.10"),
            super_contribution: dec("267.72"),
            net: dec("1891.90"),
            payment_status: PaymentStatus::Pending,
            transfer_id: None,
            document_url: None,
        }
    }

    #[test]
    fn test_new_payslip_is_pending() {
        let slip = create_test_payslip();
        assert_eq!(slip.payment_status, PaymentStatus::Pending);
        assert!(slip.transfer_id.is_none());
        assert!(slip.document_url.is_none());
    }

    #[test]
    fn test_mark_paid_records_transfer_reference() {
        let mut slip = create_test_payslip();
        slip.mark_paid("tr_789".to_string());
        assert_eq!(slip.payment_status, PaymentStatus::Paid);
        assert_eq!(slip.transfer_id.as_deref(), Some("tr_789"));
    }

    #[test]
    fn test_payment_status_serialization_matches_wire_format() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"PAID\""
        );
    }

    #[test]
    fn test_payslip_serialization_round_trip() {
        let slip = create_test_payslip();
        let json = serde_json::to_string(&slip).unwrap();
        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(slip, deserialized);
    }
}

//! End-to-end tests for the payroll engine API.
//!
//! This suite drives the full flow through the router: seeding employees
//! and timesheets, generating a payrun, and verifying the committed state,
//! including:
//! - Calculation of normal/overtime hours, tax, super, and net
//! - The period overlap invariant across payruns
//! - Partial disbursement failure within a batch
//! - Timesheet locking once a period is processed

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::TaxSchedule;
use payroll_engine::error::{PayrollError, PayrollResult};
use payroll_engine::gateway::{
    ArtifactGenerator, DisbursementGateway, NoopArtifactGenerator, TransferReceipt,
    TransferRequest,
};
use payroll_engine::models::{Employee, PayPeriod, Payslip};
use payroll_engine::store::MemoryStore;
use rust_decimal::Decimal;
use std::str::FromStr;

// =============================================================================
// Test Helpers
// =============================================================================

/// Asserts a JSON decimal field equals the expected value numerically,
/// ignoring trailing-zero differences in the serialized form.
fn assert_decimal(value: &Value, expected: &str) {
    let actual = Decimal::from_str(value.as_str().unwrap()).unwrap();
    let expected = Decimal::from_str(expected).unwrap();
    assert_eq!(actual, expected, "expected {expected}, got {actual}");
}

/// A gateway that succeeds with sequential transfer ids, except for the
/// destinations it is told to fail.
#[derive(Default)]
struct ScriptedGateway {
    calls: Mutex<Vec<TransferRequest>>,
    failing_destinations: HashSet<String>,
}

impl ScriptedGateway {
    fn failing_for(destinations: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failing_destinations: destinations.iter().map(|d| d.to_string()).collect(),
        }
    }
}

#[async_trait]
impl DisbursementGateway for ScriptedGateway {
    async fn transfer(&self, request: TransferRequest) -> PayrollResult<TransferReceipt> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(request.clone());
        if self.failing_destinations.contains(&request.destination) {
            return Err(PayrollError::TransferFailed {
                employee_id: request.destination,
                message: "simulated downstream failure".to_string(),
            });
        }
        Ok(TransferReceipt {
            transfer_id: format!("tr_{:03}", calls.len()),
        })
    }
}

/// An artifact generator that renders a document URL for every payslip.
struct StaticArtifacts;

#[async_trait]
impl ArtifactGenerator for StaticArtifacts {
    async fn render(
        &self,
        payslip: &Payslip,
        _employee: &Employee,
        _period: &PayPeriod,
    ) -> Option<String> {
        Some(format!("https://artifacts.test/payslips/{}.pdf", payslip.id))
    }
}

fn router_with_gateway(gateway: Arc<dyn DisbursementGateway>) -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        gateway,
        Arc::new(NoopArtifactGenerator),
        TaxSchedule::builtin(),
    );
    create_router(state)
}

fn create_test_router() -> Router {
    router_with_gateway(Arc::new(ScriptedGateway::default()))
}

async fn send(router: &Router, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn employee_body(id: &str, first_name: &str, rate: &str, destination: Option<&str>) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": "Test",
        "base_hourly_rate": rate,
        "super_rate": "0.115",
        "bank_bsb": "083-123",
        "bank_account": "12345678",
        "payment_account_id": destination
    })
}

/// Entries for an eight-hour day (09:00-17:00, no break) per given date.
fn eight_hour_entries(dates: &[&str]) -> Value {
    Value::Array(
        dates
            .iter()
            .map(|date| {
                json!({
                    "date": date,
                    "start": "09:00:00",
                    "end": "17:00:00",
                    "unpaid_break_mins": 0
                })
            })
            .collect(),
    )
}

fn timesheet_body(employee_id: &str, allowances: &str, entries: Value) -> Value {
    json!({
        "employee_id": employee_id,
        "period_start": "2025-06-02",
        "period_end": "2025-06-08",
        "allowances": allowances,
        "entries": entries
    })
}

fn generate_body() -> Value {
    json!({"period_start": "2025-06-02", "period_end": "2025-06-08"})
}

async fn seed_employee(router: &Router, body: Value) {
    let (status, _) = send(router, "POST", "/employees", body).await;
    assert_eq!(status, StatusCode::CREATED);
}

async fn seed_timesheet(router: &Router, body: Value) {
    let (status, _) = send(router, "POST", "/timesheets", body).await;
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Payrun generation
// =============================================================================

#[tokio::test]
async fn test_full_payrun_flow_with_overtime_and_allowances() {
    let router = create_test_router();

    seed_employee(
        &router,
        employee_body("e-alice", "Alice", "35", Some("acct_alice")),
    )
    .await;
    seed_employee(
        &router,
        employee_body("e-bob", "Bob", "48", Some("acct_bob")),
    )
    .await;

    // Alice: 4x8h + 5h = 37 hours plus 30 allowances.
    let mut alice_entries = eight_hour_entries(&[
        "2025-06-02",
        "2025-06-03",
        "2025-06-04",
        "2025-06-05",
    ]);
    alice_entries.as_array_mut().unwrap().push(json!({
        "date": "2025-06-06",
        "start": "09:00:00",
        "end": "14:00:00",
        "unpaid_break_mins": 0
    }));
    seed_timesheet(&router, timesheet_body("e-alice", "30", alice_entries)).await;

    // Bob: 5x9h = 45 hours, paid as 38 normal + 7 overtime.
    let bob_entries = Value::Array(
        ["2025-06-02", "2025-06-03", "2025-06-04", "2025-06-05", "2025-06-06"]
            .iter()
            .map(|date| {
                json!({
                    "date": date,
                    "start": "08:00:00",
                    "end": "17:00:00",
                    "unpaid_break_mins": 0
                })
            })
            .collect(),
    );
    seed_timesheet(&router, timesheet_body("e-bob", "0", bob_entries)).await;

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["message"], "Payrun generated successfully.");
    assert_eq!(body["label"], "PR-2025-06-02-2025-06-08");

    let payslips = body["payrun"]["payslips"].as_array().unwrap();
    assert_eq!(payslips.len(), 2);

    let alice = &payslips[0];
    assert_eq!(alice["employee_id"], "e-alice");
    assert_decimal(&alice["normal_hours"], "37");
    assert_decimal(&alice["gross"], "1325");
    assert_decimal(&alice["tax"], "133.75");
    assert_decimal(&alice["super_contribution"], "152.38");
    assert_decimal(&alice["net"], "1191.25");
    assert_eq!(alice["payment_status"], "PAID");

    let bob = &payslips[1];
    assert_decimal(&bob["normal_hours"], "38");
    assert_decimal(&bob["overtime_hours"], "7");
    assert_decimal(&bob["gross"], "2328");
    assert_decimal(&bob["tax"], "436.10");
    assert_decimal(&bob["net"], "1891.90");

    let totals = &body["payrun"]["totals"];
    assert_decimal(&totals["gross"], "3653");
    assert_decimal(&totals["net"], "3083.15");

    // Both disbursements succeeded.
    let disbursements = body["disbursements"].as_array().unwrap();
    assert!(disbursements.iter().all(|d| d["status"] == "paid"));

    // The payrun is visible through the read endpoints.
    let (status, listed) = send(&router, "GET", "/payruns", Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let payrun_id = body["payrun"]["id"].as_str().unwrap();
    let (status, fetched) = send(&router, "GET", &format!("/payruns/{payrun_id}"), Value::Null).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["payslips"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_partial_disbursement_failure_keeps_batch() {
    let gateway = Arc::new(ScriptedGateway::failing_for(&["acct_b"]));
    let router = router_with_gateway(gateway.clone());

    for (id, first_name, acct) in [
        ("e-a", "Ana", "acct_a"),
        ("e-b", "Ben", "acct_b"),
        ("e-c", "Cal", "acct_c"),
    ] {
        seed_employee(&router, employee_body(id, first_name, "35", Some(acct))).await;
        seed_timesheet(
            &router,
            timesheet_body(id, "0", eight_hour_entries(&["2025-06-02", "2025-06-03"])),
        )
        .await;
    }

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;

    // The batch call still succeeds with all three payslips persisted.
    assert_eq!(status, StatusCode::OK);
    let payslips = body["payrun"]["payslips"].as_array().unwrap();
    assert_eq!(payslips.len(), 3);
    assert_eq!(payslips[0]["payment_status"], "PAID");
    assert_eq!(payslips[1]["payment_status"], "PENDING");
    assert_eq!(payslips[2]["payment_status"], "PAID");

    let disbursements = body["disbursements"].as_array().unwrap();
    assert_eq!(disbursements[0]["status"], "paid");
    assert_eq!(disbursements[1]["status"], "failed");
    assert_eq!(disbursements[2]["status"], "paid");

    // All three transfers were attempted; the failure blocked nobody.
    assert_eq!(gateway.calls.lock().unwrap().len(), 3);

    // The pending payslip persists for a later retry.
    let payrun_id = body["payrun"]["id"].as_str().unwrap();
    let (_, fetched) = send(&router, "GET", &format!("/payruns/{payrun_id}"), Value::Null).await;
    assert_eq!(fetched["payslips"][1]["payment_status"], "PENDING");
    assert!(fetched["payslips"][1]["transfer_id"].is_null());
}

#[tokio::test]
async fn test_rerun_for_covered_period_conflicts_without_mutation() {
    let router = create_test_router();
    seed_employee(&router, employee_body("e-a", "Ana", "35", Some("acct_a"))).await;
    seed_timesheet(
        &router,
        timesheet_body("e-a", "0", eight_hour_entries(&["2025-06-02"])),
    )
    .await;

    let (status, _) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "PERIOD_OVERLAP");

    // A boundary-adjacent period sharing one day also conflicts.
    let (status, body) = send(
        &router,
        "POST",
        "/payruns",
        json!({"period_start": "2025-06-08", "period_end": "2025-06-14"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "PERIOD_OVERLAP");

    let (_, listed) = send(&router, "GET", "/payruns", Value::Null).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_without_timesheets_returns_404() {
    let router = create_test_router();

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_ELIGIBLE_TIMESHEETS");
}

#[tokio::test]
async fn test_employee_without_destination_stays_pending() {
    let router = create_test_router();
    seed_employee(&router, employee_body("e-a", "Ana", "35", None)).await;
    seed_timesheet(
        &router,
        timesheet_body("e-a", "0", eight_hour_entries(&["2025-06-02"])),
    )
    .await;

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payrun"]["payslips"][0]["payment_status"], "PENDING");
    assert_eq!(body["disbursements"][0]["status"], "skipped_no_destination");
}

#[tokio::test]
async fn test_artifact_generation_attaches_documents() {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(ScriptedGateway::default()),
        Arc::new(StaticArtifacts),
        TaxSchedule::builtin(),
    );
    let router = create_router(state);

    seed_employee(&router, employee_body("e-a", "Ana", "35", None)).await;
    seed_timesheet(
        &router,
        timesheet_body("e-a", "0", eight_hour_entries(&["2025-06-02"])),
    )
    .await;

    let (status, body) = send(&router, "POST", "/payruns", generate_body()).await;
    assert_eq!(status, StatusCode::OK);

    // The document is rendered even though the payslip was never paid.
    let slip = &body["payrun"]["payslips"][0];
    assert!(slip["document_url"].as_str().unwrap().starts_with("https://artifacts.test/"));
    assert_eq!(slip["payment_status"], "PENDING");
}

// =============================================================================
// Timesheet lifecycle
// =============================================================================

#[tokio::test]
async fn test_timesheet_update_before_processing() {
    let router = create_test_router();
    seed_employee(&router, employee_body("e-a", "Ana", "35", None)).await;

    let (_, sheet) = send(
        &router,
        "POST",
        "/timesheets",
        timesheet_body("e-a", "0", eight_hour_entries(&["2025-06-02"])),
    )
    .await;
    let sheet_id = sheet["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &router,
        "PUT",
        &format!("/timesheets/{sheet_id}"),
        json!({
            "period_start": "2025-06-02",
            "period_end": "2025-06-08",
            "allowances": "25",
            "entries": eight_hour_entries(&["2025-06-02", "2025-06-03"])
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], sheet_id.as_str());
    assert_decimal(&updated["allowances"], "25");
    assert_eq!(updated["entries"].as_array().unwrap().len(), 2);
    assert_eq!(updated["status"], "UNPROCESSED");
}

#[tokio::test]
async fn test_consumed_timesheet_carries_payrun_reference() {
    let router = create_test_router();
    seed_employee(&router, employee_body("e-a", "Ana", "35", None)).await;
    seed_timesheet(
        &router,
        timesheet_body("e-a", "0", eight_hour_entries(&["2025-06-02"])),
    )
    .await;

    let (_, generated) = send(&router, "POST", "/payruns", generate_body()).await;
    let payrun_id = generated["payrun"]["id"].as_str().unwrap();

    let (_, timesheets) = send(&router, "GET", "/timesheets", Value::Null).await;
    let sheet = &timesheets.as_array().unwrap()[0];
    assert_eq!(sheet["status"], "PROCESSED");
    assert_eq!(sheet["payrun_id"].as_str().unwrap(), payrun_id);
}

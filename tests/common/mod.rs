//! Shared test fixtures.

#![allow(dead_code)]

use app_lib::app::{application_submit, ApplicationSubmitReq};
use app_lib::infra::{init_db, Db};
use tempfile::TempDir;

/// Fresh store in its own temp dir. Keep the `TempDir` alive for the test.
pub fn init_test_db() -> (TempDir, Db) {
    let dir = tempfile::tempdir().unwrap();
    let db = init_db(&dir.path().join("bis.db")).unwrap();
    (dir, db)
}

pub fn make_submit_req(id: &str, company: &str) -> ApplicationSubmitReq {
    ApplicationSubmitReq {
        id: Some(id.to_string()),
        company: Some(company.to_string()),
        gst: Some("27AAACB1234F1Z5".to_string()),
        state: Some("Maharashtra".to_string()),
        category: Some("Electronics".to_string()),
        specs: Some("IS 13252".to_string()),
        app_type: Some("New".to_string()),
        production_start: Some("2024-04-01".to_string()),
        production_volume: Some("5000 units/month".to_string()),
        score: Some(serde_json::json!(72)),
        risk: Some("Low".to_string()),
        findings: Some(serde_json::json!(["Lab report attached", {"section": 4, "ok": true}])),
    }
}

pub fn submit_with_score(db: &Db, id: &str, score: i64) {
    let mut req = make_submit_req(id, "Acme Industries");
    req.score = Some(serde_json::json!(score));
    application_submit(db, req).unwrap();
}

/// Pin `submitted_at` so ordering does not depend on wall-clock resolution.
pub fn set_submitted_at(db: &Db, id: &str, ts: &str) {
    let conn = db.connect().unwrap();
    conn.execute(
        "UPDATE applications SET submitted_at = ?1 WHERE id = ?2",
        [ts, id],
    )
    .unwrap();
}

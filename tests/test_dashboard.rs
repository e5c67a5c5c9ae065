//! Dashboard counter tests

mod common;

use app_lib::app::{application_decide, dashboard_stats, DashboardStatsDto, OfficerDecisionReq};
use app_lib::infra::Db;
use common::{init_test_db, submit_with_score};

fn decide(db: &Db, id: &str, decision: &str) {
    application_decide(
        db,
        OfficerDecisionReq {
            id: Some(id.to_string()),
            decision: Some(decision.to_string()),
            ..Default::default()
        },
    )
    .unwrap();
}

#[test]
fn stats_empty_store_all_zero() {
    let (_dir, db) = init_test_db();
    let stats = dashboard_stats(&db).unwrap();
    assert_eq!(
        stats,
        DashboardStatsDto {
            total: 0,
            accepted: 0,
            rejected: 0,
            pending: 0,
            high_risk: 0,
        }
    );
}

#[test]
fn stats_counts_are_independent() {
    let (_dir, db) = init_test_db();
    submit_with_score(&db, "BIS-1", 60);
    submit_with_score(&db, "BIS-2", 70);
    submit_with_score(&db, "BIS-3", 80);
    submit_with_score(&db, "BIS-4", 10);
    decide(&db, "BIS-1", "accepted");
    decide(&db, "BIS-2", "accepted");
    decide(&db, "BIS-3", "rejected");

    let stats = dashboard_stats(&db).unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.rejected, 1);
    // BIS-4 is both pending and high risk
    assert_eq!(stats.pending, 1);
    assert_eq!(stats.high_risk, 1);
}

#[test]
fn stats_score_threshold_is_exclusive() {
    let (_dir, db) = init_test_db();
    submit_with_score(&db, "BIS-1", 49);
    submit_with_score(&db, "BIS-2", 50);
    assert_eq!(dashboard_stats(&db).unwrap().high_risk, 1);
}

#[test]
fn stats_unrecognized_status_counts_only_in_total() {
    let (_dir, db) = init_test_db();
    submit_with_score(&db, "BIS-1", 90);
    decide(&db, "BIS-1", "on-hold");

    let stats = dashboard_stats(&db).unwrap();
    assert_eq!(stats.total, 1);
    assert_eq!(stats.accepted + stats.rejected + stats.pending, 0);
}

#[test]
fn stats_serialize_high_risk_camel_case() {
    let stats = DashboardStatsDto {
        total: 4,
        accepted: 2,
        rejected: 1,
        pending: 1,
        high_risk: 1,
    };
    assert_eq!(
        serde_json::to_value(&stats).unwrap(),
        serde_json::json!({"total": 4, "accepted": 2, "rejected": 1, "pending": 1, "highRisk": 1})
    );
}

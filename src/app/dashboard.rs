//! Dashboard counters.

use crate::domain::{ApplicationStatus, HIGH_RISK_SCORE};
use crate::error::AppError;
use crate::infra::Db;
use serde::Serialize;

/// Five independent counts; one application may appear in several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsDto {
    pub total: i64,
    pub accepted: i64,
    pub rejected: i64,
    pub pending: i64,
    pub high_risk: i64,
}

pub fn dashboard_stats(db: &Db) -> Result<DashboardStatsDto, AppError> {
    let conn = db.connect()?;
    let by_status = |status: ApplicationStatus| -> Result<i64, AppError> {
        Ok(conn.query_row(
            "SELECT COUNT(*) FROM applications WHERE status = ?1",
            [status.as_str()],
            |r| r.get(0),
        )?)
    };

    Ok(DashboardStatsDto {
        total: conn.query_row("SELECT COUNT(*) FROM applications", [], |r| r.get(0))?,
        accepted: by_status(ApplicationStatus::Accepted)?,
        rejected: by_status(ApplicationStatus::Rejected)?,
        pending: by_status(ApplicationStatus::Pending)?,
        high_risk: conn.query_row(
            "SELECT COUNT(*) FROM applications WHERE score < ?1",
            [HIGH_RISK_SCORE],
            |r| r.get(0),
        )?,
    })
}

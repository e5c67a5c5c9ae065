use crate::app::{dashboard_stats, DashboardStatsDto};
use crate::commands::blocking;
use crate::error::AppError;
use crate::infra::Db;
use axum::extract::State;
use axum::Json;

pub async fn cmd_dashboard_stats(
    State(db): State<Db>,
) -> Result<Json<DashboardStatsDto>, AppError> {
    blocking(move || dashboard_stats(&db)).await.map(Json)
}

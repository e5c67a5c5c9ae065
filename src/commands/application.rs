use crate::app::{
    application_decide, application_get, application_list, application_submit, ApplicationDto,
    ApplicationSubmitReq, ApplicationSubmitResp, OfficerDecisionReq, OfficerDecisionResp,
};
use crate::commands::{blocking, parse_body};
use crate::error::AppError;
use crate::infra::Db;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

pub async fn cmd_application_submit(
    State(db): State<Db>,
    body: Bytes,
) -> Result<Json<ApplicationSubmitResp>, AppError> {
    let req: ApplicationSubmitReq = parse_body(&body)?;
    blocking(move || application_submit(&db, req)).await.map(Json)
}

pub async fn cmd_application_list(
    State(db): State<Db>,
) -> Result<Json<Vec<ApplicationDto>>, AppError> {
    blocking(move || application_list(&db)).await.map(Json)
}

pub async fn cmd_application_get(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<ApplicationDto>, AppError> {
    blocking(move || application_get(&db, &id)).await.map(Json)
}

pub async fn cmd_officer_decision(
    State(db): State<Db>,
    body: Bytes,
) -> Result<Json<OfficerDecisionResp>, AppError> {
    let req: OfficerDecisionReq = parse_body(&body)?;
    blocking(move || application_decide(&db, req)).await.map(Json)
}

//! Application use cases and transactions.

mod application;
mod dashboard;

pub use application::{
    application_decide, application_get, application_list, application_submit, parse_findings,
    ApplicationDto, ApplicationSubmitReq, ApplicationSubmitResp, OfficerDecisionReq,
    OfficerDecisionResp,
};
pub use dashboard::{dashboard_stats, DashboardStatsDto};

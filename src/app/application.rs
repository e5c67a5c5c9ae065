//! Application use cases: submit, list, get, officer decision.

use crate::domain::{DEFAULT_APPLICATION_ID, DEFAULT_RISK};
use crate::error::AppError;
use crate::infra::Db;
use chrono::Local;
use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Same shape as SQLite's `datetime('now','localtime')`.
const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const APPLICATION_COLUMNS: &str = "id, company, gst, state, category, specs, app_type, \
     production_start, production_volume, score, risk, status, cml, assigned_cml, \
     officer_remarks, decision_date, findings, submitted_at";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSubmitReq {
    pub id: Option<String>,
    pub company: Option<String>,
    pub gst: Option<String>,
    pub state: Option<String>,
    pub category: Option<String>,
    pub specs: Option<String>,
    pub app_type: Option<String>,
    pub production_start: Option<String>,
    pub production_volume: Option<String>,
    /// Stored with whatever JSON type the caller sent.
    pub score: Option<Value>,
    pub risk: Option<String>,
    /// Stored as given; anything that is not an array reads back as `[]`.
    pub findings: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ApplicationSubmitResp {
    pub message: String,
    pub id: Option<String>,
}

/// One stored application, columns copied verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationDto {
    pub id: String,
    pub company: String,
    pub gst: Option<String>,
    pub state: Option<String>,
    pub category: Option<String>,
    pub specs: Option<String>,
    pub app_type: Option<String>,
    pub production_start: Option<String>,
    pub production_volume: Option<String>,
    pub score: Value,
    pub risk: Option<String>,
    pub status: Option<String>,
    pub cml: Option<String>,
    pub assigned_cml: Option<String>,
    pub officer_remarks: Option<String>,
    pub decision_date: Option<String>,
    pub findings: Vec<Value>,
    pub submitted_at: Option<String>,
}

impl ApplicationDto {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let text = |name: &str| row.get_ref(name).map(text_value);
        let findings = text("findings")?;
        Ok(Self {
            id: text("id")?.unwrap_or_default(),
            company: text("company")?.unwrap_or_default(),
            gst: text("gst")?,
            state: text("state")?,
            category: text("category")?,
            specs: text("specs")?,
            app_type: text("app_type")?,
            production_start: text("production_start")?,
            production_volume: text("production_volume")?,
            score: json_value(row.get_ref("score")?),
            risk: text("risk")?,
            status: text("status")?,
            cml: text("cml")?,
            assigned_cml: text("assigned_cml")?,
            officer_remarks: text("officer_remarks")?,
            decision_date: text("decision_date")?,
            findings: parse_findings(findings.as_deref()),
            submitted_at: text("submitted_at")?,
        })
    }
}

/// Text view of a cell; SQLite lets any storage class land in a TEXT column.
fn text_value(cell: ValueRef<'_>) -> Option<String> {
    match cell {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(b) | ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
    }
}

/// JSON view of a cell, keeping its storage class.
fn json_value(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        ValueRef::Text(b) | ValueRef::Blob(b) => {
            Value::String(String::from_utf8_lossy(b).into_owned())
        }
    }
}

/// Bind a JSON scalar with its natural SQLite storage class.
fn sql_value(value: Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map_or(SqlValue::Null, SqlValue::Real),
        },
        Value::String(s) => SqlValue::Text(s),
        other => SqlValue::Text(other.to_string()),
    }
}

/// Decode stored findings. Missing, malformed or non-array text yields an empty list.
pub fn parse_findings(raw: Option<&str>) -> Vec<Value> {
    match raw {
        Some(s) if !s.trim().is_empty() => serde_json::from_str(s).unwrap_or_default(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficerDecisionReq {
    pub id: Option<String>,
    pub decision: Option<String>,
    pub remarks: Option<String>,
    #[serde(rename = "assignedCML")]
    pub assigned_cml: Option<String>,
    pub decision_date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OfficerDecisionResp {
    pub message: String,
}

pub fn application_submit(
    db: &Db,
    req: ApplicationSubmitReq,
) -> Result<ApplicationSubmitResp, AppError> {
    let stored_id = req
        .id
        .clone()
        .unwrap_or_else(|| DEFAULT_APPLICATION_ID.to_string());
    let findings = req.findings.unwrap_or_else(|| Value::Array(Vec::new()));
    let findings =
        serde_json::to_string(&findings).map_err(|e| AppError::Validation(e.to_string()))?;
    let score = sql_value(req.score.unwrap_or_else(|| Value::from(0)));
    let submitted_at = Local::now().format(SUBMITTED_AT_FORMAT).to_string();

    let mut conn = db.connect()?;
    // Dropping an uncommitted transaction rolls it back.
    let tx = conn.transaction()?;
    tx.execute(
        "INSERT OR REPLACE INTO applications \
           (id, company, gst, state, category, specs, app_type, \
            production_start, production_volume, score, risk, findings, submitted_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            &stored_id,
            req.company.unwrap_or_default(),
            req.gst.unwrap_or_default(),
            req.state.unwrap_or_default(),
            req.category.unwrap_or_default(),
            req.specs.unwrap_or_default(),
            req.app_type.unwrap_or_default(),
            req.production_start.unwrap_or_default(),
            req.production_volume.unwrap_or_default(),
            score,
            req.risk.unwrap_or_else(|| DEFAULT_RISK.to_string()),
            findings,
            submitted_at,
        ],
    )?;
    tx.commit()?;

    log::info!("Application {} submitted", stored_id);
    Ok(ApplicationSubmitResp {
        message: "Application submitted!".to_string(),
        id: req.id,
    })
}

/// All applications, most recently submitted first.
pub fn application_list(db: &Db) -> Result<Vec<ApplicationDto>, AppError> {
    let conn = db.connect()?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {APPLICATION_COLUMNS} FROM applications ORDER BY submitted_at DESC"
    ))?;
    let rows = stmt.query_map([], ApplicationDto::from_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn application_get(db: &Db, id: &str) -> Result<ApplicationDto, AppError> {
    let conn = db.connect()?;
    conn.query_row(
        &format!("SELECT {APPLICATION_COLUMNS} FROM applications WHERE id = ?1"),
        [id],
        ApplicationDto::from_row,
    )
    .optional()?
    .ok_or_else(|| AppError::NotFound { id: id.to_string() })
}

/// Record an officer's decision. An unknown id updates nothing and still succeeds.
pub fn application_decide(
    db: &Db,
    req: OfficerDecisionReq,
) -> Result<OfficerDecisionResp, AppError> {
    let mut conn = db.connect()?;
    let tx = conn.transaction()?;
    let updated = tx.execute(
        "UPDATE applications \
            SET status = ?1, officer_remarks = ?2, assigned_cml = ?3, cml = ?3, decision_date = ?4 \
          WHERE id = ?5",
        params![
            req.decision,
            req.remarks.unwrap_or_default(),
            req.assigned_cml,
            req.decision_date.unwrap_or_default(),
            req.id,
        ],
    )?;
    tx.commit()?;

    let id = req.id.unwrap_or_default();
    if updated == 0 {
        log::debug!("Decision for {} matched no application", id);
    } else {
        log::info!("Decision saved for {}", id);
    }
    Ok(OfficerDecisionResp {
        message: format!("Decision saved for {}", id),
    })
}

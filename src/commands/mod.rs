//! HTTP handlers (DTO boundary).

pub mod application;
pub mod dashboard;
pub mod home;

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a JSON request body. Absent or empty payloads are `NoData`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::NoData);
    }
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::Validation(e.to_string()))?;
    if is_empty_payload(&value) {
        return Err(AppError::NoData);
    }
    serde_json::from_value(value).map_err(|e| AppError::Validation(e.to_string()))
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Run store work off the async executor.
pub(crate) async fn blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Db(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ApplicationSubmitReq;

    #[test]
    fn whitespace_body_is_no_data() {
        let err = parse_body::<ApplicationSubmitReq>(b"  \n").unwrap_err();
        assert_eq!(err.code(), "NO_DATA");
    }

    #[test]
    fn empty_object_and_null_are_no_data() {
        let bodies: [&[u8]; 4] = [b"{}", b"null", b"[]", b"\"\""];
        for body in bodies {
            let err = parse_body::<ApplicationSubmitReq>(body).unwrap_err();
            assert_eq!(err.code(), "NO_DATA");
        }
    }

    #[test]
    fn malformed_json_is_validation_error() {
        let err = parse_body::<ApplicationSubmitReq>(b"{\"id\":").unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn wrong_field_type_is_validation_error() {
        let err = parse_body::<ApplicationSubmitReq>(br#"{"company":5}"#).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn camel_case_fields_are_read() {
        let req: ApplicationSubmitReq =
            parse_body(br#"{"id":"BIS-1","appType":"new","productionStart":"2024-01"}"#).unwrap();
        assert_eq!(req.id.as_deref(), Some("BIS-1"));
        assert_eq!(req.app_type.as_deref(), Some("new"));
        assert_eq!(req.production_start.as_deref(), Some("2024-01"));
    }
}

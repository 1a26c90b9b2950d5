//! Email capture
//!
//! A single stateless endpoint that validates a signup email and appends it
//! as a row to an external spreadsheet. Spreadsheet failures are logged and
//! counted but, unless configured otherwise, never shown to the visitor.

pub mod api;
mod sheet;

use std::sync::atomic::{AtomicU64, Ordering};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use api::{CaptureState, LEGACY_SUBMIT_PATH, METRICS_PATH, SUBMIT_PATH, capture_router};
pub use sheet::{SOURCE_LABEL, SheetClient, SheetRow, WriteOutcome};

/// Errors returned by the capture endpoint
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Valid email required")]
    InvalidEmail,

    #[error("Server configuration error")]
    NotConfigured,

    /// Spreadsheet rejected the row and failures are configured to surface
    #[error("Failed to process signup")]
    Downstream(String),

    #[error("Failed to process signup")]
    Unexpected(String),
}

impl CaptureError {
    pub fn status(&self) -> StatusCode {
        match self {
            CaptureError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CaptureError::InvalidEmail => StatusCode::BAD_REQUEST,
            CaptureError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
            CaptureError::Downstream(_) => StatusCode::BAD_GATEWAY,
            CaptureError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            CaptureError::Downstream(details) | CaptureError::Unexpected(details) => {
                Some(details.clone())
            }
            _ => None,
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for CaptureError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            details: self.details(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Signup request body; only `email` is read
#[derive(Debug, PartialEq)]
pub struct SignupRequest {
    pub email: Option<String>,
}

impl SignupRequest {
    /// Parse a raw request body.
    ///
    /// Any valid JSON is accepted. Bodies without an `email` field (arrays,
    /// strings, numbers) carry no email and are rejected later as a bad
    /// request. Only unparseable JSON, a `null` body or a non-string email
    /// are processing errors.
    pub fn parse(body: &[u8]) -> Result<Self, CaptureError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| CaptureError::Unexpected(e.to_string()))?;

        let email = match value {
            Value::Null => {
                return Err(CaptureError::Unexpected(
                    "request body is null".to_string(),
                ));
            }
            Value::Object(mut fields) => fields.remove("email"),
            _ => None,
        };

        match email {
            None | Some(Value::Null) => Ok(Self { email: None }),
            Some(Value::String(email)) => Ok(Self { email: Some(email) }),
            Some(other) => Err(CaptureError::Unexpected(format!(
                "email must be a string, got {}",
                other
            ))),
        }
    }
}

/// Success response body
#[derive(Debug, Serialize, Deserialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

/// Accept any non-empty address containing `@`
pub fn validate_email(email: Option<&str>) -> Result<&str, CaptureError> {
    match email {
        Some(email) if !email.is_empty() && email.contains('@') => Ok(email),
        _ => Err(CaptureError::InvalidEmail),
    }
}

/// Request counters for the capture endpoint
#[derive(Debug, Default)]
pub struct CaptureMetrics {
    accepted: AtomicU64,
    rejected: AtomicU64,
    downstream_failures: AtomicU64,
}

/// Point-in-time copy of [`CaptureMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub accepted: u64,
    pub rejected: u64,
    pub downstream_failures: u64,
}

impl CaptureMetrics {
    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_downstream_failure(&self) {
        self.downstream_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            downstream_failures: self.downstream_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email(Some("a@b.com")).unwrap(), "a@b.com");
        assert!(validate_email(Some("not-an-email")).is_err());
        assert!(validate_email(Some("")).is_err());
        assert!(validate_email(None).is_err());
    }

    #[test]
    fn test_parse_signup_request() {
        let request = SignupRequest::parse(br#"{"email":"a@b.com","name":"x"}"#).unwrap();
        assert_eq!(request.email.as_deref(), Some("a@b.com"));

        // Valid JSON that is not an object has no email to read
        let bodies: [&[u8]; 5] = [b"[]", b"\"hello\"", b"42", b"true", br#"{"email":null}"#];
        for body in bodies {
            assert_eq!(SignupRequest::parse(body).unwrap(), SignupRequest { email: None });
        }
    }

    #[test]
    fn test_parse_signup_request_errors() {
        assert!(matches!(
            SignupRequest::parse(b"{email:"),
            Err(CaptureError::Unexpected(_))
        ));
        assert!(matches!(
            SignupRequest::parse(b"null"),
            Err(CaptureError::Unexpected(_))
        ));
        assert!(matches!(
            SignupRequest::parse(br#"{"email":42}"#),
            Err(CaptureError::Unexpected(_))
        ));
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(
            CaptureError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(CaptureError::InvalidEmail.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CaptureError::NotConfigured.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            CaptureError::Downstream("x".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            CaptureError::Unexpected("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_details() {
        let body = ErrorBody {
            error: CaptureError::InvalidEmail.to_string(),
            details: CaptureError::InvalidEmail.details(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Valid email required" }));

        let err = CaptureError::Unexpected("expected value at line 1".into());
        assert_eq!(err.to_string(), "Failed to process signup");
        assert_eq!(err.details().as_deref(), Some("expected value at line 1"));
    }

    #[test]
    fn test_metrics_snapshot() {
        let metrics = CaptureMetrics::default();
        metrics.record_accepted();
        metrics.record_accepted();
        metrics.record_rejected();
        metrics.record_downstream_failure();

        assert_eq!(
            metrics.snapshot(),
            MetricsSnapshot {
                accepted: 2,
                rejected: 1,
                downstream_failures: 1,
            }
        );
    }
}

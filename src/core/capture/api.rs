//! Email capture API endpoints
//!
//! - POST /api/submit-email - Validate and forward a signup email
//! - GET /api/submit-email/metrics - Capture counters
//!
//! The submit handler is also mounted at the old serverless function path so
//! existing page forms keep working.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::Method,
    routing::{any, get},
};
use chrono::Utc;
use std::sync::Arc;

use super::{
    CaptureError, CaptureMetrics, MetricsSnapshot, SheetClient, SheetRow, SignupRequest,
    SignupResponse, WriteOutcome, validate_email,
};
use crate::core::config::Config;

pub const SUBMIT_PATH: &str = "/api/submit-email";
pub const LEGACY_SUBMIT_PATH: &str = "/.netlify/functions/submit-email";
pub const METRICS_PATH: &str = "/api/submit-email/metrics";

/// Capture API state
#[derive(Clone)]
pub struct CaptureState {
    pub config: Arc<Config>,
    pub client: SheetClient,
    pub metrics: Arc<CaptureMetrics>,
}

impl CaptureState {
    pub fn new(config: Config, client: SheetClient) -> Self {
        Self {
            config: Arc::new(config),
            client,
            metrics: Arc::new(CaptureMetrics::default()),
        }
    }
}

/// Create the capture API router
pub fn capture_router(state: CaptureState) -> Router {
    Router::new()
        .route(SUBMIT_PATH, any(submit_email_handler))
        .route(LEGACY_SUBMIT_PATH, any(submit_email_handler))
        .route(METRICS_PATH, get(metrics_handler))
        .with_state(state)
}

/// ANY /api/submit-email
/// Only POST is accepted; other methods get a JSON 405.
async fn submit_email_handler(
    State(state): State<CaptureState>,
    method: Method,
    body: Bytes,
) -> Result<Json<SignupResponse>, CaptureError> {
    let result = submit_email(&state, &method, &body).await;

    match &result {
        Ok(_) => state.metrics.record_accepted(),
        Err(err) => {
            state.metrics.record_rejected();
            tracing::debug!("Signup rejected: {}", err);
        }
    }

    result.map(Json)
}

async fn submit_email(
    state: &CaptureState,
    method: &Method,
    body: &[u8],
) -> Result<SignupResponse, CaptureError> {
    if method != Method::POST {
        return Err(CaptureError::MethodNotAllowed);
    }

    let request = SignupRequest::parse(body).inspect_err(|e| {
        tracing::error!("Error processing email signup: {:?}", e);
    })?;

    let email = validate_email(request.email.as_deref())?;

    let Some(target) = state.config.capture_target() else {
        tracing::error!("Missing capture environment variables");
        return Err(CaptureError::NotConfigured);
    };

    let row = SheetRow::new(email, Utc::now());

    match state.client.append_row(&target, &row).await {
        Ok(WriteOutcome::Accepted) => {
            tracing::info!("Signup row appended");
        }
        Ok(WriteOutcome::Rejected { status, body }) => {
            state.metrics.record_downstream_failure();
            tracing::error!(status, "Spreadsheet API error: {}", body);

            if state.config.surface_capture_failures {
                return Err(CaptureError::Downstream(format!(
                    "spreadsheet API returned status {}",
                    status
                )));
            }
        }
        Err(e) => {
            tracing::error!("Error processing email signup: {}", e);
            return Err(CaptureError::Unexpected(e.to_string()));
        }
    }

    Ok(SignupResponse {
        success: true,
        message: "Email captured successfully".to_string(),
    })
}

/// GET /api/submit-email/metrics
async fn metrics_handler(State(state): State<CaptureState>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::capture::{ErrorBody, SOURCE_LABEL};
    use axum::{
        body::Body,
        extract::Path,
        http::{HeaderMap, Request, StatusCode},
        response::Response,
        routing::post,
    };
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Rows received by the fake spreadsheet: (file id, authorization, row)
    type Received = Arc<Mutex<Vec<(String, Option<String>, SheetRow)>>>;

    /// Start a local spreadsheet API answering every row write with `status`
    async fn spawn_sheet(status: StatusCode) -> (String, Received) {
        let received: Received = Arc::default();
        let sink = received.clone();

        let app = Router::new().route(
            "/api/2.0/files/{id}/rows",
            post(
                move |Path(id): Path<String>, headers: HeaderMap, Json(row): Json<SheetRow>| {
                    let sink = sink.clone();
                    async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(String::from);
                        sink.lock().unwrap().push((id, auth, row));
                        (status, "sheet says hi")
                    }
                },
            ),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), received)
    }

    fn config_for(api_url: &str) -> Config {
        Config {
            capture_api_url: Some(api_url.to_string()),
            capture_api_token: Some("secret-token".to_string()),
            capture_file_id: Some("sheet-7".to_string()),
            ..Config::default()
        }
    }

    fn state_with(config: Config) -> CaptureState {
        CaptureState::new(config, SheetClient::default())
    }

    async fn send(state: &CaptureState, method: Method, body: &str) -> Response {
        capture_router(state.clone())
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(SUBMIT_PATH)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let state = state_with(Config::default());
        let response = send(&state, Method::GET, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Method not allowed");
    }

    #[tokio::test]
    async fn test_put_is_method_not_allowed() {
        let state = state_with(config_for("http://127.0.0.1:9"));
        let response = send(&state, Method::PUT, "").await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_invalid_email_is_bad_request_without_config() {
        let state = state_with(Config::default());
        let response = send(&state, Method::POST, r#"{"email":"not-an-email"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Valid email required");
    }

    #[tokio::test]
    async fn test_invalid_email_is_bad_request_with_config() {
        let (url, received) = spawn_sheet(StatusCode::OK).await;
        let state = state_with(config_for(&url));
        let response = send(&state, Method::POST, r#"{"email":"not-an-email"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_email_is_bad_request() {
        let state = state_with(Config::default());
        let response = send(&state, Method::POST, r#"{"name":"someone"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_object_json_is_bad_request() {
        let state = state_with(Config::default());

        for body in ["[]", r#""hello""#, "42"] {
            let response = send(&state, Method::POST, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
            let error: ErrorBody = json_body(response).await;
            assert_eq!(error.error, "Valid email required");
        }
    }

    #[tokio::test]
    async fn test_non_string_email_is_server_error() {
        let state = state_with(Config::default());
        let response = send(&state, Method::POST, r#"{"email":42}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Failed to process signup");
    }

    #[tokio::test]
    async fn test_malformed_json_is_server_error_with_details() {
        let state = state_with(Config::default());
        let response = send(&state, Method::POST, "{email:").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Failed to process signup");
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_missing_config_is_server_error() {
        let mut config = config_for("http://127.0.0.1:9");
        config.capture_api_token = None;
        let state = state_with(config);
        let response = send(&state, Method::POST, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Server configuration error");
        assert!(body.details.is_none());
    }

    #[tokio::test]
    async fn test_successful_capture() {
        let (url, received) = spawn_sheet(StatusCode::OK).await;
        let state = state_with(config_for(&url));
        let response = send(&state, Method::POST, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: SignupResponse = json_body(response).await;
        assert!(body.success);
        assert_eq!(body.message, "Email captured successfully");

        let rows = received.lock().unwrap();
        assert_eq!(rows.len(), 1);
        let (file_id, auth, row) = &rows[0];
        assert_eq!(file_id, "sheet-7");
        assert_eq!(auth.as_deref(), Some("Bearer secret-token"));
        assert_eq!(row.email, "a@b.com");
        assert_eq!(row.source, SOURCE_LABEL);
        assert!(row.timestamp.ends_with('Z'));

        assert_eq!(state.metrics.snapshot().accepted, 1);
    }

    #[tokio::test]
    async fn test_downstream_failure_is_swallowed() {
        let (url, received) = spawn_sheet(StatusCode::INTERNAL_SERVER_ERROR).await;
        let state = state_with(config_for(&url));
        let response = send(&state, Method::POST, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: SignupResponse = json_body(response).await;
        assert!(body.success);
        assert_eq!(received.lock().unwrap().len(), 1);

        let metrics = state.metrics.snapshot();
        assert_eq!(metrics.downstream_failures, 1);
        assert_eq!(metrics.accepted, 1);
    }

    #[tokio::test]
    async fn test_downstream_failure_can_be_surfaced() {
        let (url, _received) = spawn_sheet(StatusCode::FORBIDDEN).await;
        let mut config = config_for(&url);
        config.surface_capture_failures = true;
        let state = state_with(config);
        let response = send(&state, Method::POST, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: ErrorBody = json_body(response).await;
        assert!(body.details.unwrap().contains("403"));
        assert_eq!(state.metrics.snapshot().downstream_failures, 1);
    }

    #[tokio::test]
    async fn test_unreachable_sheet_is_server_error() {
        // Grab a free port, then close it so the connection is refused
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let state = state_with(config_for(&format!("http://{}", addr)));
        let response = send(&state, Method::POST, r#"{"email":"a@b.com"}"#).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = json_body(response).await;
        assert_eq!(body.error, "Failed to process signup");
        assert!(body.details.is_some());
    }

    #[tokio::test]
    async fn test_legacy_path_is_mounted() {
        let state = state_with(Config::default());
        let response = capture_router(state)
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(LEGACY_SUBMIT_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let state = state_with(Config::default());
        send(&state, Method::GET, "").await;
        send(&state, Method::POST, r#"{"email":"nope"}"#).await;

        let response = capture_router(state)
            .oneshot(
                Request::builder()
                    .uri(METRICS_PATH)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let snapshot: MetricsSnapshot = json_body(response).await;
        assert_eq!(snapshot.rejected, 2);
        assert_eq!(snapshot.accepted, 0);
    }
}

//! Spreadsheet API client

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::CaptureTarget;

/// Source column written with every captured row
pub const SOURCE_LABEL: &str = "Digital Safety Playbook Signup";

/// One spreadsheet row: Email | Timestamp | Source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub email: String,
    pub timestamp: String,
    pub source: String,
}

impl SheetRow {
    pub fn new(email: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: SOURCE_LABEL.to_string(),
        }
    }
}

/// Result of a row write that produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Accepted,
    Rejected { status: u16, body: String },
}

/// Thin wrapper around a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct SheetClient {
    http: reqwest::Client,
}

impl SheetClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// POST `row` to the target's rows endpoint.
    ///
    /// Transport failures are errors; any HTTP response, including an error
    /// status, is an outcome.
    pub async fn append_row(
        &self,
        target: &CaptureTarget,
        row: &SheetRow,
    ) -> Result<WriteOutcome, reqwest::Error> {
        let response = self
            .http
            .post(target.rows_url())
            .bearer_auth(&target.token)
            .json(row)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(WriteOutcome::Accepted);
        }

        let body = response.text().await.unwrap_or_default();
        Ok(WriteOutcome::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

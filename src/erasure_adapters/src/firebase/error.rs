use reqwest::{Response, StatusCode};
use serde::Deserialize;

/// Error returned by a Google REST API, decoded from its JSON envelope:
/// `{"error": {"code": 400, "message": "USER_NOT_FOUND", "status": "INVALID_ARGUMENT"}}`
#[derive(Debug, Clone)]
pub struct GoogleApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GoogleApiError {
    /// Consume a non-success response. Falls back to the raw body, then the
    /// status line, when the envelope is missing.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_parts(status, &body)
    }

    pub fn from_parts(status: StatusCode, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => status.to_string(),
        };
        Self { status, message }
    }

    /// First token of the message, e.g. `INVALID_ID` in `"INVALID_ID : bad uid"`.
    pub fn reason(&self) -> &str {
        self.message
            .split([' ', ':'])
            .next()
            .unwrap_or_default()
    }

    pub fn is_permission_error(&self) -> bool {
        matches!(
            self.status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        )
    }

    pub fn is_transient(&self) -> bool {
        self.status.is_server_error() || self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

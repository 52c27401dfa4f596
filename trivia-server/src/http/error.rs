//! API error types with IntoResponse
//!
//! Every failure leaves the server as one of three kinds, rendered as
//! `{"success": false, "error": <status>, "message": <text>}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed id or missing quiz fields (400)
    BadRequest { reason: String },

    /// Nothing where something was expected (404)
    NotFound { reason: String },

    /// Missing fields on create, or the store refused the insert (422)
    Unprocessable { reason: String },
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::BadRequest {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn unprocessable(reason: impl Into<String>) -> Self {
        Self::Unprocessable {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message; the reason is only logged
    pub fn message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad request",
            Self::NotFound { .. } => "resource not found",
            Self::Unprocessable { .. } => "Unprocessable entity",
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::BadRequest { reason }
            | Self::NotFound { reason }
            | Self::Unprocessable { reason } => reason,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), reason = %self.reason(), "request rejected");

        let body = json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.message()
        });

        (status, Json(body)).into_response()
    }
}

/// Classify store failures at the call site.
///
/// `DbError::NotFound` is always a 404. Anything else becomes the kind the
/// call site names, and the underlying error is logged here because the
/// client never sees it.
pub trait DbResultExt<T> {
    fn or_not_found(self, action: &'static str) -> Result<T, ApiError>;
    fn or_bad_request(self, action: &'static str) -> Result<T, ApiError>;
    fn or_unprocessable(self, action: &'static str) -> Result<T, ApiError>;
}

impl<T> DbResultExt<T> for Result<T, DbError> {
    fn or_not_found(self, action: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| classify(e, action, |r| ApiError::not_found(r)))
    }

    fn or_bad_request(self, action: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| classify(e, action, |r| ApiError::bad_request(r)))
    }

    fn or_unprocessable(self, action: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| classify(e, action, |r| ApiError::unprocessable(r)))
    }
}

fn classify(err: DbError, action: &'static str, kind: fn(String) -> ApiError) -> ApiError {
    match &err {
        DbError::NotFound { .. } => ApiError::not_found(err.to_string()),
        DbError::Rejected { .. } => {
            tracing::warn!(action, error = %err, "store rejected request");
            kind(err.to_string())
        }
        DbError::Sqlx(_) => {
            tracing::error!(action, error = %err, "store failure");
            kind(format!("{} failed", action))
        }
    }
}

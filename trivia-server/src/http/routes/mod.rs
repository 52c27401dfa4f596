//! Route handlers organized by resource

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::http::Uri;

use crate::http::error::ApiError;

/// Unknown paths get the standard JSON 404
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {}", uri.path()))
}

//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use trivia_core::{parse_id, CategoryId, QuestionId};

use super::error::ApiError;

/// Question id from the path; a non-integer segment is a bad request
pub struct QuestionIdPath(pub QuestionId);

impl<S> FromRequestParts<S> for QuestionIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_segment(parts, state)
            .await
            .map(Self)
            .map_err(ApiError::bad_request)
    }
}

/// Category id from the path; a non-integer segment can't name a category,
/// so it is treated as not found
pub struct CategoryIdPath(pub CategoryId);

impl<S> FromRequestParts<S> for CategoryIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        id_segment(parts, state)
            .await
            .map(Self)
            .map_err(ApiError::not_found)
    }
}

async fn id_segment<S>(parts: &mut Parts, state: &S) -> Result<i32, String>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|e| e.body_text())?;

    parse_id(&raw).map_err(|e| e.to_string())
}

//! Quiz endpoint - serves one unseen question per call

use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{pick_unserved, LooseInt, Question, QuestionId, QuizCategory};

use crate::http::error::{ApiError, DbResultExt};
use crate::http::server::AppState;

/// Quiz session context, resent by the client on every call
#[derive(Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<LooseInt>>,
    pub quiz_category: Option<QuizCategoryBody>,
}

/// `{"id": 1, "type": "Science"}`; `id` 0 means every category
#[derive(Deserialize)]
pub struct QuizCategoryBody {
    pub id: Option<LooseInt>,
}

impl QuizRequest {
    fn into_session(self) -> Result<(QuizCategory, HashSet<QuestionId>), ApiError> {
        let previous = self
            .previous_questions
            .ok_or_else(|| ApiError::bad_request("previous_questions missing"))?;
        let raw = self
            .quiz_category
            .and_then(|c| c.id)
            .ok_or_else(|| ApiError::bad_request("quiz_category missing"))?;

        let category =
            QuizCategory::from_raw(raw.0).map_err(|e| ApiError::bad_request(e.to_string()))?;

        // Ids that can't be store ids can't match anything in the pool
        let previous = previous
            .into_iter()
            .filter_map(|id| id.to_id().ok())
            .collect();

        Ok((category, previous))
    }
}

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
}

/// POST /quizzes
async fn next_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let (category, previous) = req.into_session()?;

    let pool = state
        .store
        .quiz_pool(category)
        .await
        .or_not_found("load quiz pool")?;

    let question = pick_unserved(&pool, &previous).cloned();
    match &question {
        Some(q) => tracing::debug!(%category, id = q.id, served = previous.len(), "quiz question picked"),
        None => tracing::debug!(%category, pool = pool.len(), "quiz exhausted"),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}

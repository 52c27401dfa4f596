//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use trivia_core::{LooseInt, NewQuestion, PageParams, Pagination, Question, QuestionId};

use super::categories::{category_map, CategoryMap, QuestionListResponse};
use crate::http::error::{ApiError, DbResultExt};
use crate::http::extractors::QuestionIdPath;
use crate::http::server::AppState;

/// Create question request; presence is checked by the handler
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<LooseInt>,
    pub category: Option<LooseInt>,
}

impl CreateQuestionRequest {
    fn into_new_question(self) -> Result<NewQuestion, ApiError> {
        let question = self.question.ok_or_else(|| missing("question"))?;
        let answer = self.answer.ok_or_else(|| missing("answer"))?;
        let difficulty = self.difficulty.ok_or_else(|| missing("difficulty"))?;
        let category = self.category.ok_or_else(|| missing("category"))?;

        Ok(NewQuestion {
            question,
            answer,
            difficulty: difficulty
                .to_id()
                .map_err(|e| ApiError::unprocessable(e.to_string()))?,
            category: category
                .to_id()
                .map_err(|e| ApiError::unprocessable(e.to_string()))?,
        })
    }
}

fn missing(field: &str) -> ApiError {
    ApiError::unprocessable(format!("missing field '{}'", field))
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: QuestionId,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: QuestionId,
}

/// GET /questions?page=N - ten questions per page
async fn list_questions(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let page = Pagination::from(params);
    let questions = state.store.questions().await.or_not_found("list questions")?;

    let current = page.slice(&questions);
    if current.is_empty() {
        return Err(ApiError::not_found(format!("page {} is empty", page.page)));
    }

    let categories = state.store.categories().await.or_not_found("list categories")?;

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(categories),
    }))
}

/// POST /questions
async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::unprocessable(e.body_text()))?;
    let new = req.into_new_question()?;

    let question = state
        .store
        .insert_question(new)
        .await
        .or_unprocessable("insert question")?;
    tracing::info!(id = question.id, category = question.category, "question created");

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    state
        .store
        .delete_question(id)
        .await
        .or_bad_request("delete question")?;
    tracing::info!(id, "question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search
///
/// A missing or empty `searchTerm` is reported as not found.
async fn search_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let Json(req) = payload.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let term = req
        .search_term
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::not_found("searchTerm missing"))?;

    let questions = state
        .store
        .search_questions(&term)
        .await
        .or_not_found("search questions")?;

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateQuestionRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn complete_request_converts() {
        let new = request(json!({
            "question": "q",
            "answer": "a",
            "difficulty": 2,
            "category": "3"
        }))
        .into_new_question()
        .unwrap();
        assert_eq!(new.difficulty, 2);
        assert_eq!(new.category, 3);
    }

    #[test]
    fn missing_difficulty_is_unprocessable() {
        let err = request(json!({"question": "q", "answer": "a", "category": 1}))
            .into_new_question()
            .unwrap_err();
        assert!(matches!(err, ApiError::Unprocessable { .. }));
        assert_eq!(err.reason(), "missing field 'difficulty'");
    }

    #[test]
    fn null_counts_as_missing() {
        let err = request(json!({
            "question": "q",
            "answer": null,
            "difficulty": 1,
            "category": 1
        }))
        .into_new_question()
        .unwrap_err();
        assert_eq!(err.reason(), "missing field 'answer'");
    }
}

//! Category endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use trivia_core::{Category, CategoryId, Question};

use crate::http::error::{ApiError, DbResultExt};
use crate::http::extractors::CategoryIdPath;
use crate::http::server::AppState;

/// `{id: label}`, serialized with string keys
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub(crate) fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// Questions filtered by category or search term
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

/// GET /categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = state.store.categories().await.or_not_found("list categories")?;
    if categories.is_empty() {
        return Err(ApiError::not_found("no categories"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// GET /categories/{id}/questions
async fn questions_for_category(
    State(state): State<Arc<AppState>>,
    CategoryIdPath(id): CategoryIdPath,
) -> Result<Json<QuestionListResponse>, ApiError> {
    state
        .store
        .category(id)
        .await
        .or_not_found("look up category")?
        .ok_or_else(|| ApiError::not_found(format!("category {} does not exist", id)))?;

    let questions = state
        .store
        .questions_in_category(id)
        .await
        .or_not_found("list category questions")?;

    Ok(Json(QuestionListResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: Some(id),
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_for_category))
}

//! In-process store
//!
//! Mirrors the PostgreSQL behavior that handlers depend on: ids are assigned
//! monotonically and never reused, lists are ordered by id, and inserting a
//! question for an unknown category is rejected.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use trivia_core::{search, Category, CategoryId, NewQuestion, Question, QuestionId};

use super::TriviaStore;
use crate::db::DbError;

#[derive(Default)]
struct Tables {
    categories: BTreeMap<CategoryId, Category>,
    questions: BTreeMap<QuestionId, Question>,
    last_category_id: CategoryId,
    last_question_id: QuestionId,
}

/// Store that keeps everything in memory
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, DbError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == id)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        let all = self.questions().await?;
        Ok(search(&all, term).into_iter().cloned().collect())
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;
        if !tables.categories.contains_key(&new.category) {
            return Err(DbError::rejected(format!(
                "category {} does not exist",
                new.category
            )));
        }

        tables.last_question_id += 1;
        let question = new.with_id(tables.last_question_id);
        tables.questions.insert(question.id, question.clone());
        Ok(question)
    }

    async fn insert_category(&self, label: &str) -> Result<Category, DbError> {
        let mut tables = self.tables.write().await;
        tables.last_category_id += 1;
        let category = Category {
            id: tables.last_category_id,
            label: label.to_owned(),
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError> {
        self.tables
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("question", id))
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

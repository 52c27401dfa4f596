use async_trait::async_trait;
use sqlx::PgPool;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId};

use super::TriviaStore;
use crate::db::{CategoryRepo, DbError, QuestionRepo};

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: CategoryId) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn questions(&self) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list().await
    }

    async fn questions_in_category(&self, id: CategoryId) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list_for_category(id).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).search(term).await
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn insert_category(&self, label: &str) -> Result<Category, DbError> {
        CategoryRepo::new(&self.pool).insert(label).await
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_url, migrations};

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = connect_url(&url).await.expect("connect failed");
        migrations::run(&pool).await.expect("migrations failed");
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_search_delete() {
        let store = store().await;
        let category = store.insert_category("Science").await.unwrap();

        let created = store
            .insert_question(NewQuestion {
                question: "Which 100% natural element has symbol Au?".into(),
                answer: "Gold".into(),
                category: category.id,
                difficulty: 2,
            })
            .await
            .unwrap();

        let hits = store.search_questions("100% NATURAL").await.unwrap();
        assert!(hits.iter().any(|q| q.id == created.id));

        // Wildcards in the term are literal
        let hits = store.search_questions("1_0%").await.unwrap();
        assert!(hits.iter().all(|q| q.id != created.id));

        store.delete_question(created.id).await.unwrap();
        let err = store.delete_question(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_category_rejected() {
        let store = store().await;
        let err = store
            .insert_question(NewQuestion {
                question: "q".into(),
                answer: "a".into(),
                category: i32::MAX,
                difficulty: 1,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Rejected { .. }));
    }
}

//! Category repository

use sqlx::{FromRow, PgPool};
use trivia_core::{Category, CategoryId};

use crate::db::DbError;

/// Category record from database
#[derive(Debug, Clone, FromRow)]
struct CategoryRow {
    id: i32,
    #[sqlx(rename = "type")]
    label: String,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            label: row.label,
        }
    }
}

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories ORDER BY id"#)
                .fetch_all(self.pool)
                .await?;

        Ok(rows.into_iter().map(Category::from).collect())
    }

    /// A single category, if it exists.
    pub async fn get(&self, id: CategoryId) -> Result<Option<Category>, DbError> {
        let row: Option<CategoryRow> =
            sqlx::query_as(r#"SELECT id, "type" FROM categories WHERE id = $1"#)
                .bind(id)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Category::from))
    }

    /// Insert a category, returning it with its assigned id.
    pub async fn insert(&self, label: &str) -> Result<Category, DbError> {
        let row: CategoryRow =
            sqlx::query_as(r#"INSERT INTO categories ("type") VALUES ($1) RETURNING id, "type""#)
                .bind(label)
                .fetch_one(self.pool)
                .await
                .map_err(DbError::from_write)?;

        Ok(row.into())
    }
}

use color_eyre::Result;

use super::models::CategoryRow;
use super::Db;

impl Db {
    pub async fn get_all_categories(&self) -> Result<Vec<CategoryRow>> {
        let categories = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, type FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<CategoryRow>> {
        let category =
            sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(category)
    }

    pub async fn insert_category(&self, kind: &str) -> Result<i64> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO categories (type) VALUES ($1) RETURNING id")
                .bind(kind)
                .fetch_one(&self.pool)
                .await?;

        Ok(id)
    }

    /// Seed the classic trivia categories into an empty store. A store that
    /// already has categories is left untouched.
    pub async fn seed_default_categories(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await?;
        if count > 0 {
            return Ok(());
        }

        for kind in crate::names::DEFAULT_CATEGORIES {
            self.insert_category(kind).await?;
        }

        tracing::info!("seeded {} default categories", crate::names::DEFAULT_CATEGORIES.len());
        Ok(())
    }
}

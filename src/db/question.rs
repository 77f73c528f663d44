use color_eyre::Result;

use super::models::{NewQuestion, QuestionRow};
use super::Db;

impl Db {
    /// One ordered page plus the total count of the whole store. The total is
    /// what pagination bounds are checked against, not the page length.
    pub async fn get_questions_ordered(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<QuestionRow>, i64)> {
        let total = self.count_questions().await?;

        let questions = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok((questions, total))
    }

    pub async fn search_questions_by_text(&self, term: &str) -> Result<Vec<QuestionRow>> {
        let questions = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE LOWER(question) LIKE '%' || LOWER($1) || '%'
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_questions_by_category(&self, category_id: i64) -> Result<Vec<QuestionRow>> {
        let questions = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, difficulty, category
            FROM questions
            WHERE category = $1
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_all_questions(&self) -> Result<Vec<QuestionRow>> {
        let questions = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, answer, difficulty, category FROM questions",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<QuestionRow>> {
        let question = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question, answer, difficulty, category FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    pub async fn insert_question(&self, draft: &NewQuestion) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&draft.question)
        .bind(&draft.answer)
        .bind(draft.difficulty)
        .bind(draft.category)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!("new question created with id: {id}");
        Ok(id)
    }

    /// Returns whether a row was actually removed.
    pub async fn delete_question(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected() > 0;
        if removed {
            tracing::info!("question deleted with id: {id}");
        }
        Ok(removed)
    }

    pub async fn count_questions(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

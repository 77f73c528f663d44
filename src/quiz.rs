//! Quiz-play selection: one unseen question at a time.

use rand::seq::SliceRandom;

use crate::catalog::{Catalog, CatalogError, QuizScope};
use crate::db::QuestionRow;

/// Stateless between calls: the caller carries the set of already-shown
/// question ids and grows it by one after each successful pick.
#[derive(Clone)]
pub struct QuizSelector {
    catalog: Catalog,
}

impl QuizSelector {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Picks uniformly at random among the scoped questions not yet shown.
    /// Exhaustion is `Ok(None)`, never an error: quiz sessions end
    /// gracefully.
    pub async fn next_question(
        &self,
        previous_questions: &[i64],
        scope: QuizScope,
    ) -> Result<Option<QuestionRow>, CatalogError> {
        let candidates = self.catalog.questions_in_scope(scope).await?;

        let eligible: Vec<QuestionRow> = candidates
            .into_iter()
            .filter(|q| !previous_questions.contains(&q.id))
            .collect();

        Ok(eligible.choose(&mut rand::thread_rng()).cloned())
    }
}

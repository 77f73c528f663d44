//! Read/write access patterns over the question bank: ordered pagination,
//! substring search, category filtering, create and delete.

use std::collections::BTreeMap;

use crate::db::{Db, NewQuestion, QuestionRow};
use crate::names;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Page beyond the data, or a category id that does not exist.
    #[error("resource not found")]
    NotFound,
    /// Deleting a question id that does not exist. Deliberately distinct
    /// from `NotFound` for wire compatibility.
    #[error("request cannot be processed")]
    Unprocessable,
    #[error(transparent)]
    Internal(#[from] color_eyre::Report),
}

/// Scope for quiz play: the whole bank, or one category. An unknown category
/// id is a valid scope that simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    All,
    Category(i64),
}

#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<QuestionRow>,
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Debug)]
pub struct SearchResults {
    pub questions: Vec<QuestionRow>,
    pub total_questions: i64,
}

#[derive(Debug)]
pub struct CategoryQuestions {
    pub questions: Vec<QuestionRow>,
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Debug)]
pub struct CreatedQuestion {
    pub created: i64,
    pub total_questions: i64,
}

#[derive(Debug)]
pub struct DeletedQuestion {
    pub deleted_id: i64,
    pub total_questions: i64,
}

#[derive(Clone)]
pub struct Catalog {
    db: Db,
}

impl Catalog {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Full category mapping, id to type, in id order. An empty store yields
    /// an empty mapping, never an error.
    pub async fn list_categories(&self) -> Result<BTreeMap<i64, String>, CatalogError> {
        let categories = self.db.get_all_categories().await?;
        Ok(categories.into_iter().map(|c| (c.id, c.kind)).collect())
    }

    /// One fixed-size page of the bank in ascending id order, with the total
    /// count of the whole store and the category mapping. A page whose offset
    /// is at or past the total is `NotFound`, never a silent empty page; page
    /// 1 of an empty store is out of range too.
    pub async fn list_questions(&self, page: i64) -> Result<QuestionPage, CatalogError> {
        if page < names::DEFAULT_PAGE {
            return Err(CatalogError::NotFound);
        }

        let offset = (page - 1) * names::QUESTIONS_PER_PAGE;
        let (questions, total) = self
            .db
            .get_questions_ordered(offset, names::QUESTIONS_PER_PAGE)
            .await?;

        if offset >= total {
            return Err(CatalogError::NotFound);
        }

        let categories = self.list_categories().await?;

        Ok(QuestionPage {
            questions,
            total_questions: total,
            categories,
        })
    }

    /// Case-insensitive substring search over question text. The empty term
    /// matches everything; zero matches is a successful, empty result.
    pub async fn search_questions(&self, term: &str) -> Result<SearchResults, CatalogError> {
        let questions = self.db.search_questions_by_text(term).await?;
        let total_questions = questions.len() as i64;

        Ok(SearchResults {
            questions,
            total_questions,
        })
    }

    pub async fn questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<CategoryQuestions, CatalogError> {
        let category = self
            .db
            .get_category(category_id)
            .await?
            .ok_or(CatalogError::NotFound)?;

        let questions = self.db.get_questions_by_category(category_id).await?;
        let total_questions = questions.len() as i64;

        Ok(CategoryQuestions {
            questions,
            total_questions,
            current_category: category.kind,
        })
    }

    /// No field validation: nulls and empty strings are inserted as given.
    pub async fn create_question(
        &self,
        draft: NewQuestion,
    ) -> Result<CreatedQuestion, CatalogError> {
        let created = self.db.insert_question(&draft).await?;
        let total_questions = self.db.count_questions().await?;

        Ok(CreatedQuestion {
            created,
            total_questions,
        })
    }

    /// Absence at delete time is `Unprocessable`, not `NotFound`.
    pub async fn delete_question(&self, id: i64) -> Result<DeletedQuestion, CatalogError> {
        let removed = self.db.delete_question(id).await?;
        if !removed {
            return Err(CatalogError::Unprocessable);
        }

        let total_questions = self.db.count_questions().await?;

        Ok(DeletedQuestion {
            deleted_id: id,
            total_questions,
        })
    }

    /// The filtering capability quiz selection builds on. Unlike
    /// `questions_by_category`, an unknown category is not an error here: it
    /// is an empty candidate set.
    pub async fn questions_in_scope(
        &self,
        scope: QuizScope,
    ) -> Result<Vec<QuestionRow>, CatalogError> {
        let questions = match scope {
            QuizScope::All => self.db.get_all_questions().await?,
            QuizScope::Category(id) => self.db.get_questions_by_category(id).await?,
        };

        Ok(questions)
    }
}

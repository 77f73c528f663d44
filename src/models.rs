// Wire-facing payload types. Field names and shapes are part of the public
// API contract; clients depend on them as-is.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::QuestionRow;

#[derive(Serialize)]
pub struct QuestionPayload {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
}

impl From<QuestionRow> for QuestionPayload {
    fn from(row: QuestionRow) -> Self {
        Self {
            id: row.id,
            question: row.question,
            answer: row.answer,
            category: row.category,
            difficulty: row.difficulty,
        }
    }
}

pub fn format_questions(rows: Vec<QuestionRow>) -> Vec<QuestionPayload> {
    rows.into_iter().map(QuestionPayload::from).collect()
}

#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: i64,
    pub categories: BTreeMap<i64, String>,
    pub current_category: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<QuestionPayload>,
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i64,
    pub total_questions: i64,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted_id: i64,
    pub total_questions: i64,
}

/// `question` is null once every eligible question has been shown - the
/// client reads that as the end of the quiz.
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<QuestionPayload>,
}

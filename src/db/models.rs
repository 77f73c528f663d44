// Database model structs

#[derive(Clone, sqlx::FromRow)]
pub struct CategoryRow {
    pub id: i64,
    #[sqlx(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct QuestionRow {
    pub id: i64,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

/// Field set for an insert. Everything is optional on purpose: creation
/// accepts whatever the caller sends, nulls included.
#[derive(Debug, Default)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i64>,
    pub category: Option<i64>,
}

// Pagination
pub const QUESTIONS_PER_PAGE: i64 = 10;
pub const DEFAULT_PAGE: i64 = 1;

/// Wire sentinel for "play across all categories".
pub const ALL_CATEGORIES_ID: i64 = 0;

// Categories seeded into an empty store so a fresh deployment is usable.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

mod common;

use common::create_test_db;
use triviabank::catalog::{Catalog, CatalogError};
use triviabank::db::NewQuestion;

fn draft(text: &str, category: Option<i64>) -> NewQuestion {
    NewQuestion {
        question: Some(text.to_string()),
        answer: Some(format!("answer to {text}")),
        difficulty: Some(1),
        category,
    }
}

async fn seed_questions(catalog: &Catalog, n: usize, category: Option<i64>) -> Vec<i64> {
    let mut ids = Vec::new();
    for i in 0..n {
        let created = catalog
            .create_question(draft(&format!("Question {}", i + 1), category))
            .await
            .unwrap();
        ids.push(created.created);
    }
    ids
}

#[tokio::test]
async fn test_list_categories_ordered_by_id() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db.clone());

    let science = db.insert_category("Science").await.unwrap();
    let art = db.insert_category("Art").await.unwrap();
    let geography = db.insert_category("Geography").await.unwrap();

    let categories = catalog.list_categories().await.unwrap();
    assert_eq!(categories.len(), 3);
    assert_eq!(categories[&science], "Science");
    assert_eq!(categories[&art], "Art");
    assert_eq!(categories[&geography], "Geography");

    let keys: Vec<i64> = categories.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted, "category mapping must iterate in id order");
}

#[tokio::test]
async fn test_list_categories_empty_store_is_empty_mapping() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let categories = catalog.list_categories().await.unwrap();
    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_pagination_slices_in_id_order() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);
    let ids = seed_questions(&catalog, 25, None).await;

    let page1 = catalog.list_questions(1).await.unwrap();
    assert_eq!(page1.questions.len(), 10);
    assert_eq!(page1.total_questions, 25);
    let page1_ids: Vec<i64> = page1.questions.iter().map(|q| q.id).collect();
    assert_eq!(page1_ids, ids[..10].to_vec(), "page 1 is the first 10 ids ascending");

    let page2 = catalog.list_questions(2).await.unwrap();
    assert_eq!(page2.questions.len(), 10);
    assert_eq!(page2.total_questions, 25);
    let page2_ids: Vec<i64> = page2.questions.iter().map(|q| q.id).collect();
    assert_eq!(page2_ids, ids[10..20].to_vec());
    assert!(
        page1_ids.iter().all(|id| !page2_ids.contains(id)),
        "pages must not overlap"
    );

    let page3 = catalog.list_questions(3).await.unwrap();
    assert_eq!(page3.questions.len(), 5, "last page holds the remainder");
}

#[tokio::test]
async fn test_page_past_end_is_not_found() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);
    seed_questions(&catalog, 25, None).await;

    let err = catalog.list_questions(4).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound), "got {err:?}");

    let err = catalog.list_questions(9999).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn test_page_one_of_empty_store_is_not_found() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let err = catalog.list_questions(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn test_non_positive_page_is_not_found() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);
    seed_questions(&catalog, 3, None).await;

    for page in [0, -1] {
        let err = catalog.list_questions(page).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound), "page {page} got {err:?}");
    }
}

#[tokio::test]
async fn test_search_empty_term_matches_everything() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);
    seed_questions(&catalog, 12, None).await;

    let results = catalog.search_questions("").await.unwrap();
    assert_eq!(results.total_questions, 12);
    assert_eq!(results.questions.len(), 12);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let texts = [
        "Whose autobiography is entitled I Know Why the Caged Bird Sings?",
        "What movie earned Tom Hanks his third Oscar nomination?",
        "What is the official Title of the monarch of Japan?",
        "What boxer's original name is Cassius Clay?",
    ];
    for text in texts {
        catalog.create_question(draft(text, None)).await.unwrap();
    }

    let results = catalog.search_questions("title").await.unwrap();

    let expected = texts
        .iter()
        .filter(|t| t.to_lowercase().contains("title"))
        .count() as i64;
    assert_eq!(results.total_questions, expected);
    assert_eq!(results.questions.len(), expected as usize);
    assert!(results
        .questions
        .iter()
        .all(|q| q.question.as_deref().unwrap().to_lowercase().contains("title")));
}

#[tokio::test]
async fn test_search_zero_matches_is_success() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);
    seed_questions(&catalog, 5, None).await;

    let results = catalog.search_questions("xyzzy").await.unwrap();
    assert_eq!(results.total_questions, 0);
    assert!(results.questions.is_empty());
}

#[tokio::test]
async fn test_questions_by_category_filters_and_labels() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db.clone());

    let science = db.insert_category("Science").await.unwrap();
    let art = db.insert_category("Art").await.unwrap();
    let science_ids = seed_questions(&catalog, 3, Some(science)).await;
    seed_questions(&catalog, 2, Some(art)).await;

    let results = catalog.questions_by_category(science).await.unwrap();
    assert_eq!(results.total_questions, 3);
    assert_eq!(results.current_category, "Science");

    let returned: Vec<i64> = results.questions.iter().map(|q| q.id).collect();
    for id in &science_ids {
        assert!(returned.contains(id));
    }
    assert!(results.questions.iter().all(|q| q.category == Some(science)));
}

#[tokio::test]
async fn test_questions_by_category_unknown_is_not_found() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let err = catalog.questions_by_category(1_000_000).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound), "got {err:?}");
}

#[tokio::test]
async fn test_create_assigns_fresh_id_and_increments_total() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let first = catalog.create_question(draft("Q1", None)).await.unwrap();
    assert_eq!(first.total_questions, 1);

    let second = catalog.create_question(draft("Q2", None)).await.unwrap();
    assert_eq!(second.total_questions, 2);
    assert!(second.created > first.created, "ids are assigned monotonically");
}

#[tokio::test]
async fn test_create_accepts_missing_fields() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db.clone());

    let created = catalog
        .create_question(NewQuestion::default())
        .await
        .unwrap();

    let row = db.get_question(created.created).await.unwrap().unwrap();
    assert!(row.question.is_none());
    assert!(row.answer.is_none());
    assert!(row.difficulty.is_none());
    assert!(row.category.is_none());
}

#[tokio::test]
async fn test_delete_missing_is_unprocessable() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    let err = catalog.delete_question(1234).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unprocessable), "got {err:?}");
}

#[tokio::test]
async fn test_delete_removes_question_and_decrements_total() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db.clone());
    let ids = seed_questions(&catalog, 3, None).await;

    let deleted = catalog.delete_question(ids[1]).await.unwrap();
    assert_eq!(deleted.deleted_id, ids[1]);
    assert_eq!(deleted.total_questions, 2);

    assert!(db.get_question(ids[1]).await.unwrap().is_none());

    // Deleting the same id again is an absence, same as never-created
    let err = catalog.delete_question(ids[1]).await.unwrap_err();
    assert!(matches!(err, CatalogError::Unprocessable), "got {err:?}");
}

#[tokio::test]
async fn test_create_then_delete_round_trips_total() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db.clone());
    seed_questions(&catalog, 4, None).await;
    let before = db.count_questions().await.unwrap();

    let created = catalog.create_question(draft("ephemeral", None)).await.unwrap();
    assert_eq!(created.total_questions, before + 1);

    let deleted = catalog.delete_question(created.created).await.unwrap();
    assert_eq!(deleted.total_questions, before);
}

#[tokio::test]
async fn test_orphaned_category_reference_is_still_served() {
    let db = create_test_db().await;
    let catalog = Catalog::new(db);

    // No category with id 9999 exists; the question must still be listable
    let created = catalog
        .create_question(draft("orphan", Some(9999)))
        .await
        .unwrap();

    let page = catalog.list_questions(1).await.unwrap();
    assert!(page.questions.iter().any(|q| q.id == created.created));

    // The category itself is absent, so the category view is NotFound
    let err = catalog.questions_by_category(9999).await.unwrap_err();
    assert!(matches!(err, CatalogError::NotFound), "got {err:?}");
}

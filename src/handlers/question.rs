use crate::{
    catalog::Catalog,
    db::NewQuestion,
    models::{
        format_questions, CreatedResponse, DeletedResponse, QuestionListResponse, SearchResponse,
    },
    rejections::ResultExt,
};
use super::{ListQuestionsQuery, QuestionsPostBody};

pub(crate) async fn list_questions(
    query: ListQuestionsQuery,
    catalog: Catalog,
) -> Result<impl warp::Reply, warp::Rejection> {
    let page = catalog
        .list_questions(query.page)
        .await
        .reject("could not list questions")?;

    Ok(warp::reply::json(&QuestionListResponse {
        success: true,
        questions: format_questions(page.questions),
        total_questions: page.total_questions,
        categories: page.categories,
        current_category: None,
    }))
}

pub(crate) async fn create_or_search(
    body: QuestionsPostBody,
    catalog: Catalog,
) -> Result<impl warp::Reply, warp::Rejection> {
    match body {
        QuestionsPostBody::Search(search) => {
            let results = catalog
                .search_questions(&search.search_term)
                .await
                .reject("could not search questions")?;

            Ok(warp::reply::json(&SearchResponse {
                success: true,
                questions: format_questions(results.questions),
                total_questions: results.total_questions,
                current_category: None,
            }))
        }
        QuestionsPostBody::Create(create) => {
            let draft = NewQuestion {
                question: create.question,
                answer: create.answer,
                difficulty: create.difficulty,
                category: create.category,
            };
            let created = catalog
                .create_question(draft)
                .await
                .reject("could not create question")?;

            Ok(warp::reply::json(&CreatedResponse {
                success: true,
                created: created.created,
                total_questions: created.total_questions,
            }))
        }
    }
}

pub(crate) async fn delete_question(
    id: i64,
    catalog: Catalog,
) -> Result<impl warp::Reply, warp::Rejection> {
    let deleted = catalog
        .delete_question(id)
        .await
        .reject("could not delete question")?;

    Ok(warp::reply::json(&DeletedResponse {
        success: true,
        deleted_id: deleted.deleted_id,
        total_questions: deleted.total_questions,
    }))
}

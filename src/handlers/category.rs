use crate::{
    catalog::Catalog,
    models::{format_questions, CategoriesResponse, CategoryQuestionsResponse},
    rejections::ResultExt,
};

pub(crate) async fn list_categories(catalog: Catalog) -> Result<impl warp::Reply, warp::Rejection> {
    let categories = catalog
        .list_categories()
        .await
        .reject("could not list categories")?;

    Ok(warp::reply::json(&CategoriesResponse {
        success: true,
        categories,
    }))
}

pub(crate) async fn questions_by_category(
    category_id: i64,
    catalog: Catalog,
) -> Result<impl warp::Reply, warp::Rejection> {
    let results = catalog
        .questions_by_category(category_id)
        .await
        .reject("could not get questions for category")?;

    Ok(warp::reply::json(&CategoryQuestionsResponse {
        success: true,
        questions: format_questions(results.questions),
        total_questions: results.total_questions,
        current_category: results.current_category,
    }))
}

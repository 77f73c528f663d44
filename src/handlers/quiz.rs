use crate::{
    catalog::QuizScope,
    models::{QuestionPayload, QuizResponse},
    names,
    quiz::QuizSelector,
    rejections::ResultExt,
};
use super::QuizBody;

pub(crate) async fn play(
    body: QuizBody,
    selector: QuizSelector,
) -> Result<impl warp::Reply, warp::Rejection> {
    let scope = match body.quiz_category {
        Some(category) if category.id != names::ALL_CATEGORIES_ID => {
            QuizScope::Category(category.id)
        }
        _ => QuizScope::All,
    };

    let question = selector
        .next_question(&body.previous_questions, scope)
        .await
        .reject("could not pick a quiz question")?;

    Ok(warp::reply::json(&QuizResponse {
        success: true,
        question: question.map(QuestionPayload::from),
    }))
}

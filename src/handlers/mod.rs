mod category;
mod question;
mod quiz;

use serde::Deserialize;
use warp::Filter;

use crate::{catalog::Catalog, names, quiz::QuizSelector, with_state};

/// Deserialize a value that may be either a JSON number or a string containing
/// a number. Quiz clients send the category id both ways.
fn deserialize_string_or_i64<'de, D: serde::Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    struct Vis;
    impl<'de> serde::de::Visitor<'de> for Vis {
        type Value = i64;
        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("number or numeric string")
        }
        fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<i64, E> { Ok(v) }
        fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<i64, E> { Ok(v as i64) }
        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<i64, E> {
            v.parse().map_err(E::custom)
        }
    }
    d.deserialize_any(Vis)
}

#[derive(Deserialize)]
pub(crate) struct ListQuestionsQuery {
    #[serde(default = "default_page")]
    page: i64,
}

fn default_page() -> i64 {
    names::DEFAULT_PAGE
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchBody {
    search_term: String,
}

#[derive(Deserialize)]
pub(crate) struct CreateQuestionBody {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    difficulty: Option<i64>,
    #[serde(default)]
    category: Option<i64>,
}

/// POST /questions carries either a search or a create. Resolved once here,
/// by the presence of `searchTerm`, instead of by loose key lookup downstream.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum QuestionsPostBody {
    Search(SearchBody),
    Create(CreateQuestionBody),
}

#[derive(Deserialize)]
pub(crate) struct QuizCategoryBody {
    #[serde(default, deserialize_with = "deserialize_string_or_i64")]
    id: i64,
}

#[derive(Deserialize)]
pub(crate) struct QuizBody {
    #[serde(default)]
    previous_questions: Vec<i64>,
    #[serde(default)]
    quiz_category: Option<QuizCategoryBody>,
}

pub fn routes(
    catalog: Catalog,
    selector: QuizSelector,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list_categories = warp::path!("categories")
        .and(warp::get())
        .and(with_state(catalog.clone()))
        .and_then(category::list_categories);

    let category_questions = warp::path!("categories" / i64 / "questions")
        .and(warp::get())
        .and(with_state(catalog.clone()))
        .and_then(category::questions_by_category);

    let list_questions = warp::path!("questions")
        .and(warp::get())
        .and(warp::query::<ListQuestionsQuery>())
        .and(with_state(catalog.clone()))
        .and_then(question::list_questions);

    let post_questions = warp::path!("questions")
        .and(warp::post())
        .and(warp::body::json::<QuestionsPostBody>())
        .and(with_state(catalog.clone()))
        .and_then(question::create_or_search);

    let delete_question = warp::path!("questions" / i64)
        .and(warp::delete())
        .and(with_state(catalog))
        .and_then(question::delete_question);

    let play_quiz = warp::path!("quizzes")
        .and(warp::post())
        .and(warp::body::json::<QuizBody>())
        .and(with_state(selector))
        .and_then(quiz::play);

    list_categories
        .or(category_questions)
        .or(list_questions)
        .or(post_questions)
        .or(delete_question)
        .or(play_quiz)
}

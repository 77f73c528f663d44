pub mod catalog;
pub mod db;
pub mod handlers;
pub mod models;
pub mod names;
pub mod quiz;
pub mod rejections;

use std::convert::Infallible;

use warp::Filter;

use catalog::Catalog;
use db::Db;
use quiz::QuizSelector;

/// Build the full route tree over an injected database handle. Catalog and
/// QuizSelector are constructed here; nothing in the crate reaches for a
/// process-wide singleton.
pub fn routes(
    db: Db,
) -> impl warp::Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let catalog = Catalog::new(db);
    let selector = QuizSelector::new(catalog.clone());
    handlers::routes(catalog, selector)
}

pub(crate) fn with_state<S: Clone + Send>(
    state: S,
) -> impl Filter<Extract = (S,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

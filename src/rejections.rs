use std::convert::Infallible;

use serde::Serialize;
use warp::{
    http::StatusCode,
    reject::{Reject, Rejection},
    reply::Reply,
};

use crate::catalog::CatalogError;

macro_rules! rejects {
    ($($name:ident),*) => {
        $(
            #[derive(Debug)]
            pub struct $name;

            impl Reject for $name {}
        )*
    };
}

rejects!(NotFound, Unprocessable, InternalServerError);

pub trait ResultExt<T> {
    /// Convert a core error into a rejection, logging internal failures with
    /// the given context. `NotFound` and `Unprocessable` pass through
    /// unlogged; they are expected outcomes.
    fn reject(self, context: &'static str) -> Result<T, Rejection>;
}

impl<T> ResultExt<T> for Result<T, CatalogError> {
    fn reject(self, context: &'static str) -> Result<T, Rejection> {
        self.map_err(|e| match e {
            CatalogError::NotFound => warp::reject::custom(NotFound),
            CatalogError::Unprocessable => warp::reject::custom(Unprocessable),
            CatalogError::Internal(report) => {
                tracing::error!("{context}: {report:?}");
                warp::reject::custom(InternalServerError)
            }
        })
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    code: u16,
    message: &'static str,
}

pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message;

    if err.is_not_found() || err.find::<NotFound>().is_some() {
        code = StatusCode::NOT_FOUND;
        message = "Page Not Found";
    } else if let Some(Unprocessable) = err.find() {
        code = StatusCode::UNPROCESSABLE_ENTITY;
        message = "Request Cannot Be Processed";
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
        || err.find::<warp::reject::InvalidQuery>().is_some()
    {
        code = StatusCode::BAD_REQUEST;
        message = "Bad Request";
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed";
    } else if let Some(InternalServerError) = err.find() {
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    } else {
        tracing::error!("unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error";
    }

    let body = warp::reply::json(&ErrorBody {
        success: false,
        code: code.as_u16(),
        message,
    });

    Ok(warp::reply::with_status(body, code))
}

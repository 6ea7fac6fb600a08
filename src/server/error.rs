use std::fmt::Display;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::error::QueryError;

/// An error that knows how it is rendered over HTTP.
pub trait RequestError: Display + Send + Sync + 'static {
    fn error_code(&self) -> &'static str;
    fn status_code(&self) -> StatusCode;
}

/// Handler errors.
///
/// [`QueryError::NoDataLoaded`] and [`QueryError::PageOutOfRange`] are rendered as
/// `200 {"error": message}`; the rest as `{"error_code", "error_message"}` with their
/// status code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The query string could not be deserialized (non-integer, negative, ...).
    #[error("invalid query parameters: {0}")]
    InvalidQueryParams(#[from] QueryRejection),
}

impl RequestError for Error {
    fn error_code(&self) -> &'static str {
        match self {
            Error::Query(QueryError::NoDataLoaded) => "NO_DATA_LOADED",
            Error::Query(QueryError::PageOutOfRange) => "PAGE_OUT_OF_RANGE",
            Error::Query(QueryError::InvalidPageRequest { .. }) => "INVALID_PAGE_REQUEST",
            Error::InvalidQueryParams(_) => "INVALID_QUERY_PARAMETERS",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::Query(QueryError::NoDataLoaded | QueryError::PageOutOfRange) => StatusCode::OK,
            Error::Query(QueryError::InvalidPageRequest { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::InvalidQueryParams(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::OK {
            return Json(json!({ "error": self.to_string() })).into_response();
        }

        let body = json!({
            "error_code": self.error_code(),
            "error_message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

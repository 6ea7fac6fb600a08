//! Paginated fetch handler

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::processing::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest};
use crate::query::QueryService;
use crate::server::error::Error;

/// Query parameters for the paginated fetch endpoint
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    /// 1-based page number (default: 1)
    #[serde(default = "default_page")]
    page: usize,

    /// Rows per page (default: 100, max: 1000)
    #[serde(default = "default_page_size")]
    page_size: usize,
}

fn default_page() -> usize {
    DEFAULT_PAGE
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Handler for the `GET /fetch-data/` endpoint
///
/// ## Response
/// - **200 OK**: `{page, page_size, total_records, total_pages, data}`
/// - **200 OK**: `{"error": ...}` when no table is loaded or the page is out of range
/// - **422 Unprocessable Entity**: `page < 1`, `page_size` outside `1..=1000`, or a
///   non-integer parameter
#[tracing::instrument(skip_all)]
pub async fn handler(
    State(service): State<QueryService>,
    query: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Response, Error> {
    let query = match query {
        Ok(Query(query)) => query,
        Err(err) => {
            tracing::debug!(error = ?err, "invalid query parameters");
            return Err(err.into());
        }
    };

    let req = PageRequest::new(query.page, query.page_size)?;
    let page = service.fetch_page(req).inspect_err(|err| {
        tracing::debug!(
            page = req.page(),
            page_size = req.page_size(),
            error = %err,
            "no page returned"
        );
    })?;

    Ok(Json(page).into_response())
}

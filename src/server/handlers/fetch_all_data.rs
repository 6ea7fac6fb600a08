//! Bulk CSV export handler

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::query::QueryService;
use crate::server::error::Error;

/// Handler for the `GET /fetch-all-data/` endpoint
///
/// Streams the whole table as CSV (`Content-Type: text/csv`), header row first. The body
/// is produced chunk by chunk from the shared table.
#[tracing::instrument(skip_all)]
pub async fn handler(State(service): State<QueryService>) -> Result<Response, Error> {
    let chunks = service.fetch_all()?;
    let body = Body::from_stream(futures::stream::iter(chunks));

    Ok(([(header::CONTENT_TYPE, "text/csv")], body).into_response())
}

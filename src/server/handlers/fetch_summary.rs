//! Summary handler

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::query::QueryService;
use crate::server::error::Error;

/// Handler for the `GET /fetch-summary/` endpoint
///
/// Returns `{total_records, columns, sample}` where `sample` holds the first five rows.
#[tracing::instrument(skip_all)]
pub async fn handler(State(service): State<QueryService>) -> Result<Response, Error> {
    let summary = service.fetch_summary()?;
    Ok(Json(summary).into_response())
}

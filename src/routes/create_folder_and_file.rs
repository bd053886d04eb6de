//! The route that drops a new record file into the managed directory.

use axum::{extract::State, http::StatusCode};
use axum_macros::debug_handler;

use crate::{error::Error, response::Response, AppState};

/// The response body sent once a record is written.
pub(crate) const CREATED_MESSAGE: &str = "Folder and file created successfully";

/// Writes a record file for the current instant. The request body is ignored.
///
/// # Errors
///
/// See [`Error::Write`].
#[debug_handler]
pub(crate) async fn post(State(state): State<AppState>) -> Result<Response, Error> {
    let record = state.records.create().await?;

    tracing::debug!(name = %record.name, "created record");

    Ok(Response::new().plain_text(StatusCode::OK, CREATED_MESSAGE))
}

//! The route that lists the record files in the managed directory.

use axum::{extract::State, Json};
use axum_macros::debug_handler;

use crate::{error::Error, AppState};

/// Lists the names of all record files, unsorted.
///
/// # Errors
///
/// See [`Error::Read`].
#[debug_handler]
pub(crate) async fn get(State(state): State<AppState>) -> Result<Json<Vec<String>>, Error> {
    Ok(Json(state.records.list().await?))
}

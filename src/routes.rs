//! All routes for the HTTP service.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{response::Response, AppState};

pub(crate) mod create_folder_and_file;
pub(crate) mod get_created_files;

/// Builds the service's router over the given state.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/createFolderAndFile", post(create_folder_and_file::post))
        .route("/getCreatedFiles", get(get_created_files::get))
        .fallback(|| async { Response::new().plain_error(StatusCode::NOT_FOUND) })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! See [`Error`].

use std::io;

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::response::Response;

/// The response body sent when a record can't be written.
pub(crate) const WRITE_FAILURE_MESSAGE: &str = "Error writing in the file";

/// The start of the response body sent when the records can't be listed. The I/O error's message
/// follows it.
pub(crate) const READ_FAILURE_PREFIX: &str = "Error reading folder - ";

/// A failed filesystem operation on the managed directory.
#[derive(Error, Debug)]
pub(crate) enum Error {
    /// Ensuring the directory or writing a record file failed.
    #[error("failed to write record: {0}")]
    Write(#[source] io::Error),

    /// Ensuring the directory or listing its entries failed.
    #[error("failed to read records: {0}")]
    Read(#[source] io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "{self}");

        let body = match &self {
            Self::Write(_) => WRITE_FAILURE_MESSAGE.to_owned(),
            Self::Read(source) => format!("{READ_FAILURE_PREFIX}{source}"),
        };

        Response::new()
            .plain_text(StatusCode::INTERNAL_SERVER_ERROR, body)
            .into_response()
    }
}

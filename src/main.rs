//! A small HTTP service that drops timestamped text files into one directory and lists them.

mod clock;
mod config;
mod error;
mod records;
mod response;
mod routes;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{clock::SystemClock, config::Config, records::RecordStore};

/// The log filter used when `RUST_LOG` isn't set.
const DEFAULT_LOG_FILTER: &str = "file_drop=info,tower_http=info";

/// The state shared by all route handlers.
#[derive(Clone, Debug)]
pub(crate) struct AppState {
    /// The store over the managed directory.
    pub(crate) records: RecordStore,
}

/// # Errors
///
/// See implementation.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    let records = RecordStore::new(config.records_dir, Arc::new(SystemClock));

    records.ensure_dir().await.with_context(|| {
        format!(
            "failed to create the records directory `{}`",
            records.dir().display()
        )
    })?;

    tracing::info!(dir = %records.dir().display(), "Using records directory");

    let listener = TcpListener::bind(&config.address)
        .await
        .with_context(|| format!("failed to listen on `{}`", config.address))?;

    tracing::info!("Server is running on {}", listener.local_addr()?);

    axum::serve(listener, routes::router(AppState { records })).await?;

    Ok(())
}

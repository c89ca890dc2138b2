//! HTTP server initialization and runtime setup.
//!
//! Wires the in-memory stores, cache, classifier, and click worker together
//! and runs the Axum server until shutdown.

use crate::application::services::{AuthService, LinkService, MetricsService, RedirectService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::infrastructure::cache::{CacheService, MemoryCache};
use crate::infrastructure::classifier::{CategoryClassifier, KeywordClassifier};
use crate::infrastructure::persistence::{
    MemoryEventLog, MemoryLinkRepository, MemorySessionRepository, MemoryUserRepository,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store, event log, user and session tables
/// - Read-through redirect cache
/// - Background click worker on its configured cadence
/// - Axum HTTP server with graceful shutdown
///
/// On shutdown the router (and with it every click sender) is dropped, and
/// the worker is awaited so queued click events are drained, not discarded.
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or the
/// server runtime errors out.
pub async fn run(config: Config) -> Result<()> {
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let event_log = Arc::new(MemoryEventLog::new());
    let user_repository = Arc::new(MemoryUserRepository::new());
    let session_repository = Arc::new(MemorySessionRepository::new());

    let cache: Arc<dyn CacheService> = Arc::new(MemoryCache::new());
    let classifier: Arc<dyn CategoryClassifier> = Arc::new(KeywordClassifier::new());

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);

    let worker = tokio::spawn(run_click_worker(
        click_rx,
        link_repository.clone(),
        event_log.clone(),
        Duration::from_millis(config.click_flush_interval_ms),
        config.click_batch_size,
    ));
    tracing::info!("Click worker started");

    let state = AppState {
        link_service: Arc::new(LinkService::new(link_repository.clone(), classifier)),
        redirect_service: Arc::new(RedirectService::new(
            link_repository.clone(),
            cache.clone(),
            click_tx.clone(),
        )),
        metrics_service: Arc::new(MetricsService::new(
            link_repository,
            event_log,
            cache.clone(),
        )),
        auth_service: Arc::new(AuthService::new(
            user_repository,
            session_repository,
            config.token_signing_secret.clone(),
        )),
        cache,
        click_sender: click_tx,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Serving is done, so every sender is gone; wait for the worker to
    // drain whatever clicks were still queued.
    worker.await?;
    tracing::info!("Click worker drained, shutting down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}

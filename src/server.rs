//! HTTP server initialization and runtime setup.
//!
//! Handles collaborator construction, worker spawning, and Axum server
//! lifecycle including graceful shutdown with event-queue drain.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::event_worker::run_event_worker;
use crate::infrastructure::analytics::{AnalyticsSink, GoogleAnalyticsSink, NullSink};
use crate::infrastructure::reporting::{ErrorReporter, NullReporter, SentryReporter};
use crate::routes::app_router;
use crate::state::AppState;

/// Outbound request timeout for analytics and error-reporting calls.
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Shared outbound HTTP client
/// - Analytics sink (or NullSink fallback)
/// - Error reporter (or NullReporter fallback)
/// - Background event worker
/// - Axum HTTP server with SIGINT/SIGTERM graceful shutdown
///
/// After the listener stops, the event sender closes with the router and the
/// worker is joined, flushing whatever is still queued.
///
/// # Errors
///
/// Returns an error if:
/// - The outbound HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(OUTBOUND_TIMEOUT)
        .build()?;

    let sink: Arc<dyn AnalyticsSink> = match &config.ga_tracking_id {
        Some(tracking_id) => {
            info!("Tracking enabled");
            Arc::new(GoogleAnalyticsSink::new(
                http.clone(),
                tracking_id.clone(),
                config.ga_client_id.clone(),
                config.ga_debug,
            ))
        }
        None => {
            info!("Tracking disabled (NullSink)");
            Arc::new(NullSink::new())
        }
    };

    let reporter: Arc<dyn ErrorReporter> = match &config.sentry_dsn {
        Some(dsn) => match SentryReporter::from_dsn(http, dsn, &config.environment) {
            Ok(sentry) => {
                info!("Error reporting enabled");
                Arc::new(sentry)
            }
            Err(e) => {
                warn!("Failed to configure error reporting: {}. Using NullReporter.", e);
                Arc::new(NullReporter::new())
            }
        },
        None => {
            info!("Error reporting disabled (NullReporter)");
            Arc::new(NullReporter::new())
        }
    };

    let (event_tx, event_rx) = mpsc::channel(config.event_queue_capacity);

    let worker = tokio::spawn(run_event_worker(event_rx, sink, reporter.clone()));
    info!("Event worker started");

    let state = AppState::new(event_tx, reporter);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and with it the event sender) is dropped once serve
    // returns; joining the worker flushes the remaining queue.
    worker.await?;
    info!("Event queue drained, shutdown complete");

    Ok(())
}

/// Resolves when a shutdown signal is received.
///
/// On Unix this listens for SIGTERM and Ctrl-C; elsewhere Ctrl-C only.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }

    info!("Shutdown signal received");
}

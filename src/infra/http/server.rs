//! Listener and interrupt watcher, coordinated through a cancellation token.

use std::{future::IntoFuture, time::Duration};

use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{application::error::AppError, config::ServerSettings, infra::error::InfraError};

use super::public::{HttpState, build_router};

/// Bind the configured address and serve until an interrupt arrives.
///
/// Both the interrupt watcher and the listener must finish before this returns.
pub async fn run(settings: &ServerSettings, state: HttpState) -> Result<(), AppError> {
    let listener = TcpListener::bind(settings.addr)
        .await
        .map_err(|source| InfraError::Bind {
            addr: settings.addr,
            source,
        })?;

    let shutdown = CancellationToken::new();
    let watcher = tokio::spawn(watch_interrupt(shutdown.clone()));
    let server = tokio::spawn(serve_until_cancelled(
        listener,
        build_router(state),
        shutdown.clone(),
        settings.graceful_shutdown,
    ));

    let served = server.await;
    // A listener that stopped on its own releases the watcher as well.
    shutdown.cancel();
    let watched = watcher.await;

    watched.map_err(|err| AppError::unexpected(format!("interrupt watcher failed: {err}")))?;
    served
        .map_err(|err| AppError::unexpected(format!("listener task failed: {err}")))?
        .map_err(AppError::from)
}

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// In-flight requests get `grace` to finish once cancellation is observed.
pub async fn serve_until_cancelled(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    grace: Duration,
) -> Result<(), InfraError> {
    let local_addr = listener.local_addr()?;
    info!(
        target = "folio::http::server",
        addr = %local_addr,
        "starting server on {local_addr}"
    );

    let server = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown.clone().cancelled_owned())
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result.map_err(InfraError::from),
        () = shutdown.cancelled() => {}
    }

    match tokio::time::timeout(grace, server).await {
        Ok(result) => {
            info!(target = "folio::http::server", "server stopped");
            result.map_err(InfraError::from)
        }
        Err(_) => {
            warn!(
                target = "folio::http::server",
                grace_ms = u64::try_from(grace.as_millis()).unwrap_or(u64::MAX),
                "in-flight requests did not drain in time"
            );
            Ok(())
        }
    }
}

/// Cancel `shutdown` when the process receives an interrupt.
pub async fn watch_interrupt(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => match result {
            Ok(()) => {
                info!(target = "folio::http::server", "interrupt received, shutting down");
                shutdown.cancel();
            }
            Err(err) => {
                error!(
                    target = "folio::http::server",
                    error = %err,
                    "unable to listen for interrupt signal"
                );
                shutdown.cancelled().await;
            }
        },
        () = shutdown.cancelled() => {}
    }
}

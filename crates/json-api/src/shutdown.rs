//! Graceful shutdown signal handling

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// How long in-flight requests get to finish once a signal arrives.
const GRACE_PERIOD: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

async fn terminate() -> Result<(), ShutdownSignalError> {
    #[cfg(unix)]
    {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok(())
    }

    #[cfg(not(unix))]
    {
        std::future::pending::<Result<(), ShutdownSignalError>>().await
    }
}

/// Wait for Ctrl+C or SIGTERM, then stop accepting connections.
///
/// The caller keeps awaiting `serve`, which returns once in-flight requests
/// drain, and tears down background work afterwards.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    tokio::select! {
        result = signal::ctrl_c() => {
            result.map_err(ShutdownSignalError::CtrlC)?;
            info!(signal = "ctrl_c", "shutdown signal received");
        }
        result = terminate() => {
            result?;
            info!(signal = "terminate", "shutdown signal received");
        }
    };

    handle.stop_graceful(Some(GRACE_PERIOD));

    Ok(())
}

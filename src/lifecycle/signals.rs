//! OS signal handling.

use crate::lifecycle::Shutdown;

/// Wait for SIGINT or SIGTERM, then trigger shutdown.
///
/// Runs as its own task so signal delivery is observed even while the poll
/// loop is blocked on a fetch or a callback; the loop still only stops at
/// its next cancellation point.
pub async fn listen(shutdown: Shutdown) {
    let sigint = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(error) => {
                tracing::error!(%error, "failed to register SIGTERM handler");
                return;
            }
        };

        tokio::select! {
            _ = sigint => tracing::info!("received SIGINT"),
            _ = sigterm.recv() => tracing::info!("received SIGTERM"),
        }
    }

    #[cfg(not(unix))]
    {
        let _ = sigint.await;
        tracing::info!("received interrupt");
    }

    shutdown.trigger();
}

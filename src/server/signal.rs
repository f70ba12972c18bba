// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use crate::logger;

/// Resolve when the process is asked to stop (Unix)
///
/// If a handler cannot be registered it is logged and that signal is ignored.
#[cfg(unix)]
pub async fn shutdown_signal() {
    use tokio::signal::unix::{signal, Signal, SignalKind};

    async fn recv(sig: Option<Signal>) {
        match sig {
            Some(mut s) => {
                s.recv().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    let register = |kind: SignalKind, name: &str| match signal(kind) {
        Ok(s) => Some(s),
        Err(e) => {
            logger::log_error(&format!("Failed to register {name} handler: {e}"));
            None
        }
    };

    let sigterm = register(SignalKind::terminate(), "SIGTERM");
    let sigint = register(SignalKind::interrupt(), "SIGINT");

    tokio::select! {
        () = recv(sigterm) => logger::log_info("SIGTERM received, shutting down"),
        () = recv(sigint) => logger::log_info("SIGINT received (Ctrl+C), shutting down"),
    }
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => logger::log_info("Ctrl+C received, shutting down"),
        Err(e) => {
            logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
            std::future::pending::<()>().await;
        }
    }
}

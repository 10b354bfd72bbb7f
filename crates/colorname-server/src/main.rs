mod config;
mod errors;
mod handler;

use config::ServerConfig;
use miette::{IntoDiagnostic, WrapErr};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to bind {addr}"))?;

    tracing::info!(
        %addr,
        palette = colorname::PALETTE.len(),
        version = env!("CARGO_PKG_VERSION"),
        "color name server listening"
    );

    axum::serve(listener, handler::router())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .into_diagnostic()
        .wrap_err("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

/// Resolve on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

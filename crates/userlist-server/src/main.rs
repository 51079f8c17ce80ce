//! userlist server
//!
//! - `GET /users`: the fixed in-memory user list as JSON
//! - Config: `USERLIST_CONFIG` (default `userlist.yaml`, optional)
//! - Logging: `RUST_LOG` (default `info`)

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userlist_core::error::{Result, UserListError};
use userlist_server::{app_state::AppState, config, router};

#[tokio::main]
async fn main() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.code().as_str(), "userlist-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::config_path_from_env();
    let cfg = config::load_or_default(&path)?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| UserListError::Io(format!("bind {listen} failed: {e}")))?;
    tracing::info!(%listen, config = %path, "userlist-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| UserListError::Io(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}

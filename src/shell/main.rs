use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use quiz_api::modules::quiz::adapters::outbound::progress_store_in_memory::InMemoryProgressStore;
use quiz_api::shell::config::Config;
use quiz_api::shell::http::router;
use quiz_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let store = Arc::new(InMemoryProgressStore::seeded(config.seed_users.clone()));
    tracing::debug!(users = ?config.seed_users, "seeded progress store");

    let app = router(AppState::in_memory(store));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("Quiz API running at http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutting down");
}

pub mod app;
mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;

use axum::routing::{get, post};
use axum::Router;
use config::ServerConfig;
use error::AppError;
use infra::{init_db, Db};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the HTTP router over an initialized store.
pub fn router(db: Db) -> Router {
    Router::new()
        .route("/", get(commands::home::cmd_home))
        .route(
            "/submit_application",
            post(commands::application::cmd_application_submit),
        )
        .route(
            "/get_applications",
            get(commands::application::cmd_application_list),
        )
        .route(
            "/get_application/:id",
            get(commands::application::cmd_application_get),
        )
        .route(
            "/officer_decision",
            post(commands::application::cmd_officer_decision),
        )
        .route(
            "/dashboard_stats",
            get(commands::dashboard::cmd_dashboard_stats),
        )
        .with_state(db)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Initialize the store, then serve until Ctrl+C or SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let db = init_db(&config.db_path).map_err(|e| {
        log::error!("DB init failed: {}", e);
        e
    })?;
    log::info!("DB path: {:?}", db.path());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    log::info!("BIS Portal listening on http://{}", config.addr);

    axum::serve(listener, router(db))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
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
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => log::info!("Received Ctrl+C, shutting down"),
        () = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}

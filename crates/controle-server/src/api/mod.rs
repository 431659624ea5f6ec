pub mod response;

use crate::config::{Config, CorsConfig};
use crate::db;
use crate::features;
use crate::middleware::{compression_layer, cors_layer, tracing_layer};
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;
use sqlx::SqlitePool;
use std::{
    future::{Future, IntoFuture},
    net::SocketAddr,
    sync::Arc,
    time::Duration,
};
use tokio::{signal, sync::Notify};
use tower::ServiceBuilder;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
}

pub async fn serve(config: Config, state: AppState) -> anyhow::Result<()> {
    let app = create_router(state, &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    let draining = Arc::new(Notify::new());
    let signal = {
        let draining = draining.clone();
        async move {
            shutdown_signal().await;
            draining.notify_one();
        }
    };

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(signal)
        .into_future();

    drain_bounded(
        server,
        async move { draining.notified().await },
        Duration::from_secs(config.server.shutdown_timeout_secs),
    )
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Run `server` to completion, giving up `grace` after `draining` resolves
///
/// Returns an error when in-flight requests are still open at the deadline.
async fn drain_bounded<S, D>(server: S, draining: D, grace: Duration) -> anyhow::Result<()>
where
    S: Future<Output = std::io::Result<()>>,
    D: Future<Output = ()>,
{
    tokio::pin!(server);

    let deadline = async {
        draining.await;
        tracing::info!(grace_secs = grace.as_secs(), "Draining connections");
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => Ok(result?),
        _ = deadline => {
            tracing::warn!(grace_secs = grace.as_secs(), "Shutdown grace period elapsed with requests in flight");
            anyhow::bail!("graceful shutdown did not finish within {}s", grace.as_secs())
        },
    }
}

/// Build the full application router
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    let feature_state = features::FeatureState {
        db: state.db.clone(),
    };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
        .nest("/api", features::router(feature_state))
        .layer(
            ServiceBuilder::new()
                .layer(tracing_layer())
                .layer(cors_layer(cors))
                .layer(compression_layer()),
        )
}

async fn root() -> impl IntoResponse {
    Json(json!({
        "name": "Controle Interno",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match db::ping(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "healthy", "database": "ok" }))),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "unreachable" })),
            )
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

//! Feature modules implementing the Controle Interno API
//!
//! # Features
//!
//! - **policies**: Internal-control policies (`/politicas`)
//! - **permissions**: Permissions with access levels (`/permissoes`)
//! - **access_logs**: Access log and known users (`/logsacesso`, `/usuarios`)
//! - **audit_trails**: Audit record browsing and administration (`/trilhasauditoria`)
//! - **statistics**: Counts across all tables (`/estatisticas`)
//!
//! # Architecture
//!
//! Each feature module follows the structure:
//! - `commands/` - Write operations (create, update, delete)
//! - `queries/` - Read operations (get, list)
//! - `routes.rs` - HTTP route definitions
//! - `types.rs` - The stored record and its lookups (if needed)
//!
//! Commands on tracked entities resolve and validate the actor, apply the
//! mutation, then hand prior and new snapshots to the audit recorder.

pub mod access_logs;
pub mod audit_trails;
pub mod permissions;
pub mod policies;
pub mod shared;
pub mod statistics;

use axum::Router;
use sqlx::SqlitePool;

/// Shared state for all feature routes
#[derive(Clone)]
pub struct FeatureState {
    pub db: SqlitePool,
}

/// Creates the API router with all feature routes mounted
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/politicas", policies::policies_routes().with_state(state.db.clone()))
        .nest("/permissoes", permissions::permissions_routes().with_state(state.db.clone()))
        .nest("/logsacesso", access_logs::access_logs_routes().with_state(state.db.clone()))
        .nest("/usuarios", access_logs::users_routes().with_state(state.db.clone()))
        .nest(
            "/trilhasauditoria",
            audit_trails::audit_trails_routes().with_state(state.db.clone()),
        )
        .nest("/estatisticas", statistics::statistics_routes().with_state(state.db))
}

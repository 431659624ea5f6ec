//! Controle Interno Server Library
//!
//! HTTP API for internal-control records: policies, permissions, access logs,
//! and the audit trail that tracks every change to them.
//!
//! # Architecture
//!
//! The server follows a **CQRS** layout with one vertical slice per entity:
//!
//! - **Commands** (POST, PUT, DELETE) change state. Commands on policies,
//!   permissions and access-log entries are attributed to an actor and written
//!   to the audit trail.
//! - **Queries** (GET) only read and are never audited.
//!
//! ## Actors
//!
//! Callers name themselves in the `X-Usuario` header. A blank or missing
//! header means the system identity `Sistema`. Any other name must already
//! appear in the access log, otherwise the request is rejected before anything
//! is written. See [`actor`].
//!
//! ## Audit Trail
//!
//! After a mutation commits, [`audit::AuditRecorder`] stores one record with
//! the entity kind, operation, actor, and JSON snapshots before and after.
//! A failure to write that record is logged and never fails the request.
//!
//! ## Framework Stack
//!
//! - **Axum**: HTTP routing and extractors
//! - **SQLx**: SQLite access and embedded migrations
//! - **Tower**: Middleware (tracing, CORS, compression)
//!
//! # Example
//!
//! ```no_run
//! use controle_server::{api, config::Config, db};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let pool = db::create_pool(&config.database).await?;
//!     db::run_migrations(&pool).await?;
//!     api::serve(config, api::AppState { db: pool }).await?;
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod api;
pub mod audit;
pub mod config;
pub mod cqrs;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

pub use error::{ServerError, ServerResult};

//! Audit trail
//!
//! Every successful mutation of a tracked entity produces one immutable audit
//! record naming the entity kind, the operation, the acting identity, and JSON
//! snapshots of the entity before and after the change.
//!
//! # Usage
//!
//! ```no_run
//! use controle_server::audit::{AuditRecorder, EntityKind};
//! use sqlx::SqlitePool;
//!
//! # async fn example(pool: SqlitePool) {
//! let recorder = AuditRecorder::new(pool);
//! let policy = serde_json::json!({ "id": 1, "name": "Senhas" });
//! recorder.record_create(EntityKind::Politica, "admin", &policy).await;
//! # }
//! ```
//!
//! The recorder returns `()` and logs its own failures.

pub mod models;
pub mod queries;
pub mod recorder;
pub mod snapshot;

pub use models::{
    AuditFilter, AuditRecord, EntityKind, NewAuditRecord, OperationKind, SnapshotShapeError,
    UnknownOperationError,
};
pub use queries::{delete_audit_record, get_audit_record, insert_audit_record, query_audit_records};
pub use recorder::AuditRecorder;
pub use snapshot::{decode_snapshot, encode_snapshot};

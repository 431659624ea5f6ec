//! Database queries for audit records

use sqlx::SqlitePool;
use tracing::debug;

use super::models::{AuditFilter, AuditRecord, NewAuditRecord};

const AUDIT_COLUMNS: &str = "id, entity, operation, timestamp, actor, prior_state, new_state";

/// Insert one audit record and return it with its assigned id
pub async fn insert_audit_record(
    pool: &SqlitePool,
    record: &NewAuditRecord,
) -> Result<AuditRecord, sqlx::Error> {
    let sql = format!(
        "INSERT INTO audit_trails (entity, operation, timestamp, actor, prior_state, new_state) \
         VALUES (?, ?, ?, ?, ?, ?) RETURNING {AUDIT_COLUMNS}"
    );

    let inserted = sqlx::query_as::<_, AuditRecord>(&sql)
        .bind(&record.entity)
        .bind(record.operation.as_str())
        .bind(record.timestamp)
        .bind(&record.actor)
        .bind(&record.prior_state)
        .bind(&record.new_state)
        .fetch_one(pool)
        .await?;

    debug!(
        audit_id = inserted.id,
        entity = %record.entity,
        operation = %record.operation,
        "Created audit record"
    );

    Ok(inserted)
}

/// Fetch a single audit record
pub async fn get_audit_record(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<AuditRecord>, sqlx::Error> {
    let sql = format!("SELECT {AUDIT_COLUMNS} FROM audit_trails WHERE id = ?");
    sqlx::query_as::<_, AuditRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List audit records newest first, narrowed by whichever filters are set
pub async fn query_audit_records(
    pool: &SqlitePool,
    filter: &AuditFilter,
) -> Result<Vec<AuditRecord>, sqlx::Error> {
    let mut sql = format!("SELECT {AUDIT_COLUMNS} FROM audit_trails WHERE 1=1");

    if filter.entity.is_some() {
        sql.push_str(" AND entity = ?");
    }
    if filter.operation.is_some() {
        sql.push_str(" AND operation = ?");
    }
    if filter.actor.is_some() {
        sql.push_str(" AND actor = ?");
    }
    sql.push_str(" ORDER BY julianday(timestamp) DESC, id DESC");

    let mut query = sqlx::query_as::<_, AuditRecord>(&sql);

    if let Some(entity) = &filter.entity {
        query = query.bind(entity);
    }
    if let Some(operation) = filter.operation {
        query = query.bind(operation.as_str());
    }
    if let Some(actor) = &filter.actor {
        query = query.bind(actor);
    }

    let records = query.fetch_all(pool).await?;

    debug!(count = records.len(), "Queried audit records");

    Ok(records)
}

/// Remove an audit record; returns whether a row was deleted
pub async fn delete_audit_record(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM audit_trails WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

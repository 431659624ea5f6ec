//! Sample data for an empty database
//!
//! Seeding is deterministic: the same ten users, actions and addresses are
//! spread over the last 30 days by index arithmetic. All rows go in through one
//! transaction.

use chrono::{DateTime, Duration, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::info;

use crate::audit::OperationKind;
use crate::error::ServerResult;

const POLICIES: [(&str, &str, i64, bool); 10] = [
    ("Política de Senhas", "Define requisitos mínimos para criação de senhas seguras", 30, true),
    ("Política de Acesso Remoto", "Regulamenta o acesso remoto aos sistemas corporativos", 25, true),
    ("Política de Backup", "Estabelece procedimentos para backup de dados críticos", 20, true),
    ("Política de Antivírus", "Define uso obrigatório de software antivírus atualizado", 15, true),
    ("Política de Firewall", "Configuração e manutenção de firewalls corporativos", 10, true),
    ("Política de Criptografia", "Uso de criptografia para dados sensíveis", 5, true),
    ("Política de Auditoria", "Procedimentos para auditoria de sistemas", 2, true),
    ("Política de Incidentes", "Tratamento de incidentes de segurança", 1, true),
    ("Política de Treinamento", "Capacitação em segurança da informação", 0, true),
    ("Política de Controle de Acesso", "Gestão de permissões e acessos", 0, false),
];

const PERMISSIONS: [(&str, i64, &str); 10] = [
    ("Administrador", 5, "Acesso total ao sistema"),
    ("Gerente", 4, "Acesso gerencial com algumas restrições"),
    ("Supervisor", 3, "Acesso de supervisão limitado"),
    ("Operador", 2, "Acesso operacional básico"),
    ("Visualizador", 1, "Apenas visualização de dados"),
    ("Auditor", 4, "Acesso para auditoria e relatórios"),
    ("Suporte", 3, "Acesso para suporte técnico"),
    ("Desenvolvedor", 4, "Acesso para desenvolvimento"),
    ("Analista", 3, "Acesso para análise de dados"),
    ("Consultor", 2, "Acesso consultivo limitado"),
];

/// Users that appear in the seeded access log, and so are valid actors
pub const SEED_USERS: [&str; 10] = [
    "admin",
    "gerente1",
    "supervisor1",
    "operador1",
    "auditor1",
    "suporte1",
    "dev1",
    "analista1",
    "consultor1",
    "user1",
];

const ACTIONS: [&str; 10] = [
    "Login",
    "Logout",
    "Visualizar Relatório",
    "Criar Usuário",
    "Editar Política",
    "Excluir Registro",
    "Exportar Dados",
    "Configurar Sistema",
    "Backup",
    "Auditoria",
];

const ORIGIN_IPS: [&str; 10] = [
    "192.168.1.10",
    "192.168.1.11",
    "192.168.1.12",
    "10.0.0.5",
    "10.0.0.6",
    "172.16.0.1",
    "172.16.0.2",
    "203.0.113.1",
    "203.0.113.2",
    "198.51.100.1",
];

const ENTITIES: [&str; 3] = ["Politica", "Permissao", "LogAcesso"];
const OPERATIONS: [OperationKind; 3] =
    [OperationKind::Create, OperationKind::Update, OperationKind::Delete];

const SEED_ACCESS_LOGS: usize = 50;
const SEED_AUDIT_RECORDS: usize = 50;
/// Seeded timestamps fall within this many hours before now
const SEED_WINDOW_HOURS: usize = 720;

/// Insert sample data when every table is empty; returns whether it did
pub async fn seed_if_empty(pool: &SqlitePool) -> ServerResult<bool> {
    let existing: i64 = sqlx::query_scalar(
        "SELECT (SELECT COUNT(*) FROM policies) + (SELECT COUNT(*) FROM permissions) \
         + (SELECT COUNT(*) FROM access_logs) + (SELECT COUNT(*) FROM audit_trails)",
    )
    .fetch_one(pool)
    .await?;

    if existing > 0 {
        info!(rows = existing, "Database already populated, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();
    let mut tx = pool.begin().await?;

    seed_policies(&mut tx, now).await?;
    seed_permissions(&mut tx).await?;
    seed_access_logs(&mut tx, now).await?;
    seed_audit_records(&mut tx, now).await?;

    tx.commit().await?;

    info!(
        policies = POLICIES.len(),
        permissions = PERMISSIONS.len(),
        access_logs = SEED_ACCESS_LOGS,
        audit_records = SEED_AUDIT_RECORDS,
        "Seeded sample data"
    );

    Ok(true)
}

async fn seed_policies(tx: &mut Transaction<'_, Sqlite>, now: DateTime<Utc>) -> ServerResult<()> {
    for (name, description, days_ago, active) in POLICIES {
        sqlx::query(
            "INSERT INTO policies (name, description, created_at, active) VALUES (?, ?, ?, ?)",
        )
        .bind(name)
        .bind(description)
        .bind(now - Duration::days(days_ago))
        .bind(active)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_permissions(tx: &mut Transaction<'_, Sqlite>) -> ServerResult<()> {
    for (name, level, description) in PERMISSIONS {
        sqlx::query("INSERT INTO permissions (name, level, description) VALUES (?, ?, ?)")
            .bind(name)
            .bind(level)
            .bind(description)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}

fn hours_ago(now: DateTime<Utc>, hours: usize) -> DateTime<Utc> {
    now - Duration::hours((hours % SEED_WINDOW_HOURS) as i64)
}

async fn seed_access_logs(
    tx: &mut Transaction<'_, Sqlite>,
    now: DateTime<Utc>,
) -> ServerResult<()> {
    for i in 0..SEED_ACCESS_LOGS {
        sqlx::query(
            "INSERT INTO access_logs (user_name, action, timestamp, origin_ip) VALUES (?, ?, ?, ?)",
        )
        .bind(SEED_USERS[i % SEED_USERS.len()])
        .bind(ACTIONS[(i * 3) % ACTIONS.len()])
        .bind(hours_ago(now, i * 37))
        .bind(ORIGIN_IPS[(i * 7) % ORIGIN_IPS.len()])
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn seed_audit_records(
    tx: &mut Transaction<'_, Sqlite>,
    now: DateTime<Utc>,
) -> ServerResult<()> {
    for i in 0..SEED_AUDIT_RECORDS {
        let operation = OPERATIONS[(i / ENTITIES.len()) % OPERATIONS.len()];
        let prior = format!(r#"{{"campo":"valor_anterior_{i}"}}"#);
        let new = format!(r#"{{"campo":"valor_novo_{i}"}}"#);
        let (prior_state, new_state) = match operation {
            OperationKind::Create => (None, Some(new)),
            OperationKind::Update => (Some(prior), Some(new)),
            OperationKind::Delete => (Some(prior), None),
        };

        sqlx::query(
            "INSERT INTO audit_trails (entity, operation, timestamp, actor, prior_state, new_state) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(ENTITIES[i % ENTITIES.len()])
        .bind(operation.as_str())
        .bind(hours_ago(now, i * 53))
        .bind(SEED_USERS[(i * 3) % SEED_USERS.len()])
        .bind(prior_state)
        .bind(new_state)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

//! Audit data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted audit record
///
/// Records are immutable once written. `prior_state` and `new_state` hold the
/// JSON text of the entity before and after the mutation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditRecord {
    pub id: i64,
    /// Wire name of the tracked entity kind, e.g. `Politica`
    pub entity: String,
    /// `CREATE`, `UPDATE` or `DELETE`
    pub operation: String,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub prior_state: Option<String>,
    pub new_state: Option<String>,
}

/// Tracked entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Politica,
    Permissao,
    LogAcesso,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Politica => "Politica",
            Self::Permissao => "Permissao",
            Self::LogAcesso => "LogAcesso",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationKind {
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }

    /// Check which snapshots an operation of this kind must carry
    ///
    /// CREATE has only a new state, DELETE only a prior state, UPDATE both.
    pub fn check_snapshots(
        &self,
        has_prior: bool,
        has_new: bool,
    ) -> Result<(), SnapshotShapeError> {
        let expected = match self {
            Self::Create => (false, true),
            Self::Update => (true, true),
            Self::Delete => (true, false),
        };

        if (has_prior, has_new) == expected {
            Ok(())
        } else {
            Err(SnapshotShapeError {
                operation: *self,
                has_prior,
                has_new,
            })
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OperationKind {
    type Err = UnknownOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(UnknownOperationError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operation '{0}': expected CREATE, UPDATE or DELETE")]
pub struct UnknownOperationError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "{operation} records require {}; got prior_state={has_prior}, new_state={has_new}",
    expected_shape(.operation)
)]
pub struct SnapshotShapeError {
    pub operation: OperationKind,
    pub has_prior: bool,
    pub has_new: bool,
}

fn expected_shape(operation: &OperationKind) -> &'static str {
    match operation {
        OperationKind::Create => "new_state only",
        OperationKind::Update => "both prior_state and new_state",
        OperationKind::Delete => "prior_state only",
    }
}

/// Input for inserting an audit record
#[derive(Debug, Clone)]
pub struct NewAuditRecord {
    pub entity: String,
    pub operation: OperationKind,
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub prior_state: Option<String>,
    pub new_state: Option<String>,
}

/// Filters for listing audit records; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditFilter {
    pub entity: Option<String>,
    pub operation: Option<OperationKind>,
    pub actor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_wire_names() {
        assert_eq!(EntityKind::Politica.as_str(), "Politica");
        assert_eq!(EntityKind::Permissao.as_str(), "Permissao");
        assert_eq!(EntityKind::LogAcesso.as_str(), "LogAcesso");
        assert_eq!(serde_json::to_string(&EntityKind::LogAcesso).unwrap(), r#""LogAcesso""#);
    }

    #[test]
    fn test_operation_serialization() {
        assert_eq!(serde_json::to_string(&OperationKind::Update).unwrap(), r#""UPDATE""#);
        let op: OperationKind = serde_json::from_str(r#""DELETE""#).unwrap();
        assert_eq!(op, OperationKind::Delete);
    }

    #[test]
    fn test_operation_from_str() {
        assert_eq!("CREATE".parse::<OperationKind>(), Ok(OperationKind::Create));
        assert_eq!(" UPDATE ".parse::<OperationKind>(), Ok(OperationKind::Update));
        assert!("create".parse::<OperationKind>().is_err());
        assert!("MERGE".parse::<OperationKind>().is_err());
    }

    #[test]
    fn test_snapshot_shapes() {
        assert!(OperationKind::Create.check_snapshots(false, true).is_ok());
        assert!(OperationKind::Update.check_snapshots(true, true).is_ok());
        assert!(OperationKind::Delete.check_snapshots(true, false).is_ok());

        assert!(OperationKind::Create.check_snapshots(true, true).is_err());
        assert!(OperationKind::Update.check_snapshots(false, true).is_err());
        assert!(OperationKind::Delete.check_snapshots(true, true).is_err());
        assert!(OperationKind::Delete.check_snapshots(false, false).is_err());
    }

    #[test]
    fn test_snapshot_shape_message() {
        let err = OperationKind::Delete.check_snapshots(false, false).unwrap_err();
        assert!(err.to_string().contains("prior_state only"));
    }
}

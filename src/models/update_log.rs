//! Update log model
//!
//! Append-only audit trail. Location names and the asset name are copied
//! into the row so the log stays readable after the asset is gone.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Mutation recorded by an update log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(rename = "CREATE")]
    Create,
    #[serde(rename = "UPDATE")]
    Update,
    #[serde(rename = "DELETE")]
    Delete,
    #[serde(rename = "SERVICE CREATE")]
    ServiceCreate,
    #[serde(rename = "SERVICE UPDATE")]
    ServiceUpdate,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::ServiceCreate => "SERVICE CREATE",
            AuditAction::ServiceUpdate => "SERVICE UPDATE",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UpdateLog {
    pub id: i32,
    pub asset_barcode: String,
    pub asset_name: String,
    pub action: String,
    pub details: String,
    pub actor: String,
    pub school_name: String,
    pub area_name: String,
    pub created_at: DateTime<Utc>,
}

/// Log entry staged by the audit writer, not yet persisted
#[derive(Debug, Clone, PartialEq)]
pub struct NewUpdateLog {
    pub asset_barcode: String,
    pub asset_name: String,
    pub action: AuditAction,
    pub details: String,
    pub actor: String,
    pub school_name: String,
    pub area_name: String,
}

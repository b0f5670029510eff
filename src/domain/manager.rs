//! Manager domain entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An account that owns employee records.
///
/// Created on registration and never modified afterwards.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: i32,
    pub guid: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

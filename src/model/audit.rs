use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditReferenceType {
    Organization,
    Environment,
    #[default]
    Api,
    Application,
    Integration,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Audit {
    pub id: String,
    pub organization_id: String,
    pub environment_id: String,
    pub reference_type: AuditReferenceType,
    pub reference_id: String,
    pub user: String,
    pub event: String,
    pub properties: BTreeMap<String, String>,
    /// JSON patch between the old and new state.
    pub patch: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Audit {
    type Key = String;
    const KIND: &'static str = "Audit";

    fn key(&self) -> String {
        self.id.clone()
    }
}

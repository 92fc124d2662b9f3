use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanStatus {
    #[default]
    Staging,
    Published,
    Deprecated,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanSecurityType {
    #[default]
    KeyLess,
    ApiKey,
    Jwt,
    Oauth2,
    Mtls,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanValidation {
    #[default]
    Auto,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub api_id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: PlanStatus,
    pub security: PlanSecurityType,
    pub validation: PlanValidation,
    pub order: i32,
    pub characteristics: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub closed_at: Option<DateTime<Utc>>,
}

impl Plan {
    pub fn new(id: impl Into<String>, api_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            api_id: api_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status == PlanStatus::Closed
    }
}

impl Entity for Plan {
    type Key = String;
    const KIND: &'static str = "Plan";

    fn key(&self) -> String {
        self.id.clone()
    }
}

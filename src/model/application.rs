use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Active,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationType {
    #[default]
    Simple,
    Browser,
    Web,
    Native,
    BackendToBackend,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub environment_id: String,
    pub status: ApplicationStatus,
    #[serde(rename = "type")]
    pub app_type: ApplicationType,
    pub client_id: Option<String>,
    pub groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Application {
    pub fn new(id: impl Into<String>, name: impl Into<String>, environment_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

impl Entity for Application {
    type Key = String;
    const KIND: &'static str = "Application";

    fn key(&self) -> String {
        self.id.clone()
    }
}

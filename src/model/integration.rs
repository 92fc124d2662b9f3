use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub provider: String,
    pub environment_id: String,
    pub groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Integration {
    pub fn new(id: impl Into<String>, provider: impl Into<String>, environment_id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("{} integration", id),
            id,
            provider: provider.into(),
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }
}

impl Entity for Integration {
    type Key = String;
    const KIND: &'static str = "Integration";

    fn key(&self) -> String {
        self.id.clone()
    }
}

/// An API discovered by a federation agent on a third-party gateway.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntegrationApi {
    pub integration_id: String,
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
}

/// Agent accepted an ingestion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestStarted {
    pub integration_id: String,
    pub ingest_job_id: String,
    pub total: u64,
}

/// Agent refused or could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestFailure {
    pub integration_id: String,
    pub message: String,
}

pub type IngestStartReply = std::result::Result<IngestStarted, IngestFailure>;

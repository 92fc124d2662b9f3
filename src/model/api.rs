use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiLifecycleState {
    #[default]
    Created,
    Published,
    Unpublished,
    Deprecated,
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DefinitionVersion {
    #[serde(rename = "V2")]
    V2,
    #[default]
    #[serde(rename = "V4")]
    V4,
    #[serde(rename = "FEDERATED")]
    Federated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncMode {
    #[default]
    FullyManaged,
    Management,
}

/// Where an API definition comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "origin", rename_all = "camelCase")]
pub enum OriginContext {
    #[default]
    Management,
    #[serde(rename_all = "camelCase")]
    Kubernetes { mode: SyncMode },
    #[serde(rename_all = "camelCase")]
    Integration {
        integration_id: String,
        provider: String,
    },
}

impl OriginContext {
    pub fn integration_id(&self) -> Option<&str> {
        match self {
            Self::Integration { integration_id, .. } => Some(integration_id),
            Self::Management | Self::Kubernetes { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Management => "management",
            Self::Kubernetes { .. } => "kubernetes",
            Self::Integration { .. } => "integration",
        }
    }

    /// Kubernetes-managed definitions are read-only from the console.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Self::Kubernetes {
                mode: SyncMode::FullyManaged
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Api {
    pub id: String,
    pub cross_id: Option<String>,
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub environment_id: String,
    pub lifecycle_state: ApiLifecycleState,
    pub visibility: Visibility,
    pub definition_version: DefinitionVersion,
    pub origin_context: OriginContext,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deployed_at: Option<DateTime<Utc>>,
}

impl Api {
    pub fn new(id: impl Into<String>, name: impl Into<String>, environment_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: "1.0".to_string(),
            environment_id: environment_id.into(),
            ..Default::default()
        }
    }

    pub fn is_published(&self) -> bool {
        self.lifecycle_state == ApiLifecycleState::Published
    }
}

impl Entity for Api {
    type Key = String;
    const KIND: &'static str = "Api";

    fn key(&self) -> String {
        self.id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_context_is_tagged_in_json() {
        let origin = OriginContext::Integration {
            integration_id: "int-1".to_string(),
            provider: "aws-api-gateway".to_string(),
        };
        let json = serde_json::to_value(&origin).unwrap();
        assert_eq!(json["origin"], "integration");
        assert_eq!(json["integrationId"], "int-1");

        let back: OriginContext = serde_json::from_value(json).unwrap();
        assert_eq!(back.integration_id(), Some("int-1"));
    }

    #[test]
    fn only_fully_managed_kubernetes_is_read_only() {
        assert!(OriginContext::Kubernetes { mode: SyncMode::FullyManaged }.is_read_only());
        assert!(!OriginContext::Kubernetes { mode: SyncMode::Management }.is_read_only());
        assert!(!OriginContext::Management.is_read_only());
    }
}

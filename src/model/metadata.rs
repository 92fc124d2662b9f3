use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataReferenceType {
    #[default]
    Api,
    Application,
    Environment,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetadataFormat {
    #[default]
    String,
    Numeric,
    Boolean,
    Date,
    Mail,
    Url,
}

/// Metadata entries are identified by owner and key, not by a surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataKey {
    pub reference_id: String,
    pub reference_type: MetadataReferenceType,
    pub key: String,
}

impl MetadataKey {
    pub fn new(
        reference_id: impl Into<String>,
        reference_type: MetadataReferenceType,
        key: impl Into<String>,
    ) -> Self {
        Self {
            reference_id: reference_id.into(),
            reference_type,
            key: key.into(),
        }
    }
}

impl fmt::Display for MetadataKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}/{}", self.reference_type, self.reference_id, self.key)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub reference_id: String,
    pub reference_type: MetadataReferenceType,
    pub key: String,
    pub name: String,
    pub value: String,
    pub format: MetadataFormat,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    pub fn metadata_key(&self) -> MetadataKey {
        MetadataKey::new(self.reference_id.clone(), self.reference_type, self.key.clone())
    }
}

impl Entity for Metadata {
    type Key = MetadataKey;
    const KIND: &'static str = "Metadata";

    fn key(&self) -> MetadataKey {
        self.metadata_key()
    }
}

/// API metadata as seen by API consumers: environment defaults merged with
/// API-specific values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiMetadata {
    pub api_id: String,
    pub key: String,
    pub name: String,
    pub value: Option<String>,
    pub default_value: Option<String>,
    pub format: MetadataFormat,
}

impl ApiMetadata {
    /// Own value if set, otherwise the environment default.
    pub fn effective_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.default_value.as_deref())
    }
}

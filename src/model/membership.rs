use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipReferenceType {
    #[default]
    Api,
    Application,
    Group,
    Integration,
    Environment,
    Organization,
}

impl fmt::Display for MembershipReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Api => "API",
            Self::Application => "APPLICATION",
            Self::Group => "GROUP",
            Self::Integration => "INTEGRATION",
            Self::Environment => "ENVIRONMENT",
            Self::Organization => "ORGANIZATION",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipMemberType {
    #[default]
    User,
    Group,
}

/// The thing a membership grants access to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipReference {
    pub reference_type: MembershipReferenceType,
    pub reference_id: String,
}

impl MembershipReference {
    pub fn new(reference_type: MembershipReferenceType, reference_id: impl Into<String>) -> Self {
        Self {
            reference_type,
            reference_id: reference_id.into(),
        }
    }
}

impl fmt::Display for MembershipReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.reference_type, self.reference_id)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Membership {
    pub id: String,
    pub reference_type: MembershipReferenceType,
    pub reference_id: String,
    pub member_type: MembershipMemberType,
    pub member_id: String,
    pub role_id: String,
    pub source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    pub fn new(
        id: impl Into<String>,
        reference: MembershipReference,
        member_id: impl Into<String>,
        role_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            reference_type: reference.reference_type,
            reference_id: reference.reference_id,
            member_id: member_id.into(),
            role_id: role_id.into(),
            source: "system".to_string(),
            ..Default::default()
        }
    }

    pub fn reference(&self) -> MembershipReference {
        MembershipReference::new(self.reference_type, self.reference_id.clone())
    }

    pub fn is_on(&self, reference: &MembershipReference) -> bool {
        self.reference_type == reference.reference_type && self.reference_id == reference.reference_id
    }
}

impl Entity for Membership {
    type Key = String;
    const KIND: &'static str = "Membership";

    fn key(&self) -> String {
        self.id.clone()
    }
}

use crate::core::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    #[default]
    Pending,
    Accepted,
    Paused,
    Rejected,
    Closed,
}

impl SubscriptionStatus {
    /// Statuses that still grant (or may grant) access.
    pub const ACTIVE: [SubscriptionStatus; 3] = [Self::Pending, Self::Accepted, Self::Paused];
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub api_id: String,
    pub plan_id: String,
    pub application_id: String,
    pub environment_id: String,
    pub status: SubscriptionStatus,
    pub request: Option<String>,
    pub reason: Option<String>,
    pub processed_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub starting_at: Option<DateTime<Utc>>,
    pub ending_at: Option<DateTime<Utc>>,
}

impl Subscription {
    pub fn new(
        id: impl Into<String>,
        api_id: impl Into<String>,
        plan_id: impl Into<String>,
        application_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            api_id: api_id.into(),
            plan_id: plan_id.into(),
            application_id: application_id.into(),
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        SubscriptionStatus::ACTIVE.contains(&self.status)
    }
}

impl Entity for Subscription {
    type Key = String;
    const KIND: &'static str = "Subscription";

    fn key(&self) -> String {
        self.id.clone()
    }
}

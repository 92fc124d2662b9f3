use crate::core::Result;
use crate::model::{Subscription, SubscriptionStatus};
use chrono::{DateTime, Utc};

pub trait SubscriptionCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<Subscription>;
    fn create(&self, subscription: Subscription) -> Result<Subscription>;
    fn update(&self, subscription: Subscription) -> Result<Subscription>;
    fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubscriptionCriteria {
    pub ids: Option<Vec<String>>,
    pub api_ids: Option<Vec<String>>,
    pub plan_ids: Option<Vec<String>>,
    pub application_ids: Option<Vec<String>>,
    pub environment_id: Option<String>,
    pub statuses: Option<Vec<SubscriptionStatus>>,
    /// Inclusive bounds on `created_at`.
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Bounds on `ending_at`; subscriptions without an end date never match.
    pub ending_at_after: Option<DateTime<Utc>>,
    pub ending_at_before: Option<DateTime<Utc>>,
}

pub trait SubscriptionQueryService: Send + Sync {
    /// Matches in insertion order.
    fn search(&self, criteria: &SubscriptionCriteria) -> Vec<Subscription>;

    fn find_active_by_application_and_plan(&self, application_id: &str, plan_id: &str) -> Vec<Subscription>;
}

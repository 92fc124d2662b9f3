use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{Subscription, SubscriptionStatus};
use crate::query::Filter;
use crate::service::{SubscriptionCriteria, SubscriptionCrudService, SubscriptionQueryService};
use crate::storage::Storage;

pub struct SubscriptionCrudServiceInMemory {
    subscriptions: CrudFacade<Subscription>,
}

impl SubscriptionCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            subscriptions: CrudFacade::with_config(config),
        }
    }

    pub fn backing(&self) -> &Storage<Subscription> {
        self.subscriptions.storage()
    }
}

impl Default for SubscriptionCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(SubscriptionCrudServiceInMemory, Subscription, subscriptions);

impl SubscriptionCrudService for SubscriptionCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<Subscription> {
        self.subscriptions.get(&id.to_string())
    }

    fn create(&self, subscription: Subscription) -> Result<Subscription> {
        self.subscriptions.create(subscription)
    }

    fn update(&self, subscription: Subscription) -> Result<Subscription> {
        self.subscriptions.update(subscription)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.subscriptions.delete(&id.to_string())
    }
}

#[derive(Default)]
pub struct SubscriptionQueryServiceInMemory {
    subscriptions: Storage<Subscription>,
}

impl SubscriptionQueryServiceInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn over(crud: &SubscriptionCrudServiceInMemory) -> Self {
        Self {
            subscriptions: Storage::shared_with(crud.backing()),
        }
    }
}

in_memory_alternative!(SubscriptionQueryServiceInMemory, Subscription, subscriptions);

impl SubscriptionQueryService for SubscriptionQueryServiceInMemory {
    fn search(&self, criteria: &SubscriptionCriteria) -> Vec<Subscription> {
        let ending_bounded = criteria.ending_at_after.is_some() || criteria.ending_at_before.is_some();

        Filter::new()
            .one_of(criteria.ids.as_deref(), |s: &Subscription| &s.id)
            .one_of(criteria.api_ids.as_deref(), |s: &Subscription| &s.api_id)
            .one_of(criteria.plan_ids.as_deref(), |s: &Subscription| &s.plan_id)
            .one_of(criteria.application_ids.as_deref(), |s: &Subscription| &s.application_id)
            .eq(criteria.environment_id.as_deref(), |s: &Subscription| s.environment_id.as_str())
            .one_of(criteria.statuses.as_deref(), |s: &Subscription| &s.status)
            .within(criteria.from, criteria.to, |s: &Subscription| s.created_at)
            .when(ending_bounded, |s: &Subscription| s.ending_at.is_some())
            .within(
                criteria.ending_at_after.map(Some),
                criteria.ending_at_before.map(Some),
                |s: &Subscription| s.ending_at,
            )
            .select(&self.subscriptions)
    }

    fn find_active_by_application_and_plan(&self, application_id: &str, plan_id: &str) -> Vec<Subscription> {
        Filter::new()
            .eq(Some(application_id), |s: &Subscription| s.application_id.as_str())
            .eq(Some(plan_id), |s: &Subscription| s.plan_id.as_str())
            .one_of(Some(&SubscriptionStatus::ACTIVE[..]), |s: &Subscription| &s.status)
            .select(&self.subscriptions)
    }
}

use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{Plan, PlanStatus};
use crate::query::{Filter, SortResolver, Sortable};
use crate::service::{PlanCrudService, PlanQueryService};
use crate::storage::Storage;

pub struct PlanCrudServiceInMemory {
    plans: CrudFacade<Plan>,
}

impl PlanCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            plans: CrudFacade::with_config(config),
        }
    }

    pub fn backing(&self) -> &Storage<Plan> {
        self.plans.storage()
    }
}

impl Default for PlanCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(PlanCrudServiceInMemory, Plan, plans);

impl PlanCrudService for PlanCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<Plan> {
        self.plans.get(&id.to_string())
    }

    fn find_by_id(&self, id: &str) -> Option<Plan> {
        self.plans.find_by_id(&id.to_string())
    }

    fn create(&self, plan: Plan) -> Result<Plan> {
        self.plans.create(plan)
    }

    fn update(&self, plan: Plan) -> Result<Plan> {
        self.plans.update(plan)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.plans.delete(&id.to_string())
    }
}

pub struct PlanQueryServiceInMemory {
    plans: Storage<Plan>,
    sorts: SortResolver<Plan>,
}

impl PlanQueryServiceInMemory {
    pub fn new() -> Self {
        Self {
            plans: Storage::new(),
            sorts: SortResolver::new().field("order", |plan: &Plan| plan.order),
        }
    }

    pub fn over(crud: &PlanCrudServiceInMemory) -> Self {
        Self {
            plans: Storage::shared_with(crud.backing()),
            ..Self::new()
        }
    }

    fn by_order(&self, plans: Vec<Plan>) -> Vec<Plan> {
        self.sorts.sorted(plans, Some(&Sortable::asc("order")))
    }
}

impl Default for PlanQueryServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(PlanQueryServiceInMemory, Plan, plans);

impl PlanQueryService for PlanQueryServiceInMemory {
    fn find_all_by_api_id(&self, api_id: &str) -> Vec<Plan> {
        let filter = Filter::new().eq(Some(api_id), |plan: &Plan| plan.api_id.as_str());
        self.by_order(filter.select(&self.plans))
    }

    fn find_by_api_and_status(&self, api_id: &str, statuses: &[PlanStatus]) -> Vec<Plan> {
        let filter = Filter::new()
            .eq(Some(api_id), |plan: &Plan| plan.api_id.as_str())
            .one_of(Some(statuses), |plan: &Plan| &plan.status);
        self.by_order(filter.select(&self.plans))
    }
}

use crate::core::Result;
use crate::model::{Plan, PlanStatus};

pub trait PlanCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<Plan>;
    fn find_by_id(&self, id: &str) -> Option<Plan>;
    fn create(&self, plan: Plan) -> Result<Plan>;
    fn update(&self, plan: Plan) -> Result<Plan>;
    fn delete(&self, id: &str) -> Result<()>;
}

pub trait PlanQueryService: Send + Sync {
    /// Plans of an API ordered by their `order` field.
    fn find_all_by_api_id(&self, api_id: &str) -> Vec<Plan>;

    fn find_by_api_and_status(&self, api_id: &str, statuses: &[PlanStatus]) -> Vec<Plan>;
}

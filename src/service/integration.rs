use crate::core::Result;
use crate::model::{IngestStartReply, Integration, IntegrationApi};
use crate::query::{Page, Pageable};

pub trait IntegrationCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<Integration>;
    fn find_by_id(&self, id: &str) -> Option<Integration>;
    fn create(&self, integration: Integration) -> Result<Integration>;
    fn update(&self, integration: Integration) -> Result<Integration>;
    fn delete(&self, id: &str) -> Result<()>;

    /// Most recently updated first.
    fn find_by_environment(&self, environment_id: &str, pageable: &Pageable) -> Page<Integration>;
}

/// Federation agent connected to a third-party gateway.
pub trait IntegrationAgent: Send + Sync {
    /// Ask the agent to start ingesting every API it knows for `integration_id`.
    fn start_ingest(&self, integration_id: &str, ingest_job_id: &str) -> IngestStartReply;

    fn fetch_all_apis(&self, integration_id: &str) -> Vec<IntegrationApi>;
}

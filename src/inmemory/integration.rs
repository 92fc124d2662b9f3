use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{IngestFailure, IngestStartReply, IngestStarted, Integration, IntegrationApi};
use crate::query::{Filter, Page, Pageable, SortResolver, Sortable, paginate};
use crate::service::{IntegrationAgent, IntegrationCrudService};
use crate::storage::{InMemoryAlternative, MapStorage, Resettable, Storage};
use tracing::{Level, event};

pub struct IntegrationCrudServiceInMemory {
    integrations: CrudFacade<Integration>,
    sorts: SortResolver<Integration>,
}

impl IntegrationCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            integrations: CrudFacade::with_config(config),
            sorts: SortResolver::new()
                .field("updated_at", |integration: &Integration| integration.updated_at),
        }
    }
}

impl Default for IntegrationCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(IntegrationCrudServiceInMemory, Integration, integrations);

impl IntegrationCrudService for IntegrationCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<Integration> {
        self.integrations.get(&id.to_string())
    }

    fn find_by_id(&self, id: &str) -> Option<Integration> {
        self.integrations.find_by_id(&id.to_string())
    }

    fn create(&self, integration: Integration) -> Result<Integration> {
        self.integrations.create(integration)
    }

    fn update(&self, integration: Integration) -> Result<Integration> {
        self.integrations.update(integration)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.integrations.delete(&id.to_string())
    }

    fn find_by_environment(&self, environment_id: &str, pageable: &Pageable) -> Page<Integration> {
        let matches = Filter::new()
            .eq(Some(environment_id), |i: &Integration| i.environment_id.as_str())
            .select(self.integrations.storage());
        let recent_first = self.sorts.sorted(matches, Some(&Sortable::desc("updated_at")));
        paginate(recent_first, pageable)
    }
}

/// Scriptable federation agent.
///
/// Tests seed the APIs the agent "discovers" with `init_with`, then choose how
/// `start_ingest` answers per integration with `configure_apis_number_to_ingest`
/// or `configure_failure`.
#[derive(Default)]
pub struct IntegrationAgentInMemory {
    apis: Storage<IntegrationApi>,
    totals: MapStorage<String, u64>,
    failures: MapStorage<String, String>,
}

impl IntegrationAgentInMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `start_ingest` report `total` APIs for `integration_id`.
    pub fn configure_apis_number_to_ingest(&self, integration_id: &str, total: u64) {
        self.failures.remove(&integration_id.to_string());
        self.totals.insert(integration_id.to_string(), total);
    }

    /// Make `start_ingest` fail for `integration_id`.
    pub fn configure_failure(&self, integration_id: &str, message: impl Into<String>) {
        self.failures.insert(integration_id.to_string(), message.into());
    }
}

impl Resettable for IntegrationAgentInMemory {
    fn reset(&self) {
        self.apis.reset();
        self.totals.reset();
        self.failures.reset();
    }
}

impl InMemoryAlternative<IntegrationApi> for IntegrationAgentInMemory {
    fn init_with(&self, items: Vec<IntegrationApi>) {
        self.apis.init_with(items);
    }

    fn storage(&self) -> Vec<IntegrationApi> {
        self.apis.snapshot()
    }
}

impl IntegrationAgent for IntegrationAgentInMemory {
    fn start_ingest(&self, integration_id: &str, ingest_job_id: &str) -> IngestStartReply {
        let key = integration_id.to_string();
        if let Some(message) = self.failures.get(&key) {
            event!(Level::DEBUG, integration = integration_id, %message, "ingest refused");
            return Err(IngestFailure {
                integration_id: key,
                message,
            });
        }

        // Without an explicit total the agent reports what it has been seeded with.
        let total = self.totals.get(&key).unwrap_or_else(|| {
            self.apis
                .read(|apis| apis.iter().filter(|api| api.integration_id == integration_id).count() as u64)
        });
        Ok(IngestStarted {
            integration_id: key,
            ingest_job_id: ingest_job_id.to_string(),
            total,
        })
    }

    fn fetch_all_apis(&self, integration_id: &str) -> Vec<IntegrationApi> {
        self.apis.filter(|api| api.integration_id == integration_id)
    }
}

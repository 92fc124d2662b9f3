use crate::config::InMemoryConfig;
use crate::core::{DeletePolicy, Result};
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::Application;
use crate::service::ApplicationCrudService;

pub struct ApplicationCrudServiceInMemory {
    applications: CrudFacade<Application>,
}

impl ApplicationCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            applications: CrudFacade::with_config(config),
        }
    }
}

impl Default for ApplicationCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(ApplicationCrudServiceInMemory, Application, applications);

impl ApplicationCrudService for ApplicationCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<Application> {
        self.applications.get(&id.to_string())
    }

    fn find_by_id(&self, id: &str) -> Option<Application> {
        self.applications.find_by_id(&id.to_string())
    }

    fn create(&self, application: Application) -> Result<Application> {
        self.applications.create(application)
    }

    fn update(&self, application: Application) -> Result<Application> {
        self.applications.update(application)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.applications.delete_with(&id.to_string(), DeletePolicy::Strict)
    }
}

use crate::core::Result;
use crate::model::Application;

pub trait ApplicationCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<Application>;
    fn find_by_id(&self, id: &str) -> Option<Application>;
    fn create(&self, application: Application) -> Result<Application>;
    fn update(&self, application: Application) -> Result<Application>;
    /// Fails with `NotFound` when the application does not exist.
    fn delete(&self, id: &str) -> Result<()>;
}

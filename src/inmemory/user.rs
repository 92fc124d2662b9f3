use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::BaseUser;
use crate::service::UserCrudService;

pub struct UserCrudServiceInMemory {
    users: CrudFacade<BaseUser>,
}

impl UserCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            users: CrudFacade::with_config(config),
        }
    }
}

impl Default for UserCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(UserCrudServiceInMemory, BaseUser, users);

impl UserCrudService for UserCrudServiceInMemory {
    fn get_base_user(&self, id: &str) -> Result<BaseUser> {
        self.users.get(&id.to_string())
    }

    fn find_base_user_by_id(&self, id: &str) -> Option<BaseUser> {
        self.users.find_by_id(&id.to_string())
    }
}

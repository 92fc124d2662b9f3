use crate::core::Result;
use crate::model::BaseUser;

pub trait UserCrudService: Send + Sync {
    /// Fails with `NotFound` when no user has this id.
    fn get_base_user(&self, id: &str) -> Result<BaseUser>;
    fn find_base_user_by_id(&self, id: &str) -> Option<BaseUser>;
}

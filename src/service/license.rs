use crate::core::Result;
use crate::model::License;

pub trait LicenseCrudService: Send + Sync {
    fn get_organization_license(&self, organization_id: &str) -> Option<License>;

    /// Fails with `IllegalState` when the organization already has one.
    fn create_organization_license(&self, organization_id: &str, license: Option<String>) -> Result<License>;

    fn update_organization_license(&self, organization_id: &str, license: Option<String>) -> Result<License>;
}

use crate::core::{Result, StoreError};
use crate::model::License;
use crate::service::LicenseCrudService;
use crate::storage::{InMemoryAlternative, MapStorage, Resettable};
use tracing::{Level, event};

/// Organization licenses keyed by organization id.
#[derive(Default)]
pub struct LicenseCrudServiceInMemory {
    licenses: MapStorage<String, License>,
}

impl LicenseCrudServiceInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resettable for LicenseCrudServiceInMemory {
    fn reset(&self) {
        self.licenses.reset();
    }
}

impl InMemoryAlternative<License> for LicenseCrudServiceInMemory {
    fn init_with(&self, items: Vec<License>) {
        self.licenses
            .init_with(items.into_iter().map(|license| (license.reference_id.clone(), license)));
    }

    fn storage(&self) -> Vec<License> {
        let mut all = self.licenses.values();
        all.sort_by(|left, right| left.reference_id.cmp(&right.reference_id));
        all
    }
}

impl LicenseCrudService for LicenseCrudServiceInMemory {
    fn get_organization_license(&self, organization_id: &str) -> Option<License> {
        self.licenses.get(&organization_id.to_string())
    }

    fn create_organization_license(&self, organization_id: &str, license: Option<String>) -> Result<License> {
        let key = organization_id.to_string();
        if self.licenses.contains_key(&key) {
            return Err(StoreError::IllegalState(format!(
                "organization {organization_id} already has a license"
            )));
        }

        let created = License::for_organization(organization_id, license);
        self.licenses.insert(key, created.clone());
        event!(Level::DEBUG, organization = organization_id, "license created");
        Ok(created)
    }

    fn update_organization_license(&self, organization_id: &str, license: Option<String>) -> Result<License> {
        let key = organization_id.to_string();
        if !self.licenses.contains_key(&key) {
            return Err(StoreError::not_found("License", organization_id));
        }

        let updated = License::for_organization(organization_id, license);
        self.licenses.insert(key, updated.clone());
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_create_for_same_organization_is_rejected() {
        let service = LicenseCrudServiceInMemory::new();
        service.create_organization_license("org-1", None).unwrap();

        let err = service
            .create_organization_license("org-1", Some("payload".to_string()))
            .unwrap_err();
        assert!(matches!(err, StoreError::IllegalState(_)));
        assert_eq!(service.get_organization_license("org-1").and_then(|l| l.license), None);
    }

    #[test]
    fn update_requires_existing_license() {
        let service = LicenseCrudServiceInMemory::new();
        assert!(
            service
                .update_organization_license("org-1", None)
                .unwrap_err()
                .is_not_found()
        );

        service.init_with(vec![License::for_organization("org-1", None)]);
        let updated = service
            .update_organization_license("org-1", Some("payload".to_string()))
            .unwrap();
        assert_eq!(updated.license.as_deref(), Some("payload"));
        assert_eq!(service.storage(), vec![updated]);
    }
}

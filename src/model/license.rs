use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LicenseReferenceType {
    #[default]
    Organization,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct License {
    pub reference_id: String,
    pub reference_type: LicenseReferenceType,
    /// Base64 license payload; `None` means the organization runs the community edition.
    pub license: Option<String>,
}

impl License {
    pub fn for_organization(organization_id: impl Into<String>, license: Option<String>) -> Self {
        Self {
            reference_id: organization_id.into(),
            reference_type: LicenseReferenceType::Organization,
            license,
        }
    }
}

use crate::core::Result;
use crate::model::{Api, ApiLifecycleState, DefinitionVersion, Visibility};
use crate::query::{Page, Pageable, Sortable};

pub trait ApiCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<Api>;
    fn find_by_id(&self, id: &str) -> Option<Api>;
    fn exists_by_id(&self, id: &str) -> bool;
    fn create(&self, api: Api) -> Result<Api>;
    fn update(&self, api: Api) -> Result<Api>;
    fn delete(&self, id: &str) -> Result<()>;
}

/// Optional API search criteria; unset fields do not constrain the search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiSearchCriteria {
    pub ids: Option<Vec<String>>,
    pub environment_id: Option<String>,
    /// Free-text pattern matched against the API name.
    pub name: Option<String>,
    pub cross_id: Option<String>,
    pub lifecycle_states: Option<Vec<ApiLifecycleState>>,
    pub visibility: Option<Visibility>,
    pub definition_versions: Option<Vec<DefinitionVersion>>,
    pub categories: Option<Vec<String>>,
    pub groups: Option<Vec<String>>,
    /// Only APIs ingested by this integration.
    pub integration_id: Option<String>,
}

impl ApiSearchCriteria {
    pub fn for_environment(environment_id: impl Into<String>) -> Self {
        Self {
            environment_id: Some(environment_id.into()),
            ..Default::default()
        }
    }
}

pub trait ApiQueryService: Send + Sync {
    /// Sortable fields: `name`, `created_at`, `updated_at`, `version`.
    /// Unknown fields sort by name.
    fn search(
        &self,
        criteria: &ApiSearchCriteria,
        sortable: Option<&Sortable>,
        pageable: Option<&Pageable>,
    ) -> Page<Api>;

    fn find_by_environment_and_cross_id(&self, environment_id: &str, cross_id: &str) -> Option<Api>;

    /// Full-text search over the API index.
    fn search_indexed(&self, query: &str) -> Result<Vec<String>>;
}

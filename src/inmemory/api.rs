use crate::config::InMemoryConfig;
use crate::core::{Result, StoreError};
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::Api;
use crate::query::{Filter, Page, Pageable, SortResolver, Sortable, paginate};
use crate::service::{ApiCrudService, ApiQueryService, ApiSearchCriteria};
use crate::storage::Storage;
use tracing::{Level, event};

pub struct ApiCrudServiceInMemory {
    apis: CrudFacade<Api>,
}

impl ApiCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            apis: CrudFacade::with_config(config),
        }
    }

    pub fn backing(&self) -> &Storage<Api> {
        self.apis.storage()
    }
}

impl Default for ApiCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(ApiCrudServiceInMemory, Api, apis);

impl ApiCrudService for ApiCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<Api> {
        self.apis.get(&id.to_string())
    }

    fn find_by_id(&self, id: &str) -> Option<Api> {
        self.apis.find_by_id(&id.to_string())
    }

    fn exists_by_id(&self, id: &str) -> bool {
        self.apis.exists(&id.to_string())
    }

    fn create(&self, api: Api) -> Result<Api> {
        self.apis.create(api)
    }

    fn update(&self, api: Api) -> Result<Api> {
        self.apis.update(api)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.apis.delete(&id.to_string())
    }
}

pub struct ApiQueryServiceInMemory {
    apis: Storage<Api>,
    sorts: SortResolver<Api>,
    default_pageable: Pageable,
}

fn api_sorts() -> SortResolver<Api> {
    SortResolver::new()
        .field("name", |api: &Api| api.name.to_lowercase())
        .field("created_at", |api: &Api| api.created_at)
        .field("updated_at", |api: &Api| api.updated_at)
        .field("version", |api: &Api| api.version.clone())
        .fallback("name")
}

impl ApiQueryServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            apis: Storage::new(),
            sorts: api_sorts(),
            default_pageable: config.default_pageable,
        }
    }

    /// Query side reading the data written through `crud`.
    pub fn over(crud: &ApiCrudServiceInMemory) -> Self {
        Self::over_with_config(crud, &InMemoryConfig::default())
    }

    pub fn over_with_config(crud: &ApiCrudServiceInMemory, config: &InMemoryConfig) -> Self {
        Self {
            apis: Storage::shared_with(crud.backing()),
            ..Self::with_config(config)
        }
    }
}

impl Default for ApiQueryServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(ApiQueryServiceInMemory, Api, apis);

impl ApiQueryService for ApiQueryServiceInMemory {
    fn search(
        &self,
        criteria: &ApiSearchCriteria,
        sortable: Option<&Sortable>,
        pageable: Option<&Pageable>,
    ) -> Page<Api> {
        let filter = Filter::new()
            .one_of(criteria.ids.as_deref(), |api: &Api| &api.id)
            .eq(criteria.environment_id.as_deref(), |api: &Api| api.environment_id.as_str())
            .matching(criteria.name.as_deref(), |api: &Api| api.name.as_str())
            .eq_opt(criteria.cross_id.as_deref(), |api: &Api| api.cross_id.as_deref())
            .one_of(criteria.lifecycle_states.as_deref(), |api: &Api| &api.lifecycle_state)
            .eq(criteria.visibility.as_ref(), |api: &Api| &api.visibility)
            .one_of(criteria.definition_versions.as_deref(), |api: &Api| &api.definition_version)
            .any_of(criteria.categories.as_deref(), |api: &Api| api.categories.as_slice())
            .any_of(criteria.groups.as_deref(), |api: &Api| api.groups.as_slice())
            .eq_opt(criteria.integration_id.as_deref(), |api: &Api| {
                api.origin_context.integration_id()
            });

        let mut matches = filter.select(&self.apis);
        self.sorts.sort(&mut matches, sortable);
        let page = paginate(matches, pageable.unwrap_or(&self.default_pageable));

        event!(Level::DEBUG, criteria = filter.len(), total = page.total_elements, "api search");
        page
    }

    fn find_by_environment_and_cross_id(&self, environment_id: &str, cross_id: &str) -> Option<Api> {
        self.apis.find(|api| {
            api.environment_id == environment_id && api.cross_id.as_deref() == Some(cross_id)
        })
    }

    fn search_indexed(&self, _query: &str) -> Result<Vec<String>> {
        Err(StoreError::unsupported(
            "full-text API index is not available in memory",
        ))
    }
}

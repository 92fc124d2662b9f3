use crate::config::InMemoryConfig;
use crate::core::{DeletePolicy, Result};
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{ApiMetadata, Metadata, MetadataKey};
use crate::service::{ApiMetadataQueryService, MetadataCrudService};
use crate::storage::{InMemoryAlternative, MultiMapStorage, Resettable};

pub struct MetadataCrudServiceInMemory {
    metadata: CrudFacade<Metadata>,
}

impl MetadataCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            metadata: CrudFacade::with_config(config),
        }
    }
}

impl Default for MetadataCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(MetadataCrudServiceInMemory, Metadata, metadata);

impl MetadataCrudService for MetadataCrudServiceInMemory {
    fn get(&self, key: &MetadataKey) -> Result<Metadata> {
        self.metadata.get(key)
    }

    fn create(&self, metadata: Metadata) -> Result<Metadata> {
        self.metadata.create(metadata)
    }

    fn update(&self, metadata: Metadata) -> Result<Metadata> {
        self.metadata.update(metadata)
    }

    fn delete(&self, key: &MetadataKey) -> Result<()> {
        self.metadata.delete_with(key, DeletePolicy::Strict)
    }
}

/// API metadata grouped by API id.
#[derive(Default)]
pub struct ApiMetadataQueryServiceInMemory {
    by_api: MultiMapStorage<String, ApiMetadata>,
}

impl ApiMetadataQueryServiceInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Resettable for ApiMetadataQueryServiceInMemory {
    fn reset(&self) {
        self.by_api.reset();
    }
}

impl InMemoryAlternative<ApiMetadata> for ApiMetadataQueryServiceInMemory {
    fn init_with(&self, items: Vec<ApiMetadata>) {
        self.by_api.reset();
        for item in items {
            self.by_api.push(item.api_id.clone(), item);
        }
    }

    /// Grouping loses the seeding order, so entries come back by API then key.
    fn storage(&self) -> Vec<ApiMetadata> {
        let mut all: Vec<ApiMetadata> = self.by_api.values().into_iter().flatten().collect();
        all.sort_by(|left, right| (&left.api_id, &left.key).cmp(&(&right.api_id, &right.key)));
        all
    }
}

impl ApiMetadataQueryService for ApiMetadataQueryServiceInMemory {
    fn find_api_metadata(&self, api_id: &str) -> Vec<ApiMetadata> {
        let mut entries = self.by_api.get_all(&api_id.to_string());
        entries.sort_by(|left, right| left.key.cmp(&right.key));
        entries
    }
}

use crate::core::Result;
use crate::model::{ApiMetadata, Metadata, MetadataKey};

pub trait MetadataCrudService: Send + Sync {
    fn get(&self, key: &MetadataKey) -> Result<Metadata>;
    fn create(&self, metadata: Metadata) -> Result<Metadata>;
    fn update(&self, metadata: Metadata) -> Result<Metadata>;
    /// Fails with `NotFound` when the entry does not exist.
    fn delete(&self, key: &MetadataKey) -> Result<()>;
}

pub trait ApiMetadataQueryService: Send + Sync {
    /// Metadata of one API keyed by metadata key; empty for unknown APIs.
    fn find_api_metadata(&self, api_id: &str) -> Vec<ApiMetadata>;
}

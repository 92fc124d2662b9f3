use crate::core::Result;
use crate::model::{DocumentationPage, PageReferenceType, PageType};

pub trait PageCrudService: Send + Sync {
    fn get(&self, id: &str) -> Result<DocumentationPage>;
    fn find_by_id(&self, id: &str) -> Option<DocumentationPage>;
    fn create(&self, page: DocumentationPage) -> Result<DocumentationPage>;
    fn update(&self, page: DocumentationPage) -> Result<DocumentationPage>;
    fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageCriteria {
    pub reference_type: Option<PageReferenceType>,
    pub reference_id: Option<String>,
    pub page_type: Option<PageType>,
    pub parent_id: Option<String>,
    /// Only pages without a parent.
    pub root_only: bool,
    pub published: Option<bool>,
    pub name: Option<String>,
}

pub trait PageQueryService: Send + Sync {
    /// Matches ordered by their `order` field.
    fn search(&self, criteria: &PageCriteria) -> Vec<DocumentationPage>;

    fn find_homepage(&self, reference_type: PageReferenceType, reference_id: &str) -> Option<DocumentationPage>;
}

use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::{DocumentationPage, PageReferenceType};
use crate::query::{Filter, SortResolver, Sortable};
use crate::service::{PageCriteria, PageCrudService, PageQueryService};
use crate::storage::Storage;

pub struct PageCrudServiceInMemory {
    pages: CrudFacade<DocumentationPage>,
}

impl PageCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            pages: CrudFacade::with_config(config),
        }
    }

    pub fn backing(&self) -> &Storage<DocumentationPage> {
        self.pages.storage()
    }
}

impl Default for PageCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(PageCrudServiceInMemory, DocumentationPage, pages);

impl PageCrudService for PageCrudServiceInMemory {
    fn get(&self, id: &str) -> Result<DocumentationPage> {
        self.pages.get(&id.to_string())
    }

    fn find_by_id(&self, id: &str) -> Option<DocumentationPage> {
        self.pages.find_by_id(&id.to_string())
    }

    fn create(&self, page: DocumentationPage) -> Result<DocumentationPage> {
        self.pages.create(page)
    }

    fn update(&self, page: DocumentationPage) -> Result<DocumentationPage> {
        self.pages.update(page)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.pages.delete(&id.to_string())
    }
}

pub struct PageQueryServiceInMemory {
    pages: Storage<DocumentationPage>,
    sorts: SortResolver<DocumentationPage>,
}

impl PageQueryServiceInMemory {
    pub fn new() -> Self {
        Self {
            pages: Storage::new(),
            sorts: SortResolver::new()
                .field("order", |page: &DocumentationPage| page.order)
                .field("name", |page: &DocumentationPage| page.name.to_lowercase()),
        }
    }

    pub fn over(crud: &PageCrudServiceInMemory) -> Self {
        Self {
            pages: Storage::shared_with(crud.backing()),
            ..Self::new()
        }
    }
}

impl Default for PageQueryServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(PageQueryServiceInMemory, DocumentationPage, pages);

impl PageQueryService for PageQueryServiceInMemory {
    fn search(&self, criteria: &PageCriteria) -> Vec<DocumentationPage> {
        let matches = Filter::new()
            .eq(criteria.reference_type.as_ref(), |p: &DocumentationPage| &p.reference_type)
            .eq(criteria.reference_id.as_deref(), |p: &DocumentationPage| p.reference_id.as_str())
            .eq(criteria.page_type.as_ref(), |p: &DocumentationPage| &p.page_type)
            .eq_opt(criteria.parent_id.as_deref(), |p: &DocumentationPage| p.parent_id.as_deref())
            .when(criteria.root_only, |p: &DocumentationPage| p.parent_id.is_none())
            .eq(criteria.published.as_ref(), |p: &DocumentationPage| &p.published)
            .matching(criteria.name.as_deref(), |p: &DocumentationPage| p.name.as_str())
            .select(&self.pages);
        self.sorts.sorted(matches, Some(&Sortable::asc("order")))
    }

    fn find_homepage(&self, reference_type: PageReferenceType, reference_id: &str) -> Option<DocumentationPage> {
        self.pages.find(|page| {
            page.homepage && page.reference_type == reference_type && page.reference_id == reference_id
        })
    }
}

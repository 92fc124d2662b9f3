use crate::config::InMemoryConfig;
use crate::core::Result;
use crate::facade::CrudFacade;
use crate::in_memory_alternative;
use crate::model::Audit;
use crate::query::{Filter, Page, Pageable, SortResolver, Sortable, paginate};
use crate::service::{AuditCriteria, AuditCrudService, AuditQueryService};

/// Audit trail fake. Writes and reads go through the same instance.
pub struct AuditCrudServiceInMemory {
    audits: CrudFacade<Audit>,
    sorts: SortResolver<Audit>,
}

impl AuditCrudServiceInMemory {
    pub fn new() -> Self {
        Self::with_config(&InMemoryConfig::default())
    }

    pub fn with_config(config: &InMemoryConfig) -> Self {
        Self {
            audits: CrudFacade::with_config(config),
            sorts: SortResolver::new().field("created_at", |audit: &Audit| audit.created_at),
        }
    }
}

impl Default for AuditCrudServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

in_memory_alternative!(AuditCrudServiceInMemory, Audit, audits);

impl AuditCrudService for AuditCrudServiceInMemory {
    fn create(&self, audit: Audit) -> Result<Audit> {
        self.audits.create(audit)
    }
}

impl AuditQueryService for AuditCrudServiceInMemory {
    fn search(&self, criteria: &AuditCriteria, pageable: &Pageable) -> Page<Audit> {
        let matches = Filter::new()
            .eq(criteria.organization_id.as_deref(), |a: &Audit| a.organization_id.as_str())
            .one_of(criteria.environment_ids.as_deref(), |a: &Audit| &a.environment_id)
            .eq(criteria.reference_type.as_ref(), |a: &Audit| &a.reference_type)
            .one_of(criteria.reference_ids.as_deref(), |a: &Audit| &a.reference_id)
            .one_of(criteria.events.as_deref(), |a: &Audit| &a.event)
            .within(criteria.from, criteria.to, |a: &Audit| a.created_at)
            .select(self.audits.storage());

        let newest_first = self.sorts.sorted(matches, Some(&Sortable::desc("created_at")));
        paginate(newest_first, pageable)
    }
}

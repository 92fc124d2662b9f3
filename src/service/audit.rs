use crate::core::Result;
use crate::model::{Audit, AuditReferenceType};
use crate::query::{Page, Pageable};
use chrono::{DateTime, Utc};

pub trait AuditCrudService: Send + Sync {
    fn create(&self, audit: Audit) -> Result<Audit>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditCriteria {
    pub organization_id: Option<String>,
    pub environment_ids: Option<Vec<String>>,
    pub reference_type: Option<AuditReferenceType>,
    pub reference_ids: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

pub trait AuditQueryService: Send + Sync {
    /// Newest first.
    fn search(&self, criteria: &AuditCriteria, pageable: &Pageable) -> Page<Audit>;
}

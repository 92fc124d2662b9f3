//! Imports grouped by what a test is wiring.
//!
//! `fakes` covers seeding and resetting in-memory services.
//! `contracts` is the service traits those fakes stand in for.

pub mod fakes {
    //! Fake services plus the fixture contract they share.
    pub use crate::fixtures::{load_json, seed};
    pub use crate::inmemory::{
        ApiCrudServiceInMemory, ApiMetadataQueryServiceInMemory, ApiQueryServiceInMemory,
        ApplicationCrudServiceInMemory, AuditCrudServiceInMemory, ConnectionLogsCrudServiceInMemory,
        IntegrationAgentInMemory, IntegrationCrudServiceInMemory, LicenseCrudServiceInMemory,
        MembershipCrudServiceInMemory, MembershipQueryServiceInMemory, MetadataCrudServiceInMemory,
        PageCrudServiceInMemory, PageQueryServiceInMemory, PlanCrudServiceInMemory,
        PlanQueryServiceInMemory, SubscriptionCrudServiceInMemory, SubscriptionQueryServiceInMemory,
        UserCrudServiceInMemory,
    };
    pub use crate::storage::{InMemoryAlternative, Resettable, reset_all};
}

pub mod contracts {
    //! Service traits and their criteria types.
    pub use crate::query::{Page, Pageable, Sortable};
    pub use crate::service::{
        ApiCrudService, ApiMetadataQueryService, ApiQueryService, ApiSearchCriteria,
        ApplicationCrudService, AuditCriteria, AuditCrudService, AuditQueryService,
        ConnectionLogCriteria, ConnectionLogsCrudService, IntegrationAgent, IntegrationCrudService,
        LicenseCrudService, MembershipCrudService, MembershipQueryService, MetadataCrudService,
        PageCriteria, PageCrudService, PageQueryService, PlanCrudService, PlanQueryService,
        SubscriptionCriteria, SubscriptionCrudService, SubscriptionQueryService, UserCrudService,
    };
}

pub use contracts::*;
pub use fakes::*;

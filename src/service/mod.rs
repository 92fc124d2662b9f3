//! Repository-shaped service contracts called by domain code.
//!
//! The in-memory fakes in [`crate::inmemory`] implement these so a test can
//! hand them to a service-under-test in place of the real repositories.

pub mod api;
pub mod application;
pub mod audit;
pub mod connection_log;
pub mod integration;
pub mod license;
pub mod membership;
pub mod metadata;
pub mod page;
pub mod plan;
pub mod subscription;
pub mod user;

pub use api::{ApiCrudService, ApiQueryService, ApiSearchCriteria};
pub use application::ApplicationCrudService;
pub use audit::{AuditCriteria, AuditCrudService, AuditQueryService};
pub use connection_log::{ConnectionLogCriteria, ConnectionLogsCrudService};
pub use integration::{IntegrationAgent, IntegrationCrudService};
pub use license::LicenseCrudService;
pub use membership::{MembershipCrudService, MembershipQueryService};
pub use metadata::{ApiMetadataQueryService, MetadataCrudService};
pub use page::{PageCriteria, PageCrudService, PageQueryService};
pub use plan::{PlanCrudService, PlanQueryService};
pub use subscription::{SubscriptionCriteria, SubscriptionCrudService, SubscriptionQueryService};
pub use user::UserCrudService;

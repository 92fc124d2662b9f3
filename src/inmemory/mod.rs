//! Test doubles for the persistence-facing services.
//!
//! Each fake keeps its data in a shared-handle storage and implements
//! [`InMemoryAlternative`](crate::storage::InMemoryAlternative) so tests can
//! seed, inspect and reset it.

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

pub use api::{ApiCrudServiceInMemory, ApiQueryServiceInMemory};
pub use application::ApplicationCrudServiceInMemory;
pub use audit::AuditCrudServiceInMemory;
pub use connection_log::ConnectionLogsCrudServiceInMemory;
pub use integration::{IntegrationAgentInMemory, IntegrationCrudServiceInMemory};
pub use license::LicenseCrudServiceInMemory;
pub use membership::{MembershipCrudServiceInMemory, MembershipQueryServiceInMemory};
pub use metadata::{ApiMetadataQueryServiceInMemory, MetadataCrudServiceInMemory};
pub use page::{PageCrudServiceInMemory, PageQueryServiceInMemory};
pub use plan::{PlanCrudServiceInMemory, PlanQueryServiceInMemory};
pub use subscription::{SubscriptionCrudServiceInMemory, SubscriptionQueryServiceInMemory};
pub use user::UserCrudServiceInMemory;

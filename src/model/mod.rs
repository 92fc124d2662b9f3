//! Domain payloads stored by the in-memory services.

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

pub use api::{Api, ApiLifecycleState, DefinitionVersion, OriginContext, SyncMode, Visibility};
pub use application::{Application, ApplicationStatus, ApplicationType};
pub use audit::{Audit, AuditReferenceType};
pub use connection_log::{ConnectionLog, HttpMethod};
pub use integration::{IngestFailure, IngestStartReply, IngestStarted, Integration, IntegrationApi};
pub use license::{License, LicenseReferenceType};
pub use membership::{Membership, MembershipMemberType, MembershipReference, MembershipReferenceType};
pub use metadata::{ApiMetadata, Metadata, MetadataFormat, MetadataKey, MetadataReferenceType};
pub use page::{DocumentationPage, PageReferenceType, PageType};
pub use plan::{Plan, PlanSecurityType, PlanStatus, PlanValidation};
pub use subscription::{Subscription, SubscriptionStatus};
pub use user::BaseUser;

pub mod audit;

pub use audit::{AuditActor, AuditDomainService, AuditEntry, AuditInfo, SYSTEM_USER, TOKEN_SOURCE};

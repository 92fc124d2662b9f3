/// Audit domain service tests
///
/// Audit records built with a pinned clock and id source, read back through
/// the audit fake.
/// Run with: cargo test --test audit_domain_service_tests

use apim_inmemory::core::{FixedTimeProvider, SequenceIdGenerator};
use apim_inmemory::domain_service::{AuditActor, AuditDomainService, AuditEntry, AuditInfo, SYSTEM_USER};
use apim_inmemory::model::{AuditReferenceType, BaseUser};
use apim_inmemory::prelude::*;
use chrono::{Duration, TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

struct Fixture {
    audits: Arc<AuditCrudServiceInMemory>,
    users: Arc<UserCrudServiceInMemory>,
    clock: Arc<FixedTimeProvider>,
    service: AuditDomainService,
}

fn setup() -> Fixture {
    let audits = Arc::new(AuditCrudServiceInMemory::new());
    let users = Arc::new(UserCrudServiceInMemory::new());
    let clock = Arc::new(FixedTimeProvider::new(
        Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap(),
    ));
    let service = AuditDomainService::new(
        audits.clone(),
        users.clone(),
        clock.clone(),
        Arc::new(SequenceIdGenerator::new("audit")),
    );
    Fixture {
        audits,
        users,
        clock,
        service,
    }
}

#[test]
fn test_audit_is_stamped_with_injected_clock_and_ids() {
    let Fixture { audits, service, .. } = setup();
    let info = AuditInfo::new("DEFAULT", "DEFAULT").by("user-1");

    let audit = service
        .create_audit_log(
            &info,
            AuditEntry::new(AuditReferenceType::Api, "api-1", "API_CREATED").property("API", "api-1"),
        )
        .unwrap();

    assert_eq!(audit.id, "audit-1");
    assert_eq!(audit.user, "user-1");
    assert_eq!(audit.created_at, Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap());
    assert_eq!(audit.properties.get("API").map(String::as_str), Some("api-1"));
    assert_eq!(audits.storage(), vec![audit]);
}

#[test]
fn test_missing_actor_is_recorded_as_system() {
    let Fixture { service, .. } = setup();
    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT"),
            AuditEntry::new(AuditReferenceType::Environment, "DEFAULT", "LICENSE_UPDATED"),
        )
        .unwrap();

    assert_eq!(audit.user, SYSTEM_USER);
    assert_eq!(audit.patch, "[]");
}

#[test]
fn test_patch_describes_changed_fields() {
    let Fixture { service, .. } = setup();
    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT"),
            AuditEntry::new(AuditReferenceType::Api, "api-1", "API_UPDATED").change(
                Some(json!({ "name": "Petstore", "version": "1" })),
                Some(json!({ "name": "Petstore", "version": "2" })),
            ),
        )
        .unwrap();

    let patch: Value = serde_json::from_str(&audit.patch).unwrap();
    assert_eq!(patch, json!([{ "op": "replace", "path": "/version", "value": "2" }]));
}

#[test]
fn test_audits_are_searchable_newest_first() {
    let Fixture {
        audits, clock, service, ..
    } = setup();
    let info = AuditInfo::new("DEFAULT", "DEFAULT");
    let start = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();

    for (minute, event) in [(0, "API_CREATED"), (1, "API_UPDATED"), (2, "API_UPDATED")] {
        clock.set(start + Duration::minutes(minute));
        service
            .create_audit_log(&info, AuditEntry::new(AuditReferenceType::Api, "api-1", event))
            .unwrap();
    }

    let page = audits.search(
        &AuditCriteria {
            events: Some(vec!["API_UPDATED".to_string()]),
            ..Default::default()
        },
        &Pageable::new(1, 1),
    );
    assert_eq!(page.total_elements, 2);
    assert_eq!(page.content[0].id, "audit-3");
}

#[test]
fn test_patch_lists_additions_before_replacements() {
    let Fixture { service, .. } = setup();
    let original = json!({
        "id": "sub-id",
        "apiId": "api-id",
        "status": "PENDING",
        "requestMessage": "request-message"
    });
    let mut accepted = original.clone();
    accepted["status"] = json!("ACCEPTED");
    accepted["reasonMessage"] = json!("accepted");

    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT").by(SYSTEM_USER),
            AuditEntry::new(AuditReferenceType::Api, "api-id", "SUBSCRIPTION_UPDATED")
                .change(Some(original), Some(accepted)),
        )
        .unwrap();

    assert_eq!(
        audit.patch,
        r#"[{"op":"add","path":"/reasonMessage","value":"accepted"},{"op":"replace","path":"/status","value":"ACCEPTED"}]"#
    );
}

#[test]
fn test_patch_descends_into_nested_objects() {
    let Fixture { service, .. } = setup();
    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT"),
            AuditEntry::new(AuditReferenceType::Api, "api-1", "API_UPDATED").change(
                Some(json!({ "a": { "b": 1, "c": 2 } })),
                Some(json!({ "a": { "b": 1, "c": 3 } })),
            ),
        )
        .unwrap();

    assert_eq!(audit.patch, r#"[{"op":"replace","path":"/a/c","value":3}]"#);
}

#[test]
fn test_token_actor_is_recorded_with_display_name() {
    let Fixture { users, service, .. } = setup();
    users.init_with(vec![BaseUser::new("user-id").named("Jane", "Doe")]);

    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT")
                .by(AuditActor::user("user-id").with_source("token", "source-id")),
            AuditEntry::new(AuditReferenceType::Api, "api-id", "SUBSCRIPTION_UPDATED"),
        )
        .unwrap();

    assert_eq!(audit.user, r#"Jane Doe - (using token "source-id")"#);
    assert_eq!(audit.patch, "[]");
}

#[test]
fn test_unknown_token_user_is_not_found() {
    let Fixture { audits, service, .. } = setup();
    let err = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT")
                .by(AuditActor::user("ghost").with_source("token", "source-id")),
            AuditEntry::new(AuditReferenceType::Api, "api-id", "SUBSCRIPTION_UPDATED"),
        )
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(audits.storage().is_empty());
}

#[test]
fn test_non_token_source_keeps_user_id() {
    let Fixture { service, .. } = setup();
    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT")
                .by(AuditActor::user("user-id").with_source("memory", "admin")),
            AuditEntry::new(AuditReferenceType::Api, "api-id", "API_UPDATED"),
        )
        .unwrap();

    assert_eq!(audit.user, "user-id");
}

#[test]
fn test_entry_timestamp_wins_over_clock() {
    let Fixture { service, .. } = setup();
    let happened = Utc.with_ymd_and_hms(2020, 2, 2, 20, 22, 2).unwrap();

    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT"),
            AuditEntry::new(AuditReferenceType::Api, "api-id", "SUBSCRIPTION_CLOSED").at(happened),
        )
        .unwrap();

    assert_eq!(audit.created_at, happened);
}

#[test]
fn test_organization_audit_has_no_environment() {
    let Fixture { service, .. } = setup();
    let audit = service
        .create_audit_log(
            &AuditInfo::new("DEFAULT", "DEFAULT"),
            AuditEntry::new(AuditReferenceType::Organization, "DEFAULT", "USER_CREATED"),
        )
        .unwrap();

    assert_eq!(audit.organization_id, "DEFAULT");
    assert!(audit.environment_id.is_empty());
}

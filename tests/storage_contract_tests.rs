/// Fixture contract tests
///
/// Seeding, inspecting and resetting fakes, and the CRUD semantics every
/// entity store shares.
/// Run with: cargo test --test storage_contract_tests

use apim_inmemory::StoreError;
use apim_inmemory::model::{Api, Application, Plan, Subscription};
use apim_inmemory::prelude::*;
use std::sync::Arc;
use std::thread;

fn apis(count: usize) -> Vec<Api> {
    (0..count)
        .map(|i| Api::new(format!("api-{}", i), format!("Api {}", i), "DEFAULT"))
        .collect()
}

#[test]
fn test_init_with_then_storage_returns_same_sequence() {
    let fake = ApiCrudServiceInMemory::new();
    let seeded = apis(4);

    fake.init_with(seeded.clone());
    assert_eq!(fake.storage(), seeded);

    // seeding again replaces, never appends
    fake.init_with(apis(2));
    assert_eq!(fake.storage().len(), 2);
}

#[test]
fn test_reset_is_idempotent() {
    let fake = PlanCrudServiceInMemory::new();
    fake.init_with(vec![Plan::new("p1", "api-1", "Gold")]);

    fake.reset();
    fake.reset();
    assert!(fake.storage().is_empty());
}

#[test]
fn test_storage_is_a_copy() {
    let fake = ApiCrudServiceInMemory::new();
    fake.init_with(apis(1));

    let mut copy = fake.storage();
    copy.clear();
    assert_eq!(fake.storage().len(), 1);
}

#[test]
fn test_create_then_find_by_id() {
    let fake = ApiCrudServiceInMemory::new();
    let api = Api::new("api-1", "Petstore", "DEFAULT");

    let created = fake.create(api.clone()).unwrap();
    assert_eq!(created, api);
    assert_eq!(fake.find_by_id("api-1"), Some(api));
    assert!(fake.exists_by_id("api-1"));
}

#[test]
fn test_update_replaces_in_place() {
    let fake = ApiCrudServiceInMemory::new();
    fake.init_with(apis(3));

    let mut renamed = Api::new("api-1", "Renamed", "DEFAULT");
    renamed.version = "2.0".to_string();
    fake.update(renamed.clone()).unwrap();

    let stored = fake.storage();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[1], renamed);
    assert_eq!(stored[0].id, "api-0");
    assert_eq!(stored[2].id, "api-2");
}

#[test]
fn test_update_of_missing_entity_fails_and_changes_nothing() {
    let fake = ApiCrudServiceInMemory::new();
    fake.init_with(apis(2));
    let before = fake.storage();

    let err = fake.update(Api::new("ghost", "Ghost", "DEFAULT")).unwrap_err();
    assert_eq!(err, StoreError::not_found("Api", "ghost"));
    assert_eq!(fake.storage(), before);
}

#[test]
fn test_lenient_delete_of_missing_key_is_noop() {
    let fake = ApiCrudServiceInMemory::new();
    fake.init_with(apis(2));

    fake.delete("ghost").unwrap();
    assert_eq!(fake.storage().len(), 2);

    fake.delete("api-0").unwrap();
    assert_eq!(fake.storage().len(), 1);
    assert!(fake.find_by_id("api-0").is_none());
}

#[test]
fn test_application_delete_is_strict() {
    let fake = ApplicationCrudServiceInMemory::new();
    fake.init_with(vec![Application::new("app-1", "Mobile", "DEFAULT")]);

    let err = fake.delete("ghost").unwrap_err();
    assert!(err.is_not_found());

    fake.delete("app-1").unwrap();
    assert!(fake.storage().is_empty());
}

#[test]
fn test_get_of_missing_entity_is_not_found() {
    let fake = SubscriptionCrudServiceInMemory::new();
    let err = fake.get("sub-1").unwrap_err();
    assert!(matches!(err, StoreError::NotFound { kind: "Subscription", .. }));
}

#[test]
fn test_reset_all_across_entity_types() {
    let apis_fake = ApiCrudServiceInMemory::new();
    let plans = PlanCrudServiceInMemory::new();
    let subscriptions = SubscriptionCrudServiceInMemory::new();
    let licenses = LicenseCrudServiceInMemory::new();

    apis_fake.init_with(apis(2));
    plans.init_with(vec![Plan::new("p1", "api-0", "Gold")]);
    subscriptions.init_with(vec![Subscription::new("s1", "api-0", "p1", "app-1")]);
    licenses.create_organization_license("DEFAULT", None).unwrap();

    reset_all(&[&apis_fake, &plans, &subscriptions, &licenses]);

    assert!(apis_fake.storage().is_empty());
    assert!(plans.storage().is_empty());
    assert!(subscriptions.storage().is_empty());
    assert!(licenses.storage().is_empty());
}

#[test]
fn test_query_fake_over_crud_fake_shares_data() {
    let crud = SubscriptionCrudServiceInMemory::new();
    let query = SubscriptionQueryServiceInMemory::over(&crud);

    crud.create(Subscription::new("s1", "api-1", "p1", "app-1")).unwrap();
    assert_eq!(query.storage().len(), 1);

    // resetting either side clears the shared data
    query.reset();
    assert!(crud.storage().is_empty());
}

#[test]
fn test_separately_built_fakes_do_not_share() {
    let crud = SubscriptionCrudServiceInMemory::new();
    let query = SubscriptionQueryServiceInMemory::new();

    crud.create(Subscription::new("s1", "api-1", "p1", "app-1")).unwrap();
    assert!(query.storage().is_empty());
}

#[test]
fn test_concurrent_creates_are_all_kept() {
    let fake = Arc::new(ApiCrudServiceInMemory::new());
    let mut handles = vec![];

    for worker in 0..4 {
        let fake = Arc::clone(&fake);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                let id = format!("api-{}-{}", worker, i);
                fake.create(Api::new(id.clone(), id, "DEFAULT")).unwrap();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(fake.storage().len(), 100);
}

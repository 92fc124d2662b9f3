//! Seed fakes from JSON fixture text.
//!
//! Payloads use the camelCase representation of the `model` types.

use crate::core::Result;
use crate::storage::InMemoryAlternative;
use serde::de::DeserializeOwned;

/// Decode a JSON array of entities.
///
/// ```
/// use apim_inmemory::fixtures::load_json;
/// use apim_inmemory::model::License;
///
/// let licenses: Vec<License> = load_json(
///     r#"[{"referenceId": "org-1", "referenceType": "ORGANIZATION", "license": null}]"#,
/// ).unwrap();
/// assert_eq!(licenses[0].reference_id, "org-1");
/// ```
pub fn load_json<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Decode `json` and replace the contents of `fake` with it.
pub fn seed<T, A>(fake: &A, json: &str) -> Result<usize>
where
    T: DeserializeOwned,
    A: InMemoryAlternative<T> + ?Sized,
{
    let items: Vec<T> = load_json(json)?;
    let count = items.len();
    fake.init_with(items);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StoreError;
    use crate::inmemory::ApiCrudServiceInMemory;
    use crate::model::{Api, ApiLifecycleState};
    use crate::service::ApiCrudService;

    #[test]
    fn seed_replaces_fake_contents() {
        let fake = ApiCrudServiceInMemory::new();
        fake.init_with(vec![Api::new("stale", "stale", "DEFAULT")]);

        let json = r#"[
            {"id": "api-1", "name": "Petstore", "environmentId": "DEFAULT", "lifecycleState": "PUBLISHED"},
            {"id": "api-2", "name": "Echo", "environmentId": "DEFAULT"}
        ]"#;
        assert_eq!(seed::<Api, _>(&fake, json).unwrap(), 2);

        assert!(fake.find_by_id("stale").is_none());
        assert_eq!(fake.get("api-1").unwrap().lifecycle_state, ApiLifecycleState::Published);
    }

    #[test]
    fn malformed_fixture_is_a_fixture_error() {
        let err = load_json::<Api>("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Fixture(_)));
    }
}

// ============================================================================
// APIM in-memory services
// ============================================================================
//
// Storage, query and CRUD building blocks plus ready-made fakes for the
// persistence-facing services of an API management platform.
//
// ============================================================================

//! Hand the fakes to the code under test, seed them, assert on `storage()`,
//! and reset between tests:
//!
//! ```
//! use apim_inmemory::model::Api;
//! use apim_inmemory::prelude::*;
//!
//! let apis = ApiCrudServiceInMemory::new();
//! let query = ApiQueryServiceInMemory::over(&apis);
//! apis.init_with(vec![Api::new("api-1", "Petstore", "DEFAULT")]);
//!
//! let page = query.search(&ApiSearchCriteria::for_environment("DEFAULT"), None, None);
//! assert_eq!(page.total_elements, 1);
//!
//! reset_all(&[&apis, &query]);
//! assert!(apis.storage().is_empty());
//! ```

pub mod config;
pub mod core;
pub mod domain_service;
pub mod facade;
pub mod fixtures;
pub mod inmemory;
pub mod model;
pub mod prelude;
pub mod query;
pub mod service;
pub mod storage;

// Re-export main types for convenience
pub use crate::config::InMemoryConfig;
pub use crate::core::{DeletePolicy, Entity, Result, StoreError};
pub use crate::facade::CrudFacade;
pub use crate::query::{Filter, Page, Pageable, Sortable, paginate};
pub use crate::storage::{InMemoryAlternative, MapStorage, Resettable, Storage, reset_all};

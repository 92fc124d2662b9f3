use crate::core::Result;
use crate::query::Pageable;
use serde::{Deserialize, Serialize};

/// Settings shared by the in-memory services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InMemoryConfig {
    /// Page used by searches called without a page request
    pub default_pageable: Pageable,

    /// Emit a DEBUG event for every create/update/delete
    pub log_mutations: bool,
}

impl InMemoryConfig {
    pub fn new() -> Self {
        Self {
            default_pageable: Pageable::default(),
            log_mutations: true,
        }
    }

    /// Set the default page request
    pub fn default_pageable(mut self, pageable: Pageable) -> Self {
        self.default_pageable = pageable;
        self
    }

    /// Set the default page size, keeping the default page number
    pub fn default_page_size(mut self, page_size: u32) -> Self {
        self.default_pageable.page_size = page_size;
        self
    }

    /// Toggle mutation logging
    pub fn log_mutations(mut self, enabled: bool) -> Self {
        self.log_mutations = enabled;
        self
    }

    /// Parse from a JSON document; missing fields take their defaults.
    ///
    /// ```
    /// use apim_inmemory::InMemoryConfig;
    ///
    /// let config = InMemoryConfig::from_json(r#"{ "logMutations": false }"#).unwrap();
    /// assert!(!config.log_mutations);
    /// assert_eq!(config.default_pageable.page_size, 10);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for InMemoryConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StoreError;

    #[test]
    fn defaults() {
        let config = InMemoryConfig::default();
        assert_eq!(config.default_pageable, Pageable::new(1, 10));
        assert!(config.log_mutations);
    }

    #[test]
    fn builder_chain() {
        let config = InMemoryConfig::new().default_page_size(25).log_mutations(false);
        assert_eq!(config.default_pageable, Pageable::new(1, 25));
        assert!(!config.log_mutations);
    }

    #[test]
    fn from_json_reads_nested_pageable() {
        let config = InMemoryConfig::from_json(
            r#"{ "defaultPageable": { "pageNumber": 2, "pageSize": 5 } }"#,
        )
        .unwrap();
        assert_eq!(config.default_pageable, Pageable::new(2, 5));
        assert!(config.log_mutations);
    }

    #[test]
    fn from_json_rejects_unknown_fields() {
        let err = InMemoryConfig::from_json(r#"{ "maxConnections": 3 }"#).unwrap_err();
        assert!(matches!(err, StoreError::Fixture(_)));
    }
}

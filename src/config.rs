//! Build-time configuration for the backend connection.
//!
//! A WASM bundle has no process environment, so the values are baked in at
//! compile time, the same way the template's public build-time variables
//! work. Unset values fall back to `your-*` placeholders; the collection
//! loader detects those and surfaces a configuration error instead of
//! dispatching doomed requests.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::collections::CollectionSource;

/// Hosted endpoint used when `APPWRITE_ENDPOINT` is not set at build time.
pub const DEFAULT_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Everything the client needs to reach the backend. Opaque to the core
/// logic, which validates only presence/non-placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub project_id: String,
    pub collection_a: CollectionSource,
    pub collection_b: CollectionSource,
}

impl Config {
    /// Read the build-time environment. See `SETUP.md` for the variables.
    #[must_use]
    pub fn from_build_env() -> Self {
        let database_id = option_env!("APPWRITE_DATABASE_ID").unwrap_or("your-database-id");
        Self {
            endpoint: option_env!("APPWRITE_ENDPOINT")
                .unwrap_or(DEFAULT_ENDPOINT)
                .to_owned(),
            project_id: option_env!("APPWRITE_PROJECT_ID")
                .unwrap_or("your-project-id")
                .to_owned(),
            collection_a: CollectionSource {
                datastore_id: database_id.to_owned(),
                collection_id: option_env!("APPWRITE_COLLECTION_1_ID")
                    .unwrap_or("your-collection-id")
                    .to_owned(),
                label: option_env!("APPWRITE_COLLECTION_1_NAME")
                    .unwrap_or("Collection 1")
                    .to_owned(),
            },
            collection_b: CollectionSource {
                datastore_id: database_id.to_owned(),
                collection_id: option_env!("APPWRITE_COLLECTION_2_ID")
                    .unwrap_or("your-collection-id")
                    .to_owned(),
                label: option_env!("APPWRITE_COLLECTION_2_NAME")
                    .unwrap_or("Collection 2")
                    .to_owned(),
            },
        }
    }
}

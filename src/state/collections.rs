//! The collection viewer: fetch two configured collections and publish the
//! joined outcome.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::client::Client;
use crate::net::error::ApiError;
use crate::net::types::Record;

/// Marker substring left behind in unconfigured template values.
const PLACEHOLDER_MARKER: &str = "your-";

/// Configuration error shown when identifiers are missing or placeholders.
pub const UNCONFIGURED: &str =
    "Database and collection ids are not configured. Update your environment with real backend ids (see SETUP.md).";

/// One configured data source. The ids are opaque to this crate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionSource {
    pub datastore_id: String,
    pub collection_id: String,
    /// Heading shown above the fetched records.
    pub label: String,
}

impl CollectionSource {
    /// True when either identifier is empty or still a template placeholder.
    #[must_use]
    pub fn unconfigured(&self) -> bool {
        is_placeholder(&self.datastore_id) || is_placeholder(&self.collection_id)
    }
}

fn is_placeholder(value: &str) -> bool {
    value.is_empty() || value.contains(PLACEHOLDER_MARKER)
}

/// A display label paired with the records fetched for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionView {
    pub label: String,
    /// Records in the order the service returned them.
    pub records: Vec<Record>,
}

/// Dashboard data state for the two configured collections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollectionsState {
    pub views: Option<(CollectionView, CollectionView)>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CollectionsState {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    fn finish(&mut self, a: CollectionView, b: CollectionView) {
        self.loading = false;
        self.views = Some((a, b));
    }
}

/// Fetch both configured collections and publish the outcome into `state`.
///
/// Placeholder identifiers short-circuit with a configuration error before
/// any request is dispatched. Otherwise both reads go out together and are
/// joined all-or-nothing: if either fails, the whole load reports that
/// failure and neither result is rendered.
pub async fn load_collections(
    client: &Client,
    state: RwSignal<CollectionsState>,
    source_a: &CollectionSource,
    source_b: &CollectionSource,
) {
    state.update(CollectionsState::begin);

    if source_a.unconfigured() || source_b.unconfigured() {
        state.update(|s| s.fail(UNCONFIGURED.to_owned()));
        return;
    }

    let (result_a, result_b) = futures::future::join(
        client.list_records(&source_a.datastore_id, &source_a.collection_id),
        client.list_records(&source_b.datastore_id, &source_b.collection_id),
    )
    .await;

    match join_results(result_a, result_b) {
        Ok((records_a, records_b)) => state.update(|s| {
            s.finish(
                CollectionView {
                    label: source_a.label.clone(),
                    records: records_a,
                },
                CollectionView {
                    label: source_b.label.clone(),
                    records: records_b,
                },
            );
        }),
        Err(err) => state.update(|s| s.fail(format!("Error loading data: {err}"))),
    }
}

/// All-or-nothing join: the first failure wins, partial success is dropped.
fn join_results(
    a: Result<Vec<Record>, ApiError>,
    b: Result<Vec<Record>, ApiError>,
) -> Result<(Vec<Record>, Vec<Record>), ApiError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(e), _) | (_, Err(e)) => Err(e),
    }
}

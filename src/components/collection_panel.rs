//! Panel rendering one fetched collection as an id/document table.

use leptos::prelude::*;

use crate::state::collections::CollectionView;

/// Table of records for one collection. The document id is the row key;
/// the body shows the metadata-filtered fields as pretty-printed JSON.
#[component]
pub fn CollectionPanel(collection: CollectionView) -> impl IntoView {
    let CollectionView { label, records } = collection;
    let count = records.len();

    view! {
        <section class="collection-panel">
            <header class="collection-panel__header">
                <h2>{label}</h2>
                <p class="collection-panel__count">{format!("{count} documents")}</p>
            </header>

            {if records.is_empty() {
                view! { <p class="collection-panel__empty">"No documents found."</p> }.into_any()
            } else {
                view! {
                    <table class="collection-panel__table">
                        <thead>
                            <tr>
                                <th>"ID"</th>
                                <th>"Data"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {records
                                .iter()
                                .map(|record| {
                                    view! {
                                        <tr>
                                            <td class="collection-panel__id">{record.id.clone()}</td>
                                            <td>
                                                <pre class="collection-panel__body">{record.display_json()}</pre>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </section>
    }
}

//! Dashboard page listing the two configured collections.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::collection_panel::CollectionPanel;
use crate::config::Config;
use crate::net::client::Client;
use crate::state::collections::{self, CollectionsState};
use crate::state::session::{self, SessionState};

/// Dashboard — greets the user and renders both collection panels.
/// Redirects to `/login` once the session resolves unauthenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<Client>();
    let config = expect_context::<Config>();
    let session = expect_context::<RwSignal<SessionState>>();
    let data = expect_context::<RwSignal<CollectionsState>>();
    let navigate = use_navigate();

    let started = RwSignal::new(false);
    let logout_pending = RwSignal::new(false);

    // Route gate: wait for the session probe, then either redirect or load.
    {
        let client = client.clone();
        let config = config.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.resolved() {
                return;
            }
            if !state.authenticated() {
                navigate("/login", NavigateOptions::default());
            } else if !started.get_untracked() {
                started.set(true);
                let client = client.clone();
                let config = config.clone();
                leptos::task::spawn_local(async move {
                    collections::load_collections(
                        &client,
                        data,
                        &config.collection_a,
                        &config.collection_b,
                    )
                    .await;
                });
            }
        });
    }

    let on_logout = Callback::new(move |()| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_pending.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = session::logout(&client, session).await {
                leptos::logging::warn!("logout failed: {err}");
            }
            logout_pending.set(false);
            navigate("/login", NavigateOptions::default());
        });
    });

    view! {
        <Show
            when=move || session.get().authenticated()
            fallback=|| {
                view! {
                    <main class="screen-loading">
                        <p>"Loading..."</p>
                    </main>
                }
            }
        >
            <main class="dashboard-page">
                <header class="dashboard-page__header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p>
                            {move || {
                                let name = session.get().user.map(|u| u.name).unwrap_or_default();
                                format!("Welcome back, {name}!")
                            }}
                        </p>
                    </div>
                    <button
                        class="btn"
                        disabled=move || logout_pending.get()
                        on:click=move |_| on_logout.run(())
                    >
                        "Logout"
                    </button>
                </header>

                <Show when=move || data.get().error.is_some()>
                    <div class="dashboard-page__error">
                        <p>{move || data.get().error.unwrap_or_default()}</p>
                        <p class="dashboard-page__error-hint">
                            "Find the database and collection ids in your backend console, then update the environment described in SETUP.md."
                        </p>
                    </div>
                </Show>

                <Show when=move || data.get().loading && data.get().error.is_none()>
                    <p class="dashboard-page__loading">"Loading data..."</p>
                </Show>

                {move || {
                    data.get()
                        .views
                        .map(|(a, b)| {
                            view! {
                                <div class="dashboard-page__collections">
                                    <CollectionPanel collection=a/>
                                    <CollectionPanel collection=b/>
                                </div>
                            }
                        })
                }}
            </main>
        </Show>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::Config;
use crate::net::client::Client;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::collections::CollectionsState;
use crate::state::session::{self, SessionState};

/// Root component.
///
/// Builds the backend client from build-time configuration, provides the
/// shared state contexts, kicks off the session probe, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = Config::from_build_env();
    let client = Client::new(&config.endpoint, &config.project_id).with_observer(
        std::sync::Arc::new(|method, url, body| match body {
            Some(body) => log::debug!("[backend] {method} {url} {body}"),
            None => log::debug!("[backend] {method} {url}"),
        }),
    );

    let session = RwSignal::new(SessionState::default());
    let collections = RwSignal::new(CollectionsState::default());

    provide_context(config);
    provide_context(client.clone());
    provide_context(session);
    provide_context(collections);

    // Resolve the current session exactly once per page load.
    leptos::task::spawn_local(async move {
        session::initialize(&client, session).await;
    });

    view! {
        <Title text="Docboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

//! Login page, toggling between login and register modes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::client::Client;
use crate::state::session::{self, SessionState};

/// Login/register form. Successful authentication navigates to the dashboard.
#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<Client>();
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let is_login = RwSignal::new(true);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let name = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let pending = RwSignal::new(false);
    let show_password = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // The submit button is disabled while a request is in flight, but an
        // Enter keypress can still fire the form; drop duplicates here.
        if pending.get_untracked() {
            return;
        }
        error.set(String::new());
        pending.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = if is_login.get_untracked() {
                session::login(
                    &client,
                    session,
                    &email.get_untracked(),
                    &password.get_untracked(),
                )
                .await
            } else {
                session::register(
                    &client,
                    session,
                    &email.get_untracked(),
                    &password.get_untracked(),
                    &name.get_untracked(),
                )
                .await
            };
            pending.set(false);
            match result {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(message) => error.set(message),
            }
        });
    };

    view! {
        <main class="login-page">
            <div class="login-page__card">
                <header class="login-page__intro">
                    <h1>{move || if is_login.get() { "Login" } else { "Register" }}</h1>
                    <p>
                        {move || {
                            if is_login.get() {
                                "Welcome back! Please login to your account."
                            } else {
                                "Create a new account to get started."
                            }
                        }}
                    </p>
                </header>

                <form class="login-page__form" on:submit=submit>
                    <Show when=move || !is_login.get()>
                        <label class="login-page__label">
                            "Name"
                            <input
                                type="text"
                                required=true
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                                placeholder="John Doe"
                            />
                        </label>
                    </Show>

                    <label class="login-page__label">
                        "Email"
                        <input
                            type="text"
                            required=true
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            placeholder="you@example.com"
                        />
                        <span class="login-page__hint">
                            "Use the same email address you registered with."
                        </span>
                    </label>

                    <label class="login-page__label">
                        "Password"
                        <div class="login-page__password">
                            <input
                                type=move || if show_password.get() { "text" } else { "password" }
                                required=true
                                minlength="8"
                                autocomplete=move || {
                                    if is_login.get() { "current-password" } else { "new-password" }
                                }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                placeholder="********"
                            />
                            <button
                                type="button"
                                class="login-page__reveal"
                                tabindex="-1"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <Show when=move || !error.get().is_empty()>
                        <p class="login-page__error">{move || error.get()}</p>
                    </Show>

                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || {
                            if pending.get() {
                                "Processing..."
                            } else if is_login.get() {
                                "Login"
                            } else {
                                "Register"
                            }
                        }}
                    </button>
                </form>

                <button
                    class="login-page__switch"
                    on:click=move |_| {
                        is_login.update(|v| *v = !*v);
                        error.set(String::new());
                    }
                >
                    {move || {
                        if is_login.get() {
                            "Don't have an account? Register"
                        } else {
                            "Already have an account? Login"
                        }
                    }}
                </button>
            </div>
        </main>
    }
}

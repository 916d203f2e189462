use super::*;
use std::sync::{Arc, Mutex};

use futures::executor::block_on;
use leptos::prelude::GetUntracked;

fn recording_client() -> (Client, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);
    let client = Client::new("https://backend.test/v1", "proj").with_observer(Arc::new(
        move |method, url, _| {
            seen.lock().unwrap().push(format!("{method} {url}"));
        },
    ));
    (client, calls)
}

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_owned(),
        name: name.to_owned(),
        email: format!("{name}@example.com"),
    }
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_starts_loading_without_a_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert_eq!(state.status, SessionStatus::Loading);
    assert!(!state.resolved());
    assert!(!state.authenticated());
}

#[test]
fn resolving_with_a_user_authenticates() {
    let mut state = SessionState::default();
    state.resolve(Some(user("u1", "ann")));
    assert!(state.resolved());
    assert!(state.authenticated());
}

#[test]
fn resolving_without_a_user_is_not_an_error_state() {
    let mut state = SessionState::default();
    state.resolve(None);
    assert!(state.resolved());
    assert!(!state.authenticated());
}

#[test]
fn logout_end_state_has_no_user() {
    let mut state = SessionState::default();
    state.resolve(Some(user("u1", "ann")));
    state.resolve(None);
    assert!(state.resolved());
    assert!(state.user.is_none());
}

#[test]
fn register_and_login_share_the_same_end_state() {
    let mut via_login = SessionState::default();
    via_login.resolve(Some(user("u1", "ann")));

    let mut via_register = SessionState::default();
    via_register.resolve(Some(user("u1", "ann")));

    assert_eq!(via_login, via_register);
}

// =============================================================
// login
// =============================================================

#[test]
fn empty_password_fails_locally_without_a_network_call() {
    let (client, calls) = recording_client();
    let session = RwSignal::new(SessionState::default());

    let result = block_on(login(&client, session, "ann@example.com", ""));

    assert_eq!(result, Err(EMPTY_PASSWORD.to_owned()));
    assert!(calls.lock().unwrap().is_empty());
    // A local validation failure must not resolve the session.
    assert_eq!(session.get_untracked().status, SessionStatus::Loading);
}

#[test]
fn login_dispatches_the_session_request_first() {
    let (client, calls) = recording_client();
    let session = RwSignal::new(SessionState::default());

    let result = block_on(login(&client, session, "ann@example.com", "hunter2hunter"));

    // Native builds have no transport, so the op surfaces the guidance text.
    assert_eq!(result, Err(CONNECTION_HELP.to_owned()));
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        ["POST https://backend.test/v1/account/sessions/email"]
    );
}

// =============================================================
// register
// =============================================================

#[test]
fn register_with_empty_password_is_local_only() {
    let (client, calls) = recording_client();
    let session = RwSignal::new(SessionState::default());

    let result = block_on(register(
        &client,
        session,
        "ann@example.com",
        "",
        "Ann",
    ));

    assert_eq!(result, Err(EMPTY_PASSWORD.to_owned()));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn register_dispatches_the_account_request_first() {
    let (client, calls) = recording_client();
    let session = RwSignal::new(SessionState::default());

    let result = block_on(register(
        &client,
        session,
        "ann@example.com",
        "hunter2hunter",
        "Ann",
    ));

    assert_eq!(result, Err(CONNECTION_HELP.to_owned()));
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        ["POST https://backend.test/v1/account"]
    );
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_resolves_to_no_user_on_failure() {
    let (client, _calls) = recording_client();
    let session = RwSignal::new(SessionState::default());

    block_on(initialize(&client, session));

    let state = session.get_untracked();
    assert!(state.resolved());
    assert!(!state.authenticated());
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn rejected_credentials_collapse_to_the_generic_message() {
    let err = ApiError::Service {
        code: UNAUTHORIZED,
        message: "Invalid `password` param: must be between 8 and 265 chars".to_owned(),
    };
    assert_eq!(login_error(&err), INVALID_CREDENTIALS);
}

#[test]
fn duplicate_account_maps_to_the_exists_message() {
    let err = ApiError::Service {
        code: CONFLICT,
        message: "A user with the same id, email, or phone already exists".to_owned(),
    };
    assert_eq!(register_error(&err), ACCOUNT_EXISTS);
}

#[test]
fn connectivity_failures_map_to_setup_guidance() {
    let err = ApiError::Network("dns failure".to_owned());
    assert_eq!(login_error(&err), CONNECTION_HELP);
    assert_eq!(register_error(&err), CONNECTION_HELP);

    let err = ApiError::Service {
        code: 500,
        message: "Failed to fetch".to_owned(),
    };
    assert_eq!(login_error(&err), CONNECTION_HELP);
}

#[test]
fn other_service_errors_pass_through_raw() {
    let err = ApiError::Service {
        code: 429,
        message: "Rate limit for the current endpoint has been exceeded".to_owned(),
    };
    assert_eq!(
        login_error(&err),
        "Rate limit for the current endpoint has been exceeded"
    );
    assert_eq!(
        register_error(&err),
        "Rate limit for the current endpoint has been exceeded"
    );
}
